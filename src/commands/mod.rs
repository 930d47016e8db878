//! # Command Handlers
//!
//! This module contains the command handlers for the leasectl CLI application.
//!
//! ## Structure
//!
//! - `contract` - Lease contract commands (create, list, show, delete)
//! - `errors` - Usage, parse and command errors, and their user-facing rendering
//! - `error_extensions` - User-facing rendering for errors defined elsewhere in the crate
//! - `shared` - Shared utilities and validation functions

pub mod contract;
pub mod error_extensions;
pub mod errors;
pub mod shared;

pub use contract::{
    CreateLeaseContract, DeleteLeaseContract, ListLeaseContract, ShowLeaseContract,
    handle_contract_command,
};
pub use errors::{CommandError, PropertiesParseError, UsageError, UserError, format_cli_error};
