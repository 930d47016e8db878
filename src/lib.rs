//! # esileap: Lease Contracts from the Command Line
//!
//! A lease service hands out time-boxed access to resources.  Providers publish *offers*;
//! a lessee creates a *contract* against an offer for a window of time.  This crate is the
//! client side of the contract half of that API:
//!
//! - **Data model**: [`Contract`] and the [`CreateContractRequest`] body, as fixed-schema
//!   serde records
//! - **Service interface**: the [`ContractManager`] trait, one method per remote call
//! - **HTTP client**: [`LeaseClient`], a reqwest implementation of [`ContractManager`]
//! - **Commands**: `create`, `list`, `show` and `delete`, each of which validates its
//!   arguments, makes exactly one call, and shapes the result for display
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │ leasectl (argument parsing, exit codes) │
//! ├─────────────────────────────────────────┤
//! │ Commands (validate, call, project)      │
//! ├─────────────────────────────────────────┤
//! │ ContractManager (injected interface)    │
//! ├─────────────────────────────────────────┤
//! │ LeaseClient (HTTP + JSON)               │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage Examples
//!
//! ### Projecting a Contract for Display
//!
//! ```rust
//! # use esileap::{Contract, Listing, contract::LIST_FIELDS};
//! # use serde_json::json;
//! let contract: Contract = serde_json::from_value(json!({
//!     "uuid": "9999999",
//!     "offer_uuid": "111111111",
//!     "start_date": "2010",
//!     "end_date": "3000-00-00T13",
//!     "status": "fake_status",
//! }))
//! .unwrap();
//!
//! let listing = Listing::from_contracts(&[contract], &LIST_FIELDS);
//! assert_eq!(
//!     listing.columns,
//!     vec!["UUID", "Start Date", "End Date", "Offer UUID", "Status"]
//! );
//! assert_eq!(listing.rows[0][0], json!("9999999"));
//! ```
//!
//! ### Validating Arguments Without a Network Call
//!
//! ```rust
//! # use esileap::commands::ShowLeaseContract;
//! assert!(ShowLeaseContract::from_args(&[]).is_err());
//!
//! let show = ShowLeaseContract::from_args(&["9999999".to_string()]).unwrap();
//! assert_eq!(show.uuid, "9999999");
//! ```

#![deny(missing_docs)]
mod errors;
mod http_utils;
mod lease_service;

/// Command-line interface utilities for program termination and output formatting.
pub mod cli_utils;

/// Command-line interface command handlers.
///
/// This module contains the command handlers for the leasectl CLI application.
pub mod commands;

/// Client configuration: endpoint, credentials and timeouts.
pub mod config;

/// Contract records and their display projections.
pub mod contract;

/// Display shapes and renderers for command results.
pub mod output;

pub use config::{ClientConfig, ConfigError, ConfigOverrides};
pub use contract::{Contract, ContractCollection, ContractField, CreateContractRequest};
pub use errors::RemoteError;
pub use http_utils::LeaseClient;
pub use lease_service::ContractManager;
pub use output::{Listing, Record};
