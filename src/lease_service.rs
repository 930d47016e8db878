//! # Lease Service Interface
//!
//! The contract commands never talk HTTP themselves.  They are handed something that implements
//! [`ContractManager`] and call exactly one of its operations per invocation.
//!
//! ## Implementations
//!
//! - **LeaseClient**: the reqwest-backed client used by `leasectl`
//! - **FakeContractManager**: a recording fake used by the unit tests
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! # async fn example() -> Result<(), esileap::RemoteError> {
//! use esileap::{ClientConfig, ContractManager, LeaseClient};
//!
//! let client = LeaseClient::new(ClientConfig::default())?;
//! for contract in client.list().await? {
//!     println!("{}", contract);
//! }
//! # Ok(())
//! # }
//! ```

use crate::{Contract, CreateContractRequest, RemoteError};

/// The contract operations of a lease service.
///
/// Each method maps to one remote call.  Implementations must not retry; any failure is
/// returned as a [`RemoteError`] for the caller to surface.
#[allow(async_fn_in_trait)]
pub trait ContractManager {
    /// Creates a contract.
    ///
    /// # Returns
    /// * `Ok(Contract)` - The contract as created by the service
    /// * `Err(RemoteError)` - The service rejected the request or was unreachable
    async fn create(&self, request: &CreateContractRequest) -> Result<Contract, RemoteError>;

    /// Lists every contract visible to the caller, in service order.
    async fn list(&self) -> Result<Vec<Contract>, RemoteError>;

    /// Fetches one contract by uuid.
    ///
    /// # Returns
    /// * `Ok(Contract)` - The contract
    /// * `Err(RemoteError)` - With status 404 when no such contract exists
    async fn get(&self, uuid: &str) -> Result<Contract, RemoteError>;

    /// Deletes one contract by uuid.
    async fn delete(&self, uuid: &str) -> Result<(), RemoteError>;
}
