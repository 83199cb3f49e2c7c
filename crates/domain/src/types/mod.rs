//! Domain types and models

pub mod credentials;
pub mod inventory;

pub use credentials::{AuthMode, CredentialContext, Credentials};
pub use inventory::{ConnectionCheckResult, HostRecord, HostScope, LastJobSummary, PagedResult};
