//! # HostAtlas Domain
//!
//! Business domain types and models for HostAtlas.
//!
//! This crate contains:
//! - Credential context handed from the session layer to the remote client
//! - Inventory data types (host records, paged results, connection checks)
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Domain constants
//!
//! ## Architecture
//! - No dependencies on other HostAtlas crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
