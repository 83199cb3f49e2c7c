//! # HostAtlas Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - HTTP client with explicit timeout and TLS policy
//! - AWX remote API client (authentication, pagination, connectivity check)
//! - The AWX implementation of `hostatlas_core::InventoryApi`
//! - Configuration loading from environment and files
//!
//! ## Architecture
//! - Implements traits defined in `hostatlas-core`
//! - Depends on `hostatlas-domain` and `hostatlas-core`
//! - Contains all "impure" code (network and filesystem I/O)

pub mod awx;
pub mod config;
pub mod errors;
pub mod http;

// Re-export commonly used items
pub use awx::{AwxInventoryApi, RemoteApiClient};
pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder};
