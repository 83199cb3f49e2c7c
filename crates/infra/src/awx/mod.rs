//! AWX (Ansible Automation Controller) integration
//!
//! # Architecture
//!
//! - **Client**: `RemoteApiClient` - authenticated GETs, pagination, identity probe
//! - **Operations**: `AwxInventoryApi` - implements `hostatlas_core::InventoryApi`
//! - **Paths**: REST path templates under `/api/v2/`
//!
//! Pages are fetched one after the other; each page's URL is only known
//! once the previous page has arrived.

pub mod client;
pub mod operations;
pub mod paths;

pub use client::RemoteApiClient;
pub use operations::AwxInventoryApi;
