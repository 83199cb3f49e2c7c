//! # HostAtlas Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port interfaces for the remote inventory API (traits)
//! - Identifier validation applied before any remote call
//! - Host export rendering (CSV, XLSX, HTML)
//!
//! ## Architecture Principles
//! - Only depends on `hostatlas-domain`
//! - No HTTP or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod export;
pub mod inventory;
pub mod validation;

// Re-export specific items to avoid ambiguity
pub use export::{ExportDocument, ExportFormat, HostExportService};
pub use inventory::ports::InventoryApi;
pub use validation::{parse_path_id, parse_query_id, HostQuery};
