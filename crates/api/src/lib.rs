//! # HostAtlas API
//!
//! HTTP application layer - route handlers and server wiring.
//!
//! This crate contains:
//! - Route handlers (browser/dashboard → remote inventory bridge)
//! - Application context and the in-process session store
//! - Error-to-response mapping
//! - Main entry point and setup
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Builds one remote client per request from the session's credentials
//! - Exposes an axum [`Router`](axum::Router) via [`build_router`]

pub mod commands;
pub mod context;
pub mod error;
pub mod router;
pub mod utils;

// Re-export for convenience
pub use context::{AppContext, SessionStore, SharedContext};
pub use error::ApiFailure;
pub use router::build_router;
