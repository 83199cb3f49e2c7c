//! Shared helpers for route handlers

pub mod command_helpers;
pub mod logging;
