//! Application constants
//!
//! Centralized location for domain-level constants used throughout the
//! application.

// Remote client defaults
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_USER_AGENT: &str = "HostAtlas/0.1 (Rust)";

// Web server defaults
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";
pub const SESSION_COOKIE_NAME: &str = "hostatlas_session";
pub const DEFAULT_SESSION_IDLE_SECS: u64 = 8 * 60 * 60;

// Export
pub const EXPORT_HEADERS: [&str; 6] =
    ["ID", "Name", "Description", "Enabled", "Last Job ID", "Last Job Status"];
pub const MISSING_JOB_STATUS: &str = "N/A";
pub const EXPORT_FILE_STEM: &str = "hosts_export";
