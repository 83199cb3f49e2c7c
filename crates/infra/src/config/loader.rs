//! Configuration loader
//!
//! ## Loading Strategy
//! 1. Environment variables, when `HOSTATLAS_BIND_ADDR` is set
//! 2. Otherwise the first config file found by [`probe_config_paths`]
//! 3. Otherwise built-in defaults (with a warning)
//!
//! ## Environment Variables
//! - `HOSTATLAS_BIND_ADDR`: listen address (required for env mode)
//! - `HOSTATLAS_DEFAULT_BASE_URL`: login page default, falls back to
//!   `AWX_BASE_URL`
//! - `HOSTATLAS_REQUEST_TIMEOUT_SECS`: per-request timeout in seconds
//! - `HOSTATLAS_ACCEPT_INVALID_CERTS`: skip TLS certificate verification
//! - `HOSTATLAS_USER_AGENT`: user agent sent to the remote API
//! - `HOSTATLAS_SESSION_IDLE_SECS`: idle lifetime of a login session
//! - `HOSTATLAS_SECURE_COOKIES`: mark the session cookie `Secure`
//!
//! ## File Locations
//! `config.{toml,json}` and `hostatlas.{toml,json}` in the working directory,
//! its parent and grandparent, then the same names next to the executable.

use std::path::{Path, PathBuf};

use hostatlas_domain::{Config, HostAtlasError, RemoteConfig, Result, ServerConfig, TlsPolicy};

const FILE_NAMES: [&str; 4] = ["config.toml", "config.json", "hostatlas.toml", "hostatlas.json"];
const SEARCH_DIRS: [&str; 3] = [".", "..", "../.."];

/// Load configuration with automatic fallback strategy
///
/// Environment variables win when present. A missing environment falls back
/// to a config file, and a missing file falls back to [`Config::default`].
///
/// # Errors
/// Returns `HostAtlasError::Config` if a source exists but holds invalid
/// values (bad number, unparsable file).
pub fn load() -> Result<Config> {
    if std::env::var_os("HOSTATLAS_BIND_ADDR").is_some() {
        let config = load_from_env()?;
        tracing::info!("Configuration loaded from environment variables");
        return Ok(config);
    }

    match probe_config_paths() {
        Some(path) => load_from_file(Some(path)),
        None => {
            tracing::warn!("No configuration found; using built-in defaults");
            Ok(Config::default())
        }
    }
}

/// Load configuration from environment variables
///
/// # Errors
/// Returns `HostAtlasError::Config` if `HOSTATLAS_BIND_ADDR` is missing or a
/// numeric variable cannot be parsed.
pub fn load_from_env() -> Result<Config> {
    let bind_addr = env_var("HOSTATLAS_BIND_ADDR")?;
    let default_base_url = optional_env("HOSTATLAS_DEFAULT_BASE_URL")
        .or_else(|| optional_env("AWX_BASE_URL"));

    let server_defaults = ServerConfig::default();
    let session_idle_secs =
        env_u64("HOSTATLAS_SESSION_IDLE_SECS", server_defaults.session_idle_secs)?;
    let secure_cookies = env_bool("HOSTATLAS_SECURE_COOKIES", server_defaults.secure_cookies)?;

    let defaults = RemoteConfig::default();
    let request_timeout_secs =
        env_u64("HOSTATLAS_REQUEST_TIMEOUT_SECS", defaults.request_timeout_secs)?;
    let tls = if env_bool("HOSTATLAS_ACCEPT_INVALID_CERTS", false)? {
        TlsPolicy::AcceptInvalidCerts
    } else {
        TlsPolicy::Verify
    };
    let user_agent = optional_env("HOSTATLAS_USER_AGENT").unwrap_or(defaults.user_agent);

    Ok(Config {
        server: ServerConfig { bind_addr, default_base_url, session_idle_secs, secure_cookies },
        remote: RemoteConfig { request_timeout_secs, tls, user_agent },
    })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes the standard locations. Format is chosen by
/// extension.
///
/// # Errors
/// Returns `HostAtlasError::Config` if the file is missing, unreadable, or
/// not valid TOML/JSON.
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) if p.exists() => p,
        Some(p) => {
            return Err(HostAtlasError::Config(format!(
                "Config file not found: {}",
                p.display()
            )))
        }
        None => probe_config_paths().ok_or_else(|| {
            HostAtlasError::Config("No config file found in any of the standard locations".into())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| HostAtlasError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| HostAtlasError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| HostAtlasError::Config(format!("Invalid JSON format: {e}"))),
        other => Err(HostAtlasError::Config(format!("Unsupported config format: {other}"))),
    }
}

/// First existing config file among the standard locations, if any.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut roots = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        roots.push(cwd);
    }
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            roots.push(exe_dir.to_path_buf());
        }
    }

    roots
        .iter()
        .flat_map(|root| SEARCH_DIRS.iter().map(move |dir| root.join(dir)))
        .flat_map(|dir| FILE_NAMES.iter().map(move |name| dir.join(name)))
        .find(|candidate| candidate.is_file())
}

fn env_var(key: &str) -> Result<String> {
    optional_env(key).ok_or_else(|| {
        HostAtlasError::Config(format!("Missing required environment variable: {key}"))
    })
}

/// Set and non-blank, trimmed.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn env_u64(key: &str, default: u64) -> Result<u64> {
    match optional_env(key) {
        Some(raw) => raw
            .parse::<u64>()
            .map_err(|e| HostAtlasError::Config(format!("Invalid value for {key} '{raw}': {e}"))),
        None => Ok(default),
    }
}

/// Accepts `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive).
fn env_bool(key: &str, default: bool) -> Result<bool> {
    let Some(raw) = optional_env(key) else {
        return Ok(default);
    };

    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(HostAtlasError::Config(format!("Invalid boolean for {key}: '{raw}'"))),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use once_cell::sync::Lazy;
    use tempfile::TempDir;

    use super::*;

    static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

    const ENV_KEYS: [&str; 8] = [
        "HOSTATLAS_BIND_ADDR",
        "HOSTATLAS_DEFAULT_BASE_URL",
        "AWX_BASE_URL",
        "HOSTATLAS_REQUEST_TIMEOUT_SECS",
        "HOSTATLAS_ACCEPT_INVALID_CERTS",
        "HOSTATLAS_USER_AGENT",
        "HOSTATLAS_SESSION_IDLE_SECS",
        "HOSTATLAS_SECURE_COOKIES",
    ];

    fn clear_env() {
        for key in ENV_KEYS {
            std::env::remove_var(key);
        }
    }

    fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn env_bool_parsing() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");

        for (value, expected) in [
            ("1", true),
            ("TRUE", true),
            ("yes", true),
            ("on", true),
            ("0", false),
            ("false", false),
            ("no", false),
            ("off", false),
        ] {
            std::env::set_var("HOSTATLAS_TEST_BOOL", value);
            assert_eq!(env_bool("HOSTATLAS_TEST_BOOL", !expected).unwrap(), expected, "{value}");
        }

        std::env::set_var("HOSTATLAS_TEST_BOOL", "maybe");
        let err = env_bool("HOSTATLAS_TEST_BOOL", false).unwrap_err();
        assert!(matches!(err, HostAtlasError::Config(ref msg) if msg.contains("maybe")));

        std::env::remove_var("HOSTATLAS_TEST_BOOL");
        assert!(env_bool("HOSTATLAS_TEST_BOOL", true).unwrap());
        assert!(!env_bool("HOSTATLAS_TEST_BOOL", false).unwrap());
    }

    #[test]
    fn load_from_env_rejects_unknown_boolean() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var("HOSTATLAS_BIND_ADDR", "127.0.0.1:9000");
        std::env::set_var("HOSTATLAS_ACCEPT_INVALID_CERTS", "maybe");

        let result = load_from_env();
        clear_env();

        assert!(matches!(result, Err(HostAtlasError::Config(_))));
    }

    #[test]
    fn load_from_env_all_vars_set() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var("HOSTATLAS_BIND_ADDR", "0.0.0.0:8080");
        std::env::set_var("HOSTATLAS_DEFAULT_BASE_URL", "https://awx.example.com");
        std::env::set_var("HOSTATLAS_REQUEST_TIMEOUT_SECS", "12");
        std::env::set_var("HOSTATLAS_ACCEPT_INVALID_CERTS", "yes");
        std::env::set_var("HOSTATLAS_USER_AGENT", "atlas-test");
        std::env::set_var("HOSTATLAS_SESSION_IDLE_SECS", "600");
        std::env::set_var("HOSTATLAS_SECURE_COOKIES", "true");

        let config = load_from_env().expect("env config");
        clear_env();

        assert_eq!(config.server.bind_addr, "0.0.0.0:8080");
        assert_eq!(config.server.default_base_url.as_deref(), Some("https://awx.example.com"));
        assert_eq!(config.remote.request_timeout_secs, 12);
        assert_eq!(config.remote.tls, TlsPolicy::AcceptInvalidCerts);
        assert_eq!(config.remote.user_agent, "atlas-test");
        assert_eq!(config.server.session_idle_secs, 600);
        assert!(config.server.secure_cookies);
    }

    #[test]
    fn load_from_env_defaults_optional_values() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var("HOSTATLAS_BIND_ADDR", "127.0.0.1:9000");
        std::env::set_var("AWX_BASE_URL", "https://tower.internal");

        let config = load_from_env().expect("env config");
        clear_env();

        assert_eq!(config.server.default_base_url.as_deref(), Some("https://tower.internal"));
        assert_eq!(config.remote, RemoteConfig::default());
    }

    #[test]
    fn load_from_env_missing_bind_addr() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        let err = load_from_env().unwrap_err();
        assert!(matches!(err, HostAtlasError::Config(ref msg) if msg.contains("HOSTATLAS_BIND_ADDR")));
    }

    #[test]
    fn load_from_env_invalid_timeout() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var("HOSTATLAS_BIND_ADDR", "127.0.0.1:9000");
        std::env::set_var("HOSTATLAS_REQUEST_TIMEOUT_SECS", "soon");

        let result = load_from_env();
        clear_env();

        assert!(matches!(result, Err(HostAtlasError::Config(_))));
    }

    #[test]
    fn load_from_file_toml() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "hostatlas.toml",
            r#"
[server]
bind_addr = "0.0.0.0:5001"
default_base_url = "https://awx.example.com"

[remote]
request_timeout_secs = 5
"#,
        );

        let config = load_from_file(Some(path)).expect("toml config");
        assert_eq!(config.server.bind_addr, "0.0.0.0:5001");
        assert_eq!(config.remote.request_timeout_secs, 5);
        assert_eq!(config.remote.tls, TlsPolicy::Verify);
    }

    #[test]
    fn load_from_file_json() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "config.json",
            r#"{"remote": {"tls": "accept_invalid_certs", "user_agent": "json-agent"}}"#,
        );

        let config = load_from_file(Some(path)).expect("json config");
        assert_eq!(config.server, ServerConfig::default());
        assert_eq!(config.remote.tls, TlsPolicy::AcceptInvalidCerts);
        assert_eq!(config.remote.user_agent, "json-agent");
    }

    #[test]
    fn load_from_file_not_found() {
        let err = load_from_file(Some(PathBuf::from("/nonexistent/config.json"))).unwrap_err();
        assert!(matches!(err, HostAtlasError::Config(_)));
    }

    #[test]
    fn load_from_file_invalid_json() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "config.json", r#"{ "server": "#);

        let err = load_from_file(Some(path)).unwrap_err();
        assert!(matches!(err, HostAtlasError::Config(ref msg) if msg.contains("JSON")));
    }

    #[test]
    fn parse_config_unsupported_format() {
        let result = parse_config("key: value", Path::new("config.yaml"));
        assert!(matches!(result, Err(HostAtlasError::Config(_))));
    }
}
