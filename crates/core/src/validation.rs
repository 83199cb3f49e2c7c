//! Identifier validation for the caller boundary
//!
//! Route handlers run these before building a remote client, so malformed
//! input never turns into a network call.

use hostatlas_domain::{HostAtlasError, HostScope, Result};

/// Parse a path or query identifier as a non-negative integer.
///
/// Only ASCII digits are accepted: no sign, no whitespace, no empty string.
///
/// # Errors
/// Returns `HostAtlasError::Validation("Invalid <name>")` when the value is
/// not a digit string or does not fit in `u64`.
pub fn parse_path_id(name: &str, raw: &str) -> Result<u64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid(name));
    }
    raw.parse::<u64>().map_err(|_| invalid(name))
}

/// Parse an optional query-string identifier.
///
/// Absent and empty values both mean "not supplied".
///
/// # Errors
/// Same as [`parse_path_id`] for a supplied value.
pub fn parse_query_id(name: &str, raw: Option<&str>) -> Result<Option<u64>> {
    match raw {
        None | Some("") => Ok(None),
        Some(value) => parse_path_id(name, value).map(Some),
    }
}

fn invalid(name: &str) -> HostAtlasError {
    HostAtlasError::Validation(format!("Invalid {name}"))
}

/// Validated `inventory_id` / `group_id` pair from a host query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostQuery {
    pub inventory_id: u64,
    pub group_id: Option<u64>,
}

impl HostQuery {
    /// The inventory id is required; the group id is optional.
    ///
    /// # Errors
    /// `Validation("Invalid Inventory ID")` or `Validation("Invalid Group ID")`.
    pub fn validate(inventory_id: Option<&str>, group_id: Option<&str>) -> Result<Self> {
        let inventory_id = parse_path_id("Inventory ID", inventory_id.unwrap_or_default())?;
        let group_id = parse_query_id("Group ID", group_id)?;
        Ok(Self { inventory_id, group_id })
    }

    pub fn scope(self) -> HostScope {
        HostScope::from_ids(self.inventory_id, self.group_id)
    }
}
