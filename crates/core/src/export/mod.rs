//! Host export rendering.
//!
//! Renders a materialized host listing into a downloadable document. The
//! renderers are pure functions from rows to bytes; fetching happens in
//! [`HostExportService`].

mod csv;
mod html;
pub mod service;
mod xlsx;

use std::str::FromStr;

use hostatlas_domain::constants::{EXPORT_FILE_STEM, MISSING_JOB_STATUS};
use hostatlas_domain::{HostAtlasError, HostRecord, Result};

pub use service::HostExportService;

/// Supported export formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Csv,
    Xlsx,
    Html,
}

impl ExportFormat {
    pub fn content_type(self) -> &'static str {
        match self {
            Self::Csv => "text/csv; charset=utf-8",
            Self::Xlsx => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
            Self::Html => "text/html; charset=utf-8",
        }
    }

    /// Download file name; HTML reports are shown inline.
    pub fn attachment_name(self) -> Option<String> {
        match self {
            Self::Csv => Some(format!("{EXPORT_FILE_STEM}.csv")),
            Self::Xlsx => Some(format!("{EXPORT_FILE_STEM}.xlsx")),
            Self::Html => None,
        }
    }
}

impl FromStr for ExportFormat {
    type Err = HostAtlasError;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value {
            "csv" => Ok(Self::Csv),
            "xlsx" | "excel" => Ok(Self::Xlsx),
            "html" => Ok(Self::Html),
            _ => Err(HostAtlasError::Validation("Invalid format".into())),
        }
    }
}

/// One exported line, already flattened to display strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRow {
    pub id: String,
    pub name: String,
    pub description: String,
    pub enabled: String,
    pub last_job_id: String,
    pub last_job_status: String,
}

impl ExportRow {
    pub fn cells(&self) -> [&str; 6] {
        [
            self.id.as_str(),
            self.name.as_str(),
            self.description.as_str(),
            self.enabled.as_str(),
            self.last_job_id.as_str(),
            self.last_job_status.as_str(),
        ]
    }
}

impl From<&HostRecord> for ExportRow {
    fn from(host: &HostRecord) -> Self {
        let last_job = host.last_job().unwrap_or_default();
        Self {
            id: host.id().map(|id| id.to_string()).unwrap_or_default(),
            name: host.name().to_string(),
            description: host.description().to_string(),
            enabled: if host.enabled() { "True" } else { "False" }.to_string(),
            last_job_id: last_job.id.map(|id| id.to_string()).unwrap_or_default(),
            last_job_status: last_job.status.unwrap_or_else(|| MISSING_JOB_STATUS.to_string()),
        }
    }
}

/// Rendered export ready to be written to an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportDocument {
    pub format: ExportFormat,
    pub body: Vec<u8>,
}

/// Render hosts in the requested format.
///
/// # Errors
/// Returns `HostAtlasError::Internal` if the workbook cannot be assembled.
pub fn render(format: ExportFormat, hosts: &[HostRecord]) -> Result<ExportDocument> {
    let rows: Vec<ExportRow> = hosts.iter().map(ExportRow::from).collect();
    let body = match format {
        ExportFormat::Csv => csv::render(&rows).into_bytes(),
        ExportFormat::Xlsx => xlsx::render(&rows)?,
        ExportFormat::Html => html::render(&rows).into_bytes(),
    };
    Ok(ExportDocument { format, body })
}
