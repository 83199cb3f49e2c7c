//! Fetch-then-render orchestration for host exports

use std::sync::Arc;

use hostatlas_domain::{HostScope, Result};
use tracing::{info, warn};

use super::{render, ExportDocument, ExportFormat};
use crate::inventory::InventoryApi;

/// Produces host export documents from the remote inventory.
pub struct HostExportService {
    api: Arc<dyn InventoryApi>,
}

impl HostExportService {
    pub fn new(api: Arc<dyn InventoryApi>) -> Self {
        Self { api }
    }

    /// Fetch every host in `scope` and render it as `format`.
    ///
    /// # Errors
    /// Propagates a first-page failure of the host listing, or a workbook
    /// that could not be assembled.
    pub async fn export(&self, scope: HostScope, format: ExportFormat) -> Result<ExportDocument> {
        let hosts = self.api.list_hosts(scope).await?;

        if !hosts.is_complete() {
            warn!(?scope, exported = hosts.len(), "host listing truncated; export is partial");
        }
        info!(?scope, ?format, hosts = hosts.len(), "rendering host export");

        render(format, &hosts.results)
    }
}
