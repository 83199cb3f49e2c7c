//! Host listing download

use axum::extract::{Query, State};
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::http::HeaderValue;
use axum::response::{IntoResponse, Response};
use hostatlas_core::{ExportDocument, ExportFormat, HostExportService, HostQuery};
use serde::Deserialize;

use crate::context::{AuthenticatedSession, SharedContext};
use crate::error::ApiFailure;
use crate::utils::command_helpers::execute_logged;

/// Query string of `GET /export`.
#[derive(Debug, Default, Deserialize)]
pub struct ExportParams {
    /// `csv` (default), `xlsx`/`excel`, or `html`
    pub format: Option<String>,
    pub inventory_id: Option<String>,
    pub group_id: Option<String>,
}

/// `GET /export` - every host in the selected inventory or group as a file.
pub async fn export_hosts(
    session: AuthenticatedSession,
    State(ctx): State<SharedContext>,
    Query(params): Query<ExportParams>,
) -> Result<Response, ApiFailure> {
    let document = execute_logged("export::export_hosts", || async {
        let query =
            HostQuery::validate(params.inventory_id.as_deref(), params.group_id.as_deref())?;
        let format = match params.format.as_deref() {
            None | Some("") => ExportFormat::default(),
            Some(raw) => raw.parse::<ExportFormat>()?,
        };

        let api = ctx.inventory_api(session.credentials)?;
        HostExportService::new(api).export(query.scope(), format).await
    })
    .await?;

    Ok(document_response(document))
}

fn document_response(document: ExportDocument) -> Response {
    let mut response = document.body.into_response();
    let headers = response.headers_mut();

    headers.insert(CONTENT_TYPE, HeaderValue::from_static(document.format.content_type()));
    if let Some(name) = document.format.attachment_name() {
        if let Ok(value) = HeaderValue::from_str(&format!("attachment; filename={name}")) {
            headers.insert(CONTENT_DISPOSITION, value);
        }
    }

    response
}
