//! Login page data, login, and logout

use std::time::Instant;

use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::HeaderMap;
use axum::response::{AppendHeaders, IntoResponse};
use axum::{Form, Json};
use hostatlas_domain::{ConnectionCheckResult, CredentialContext};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{info, warn};

use crate::context::session::{session_cookie, session_id};
use crate::context::SharedContext;
use crate::error::ApiFailure;
use crate::utils::logging::log_request_outcome;

/// Login form as posted by the dashboard.
///
/// Only the fields belonging to the selected `auth_mode` are used:
/// `token` for `"token"`, `username`/`password` for `"credentials"`.
#[derive(Debug, Default, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub awx_url: Option<String>,
    #[serde(default)]
    pub auth_mode: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

impl LoginForm {
    fn credential_context(&self, base_url: &str) -> CredentialContext {
        let mode = self.auth_mode.as_deref();
        let token = self.token.as_deref().filter(|_| mode == Some("token"));
        let username = self.username.as_deref().filter(|_| mode == Some("credentials"));
        let password = self.password.as_deref().filter(|_| mode == Some("credentials"));

        CredentialContext::new(base_url, token, username, password)
    }
}

/// `GET /` - data for the login page.
pub async fn index(State(ctx): State<SharedContext>, headers: HeaderMap) -> Json<Value> {
    let id = session_id(&headers);
    let authenticated = id.as_deref().and_then(|id| ctx.sessions.credentials(id)).is_some();

    Json(json!({
        "authenticated": authenticated,
        "default_base_url": ctx.config.server.default_base_url,
        "last_base_url": ctx.suggested_base_url(id.as_deref()),
    }))
}

/// `POST /login` - verify the credentials against the remote API and open
/// a session.
pub async fn login(
    State(ctx): State<SharedContext>,
    headers: HeaderMap,
    Form(form): Form<LoginForm>,
) -> Result<impl IntoResponse, ApiFailure> {
    let start = Instant::now();
    let result = attempt_login(&ctx, &headers, &form).await;

    let error_type = result.as_ref().err().map(ApiFailure::label);
    log_request_outcome("auth::login", start.elapsed(), error_type);

    let (session, identity) = result?;
    let secure = ctx.config.server.secure_cookies;
    let cookie = AppendHeaders([(SET_COOKIE, session_cookie(&session, secure))]);
    Ok((cookie, Json(json!({ "identity": identity }))))
}

async fn attempt_login(
    ctx: &SharedContext,
    headers: &HeaderMap,
    form: &LoginForm,
) -> Result<(String, Value), ApiFailure> {
    let base_url = form.awx_url.as_deref().map(str::trim).unwrap_or_default();
    if base_url.is_empty() {
        return Err(ApiFailure::BadRequest("AWX URL is required".into()));
    }

    let credentials = form.credential_context(base_url);
    let auth_mode = credentials.auth_mode();
    let api = ctx.inventory_api(credentials.clone())?;

    match api.check_connection().await {
        ConnectionCheckResult::Ok(identity) => {
            let previous = session_id(headers);
            let session = ctx.sessions.sign_in(previous.as_deref(), credentials);
            info!(base_url, ?auth_mode, "login succeeded");
            Ok((session, identity))
        }
        ConnectionCheckResult::Failed(reason) => {
            warn!(base_url, ?auth_mode, %reason, "login rejected");
            Err(ApiFailure::LoginFailed(reason))
        }
    }
}

/// `GET /logout` - drop the session's credentials.
pub async fn logout(State(ctx): State<SharedContext>, headers: HeaderMap) -> Json<Value> {
    if let Some(id) = session_id(&headers) {
        if ctx.sessions.sign_out(&id) {
            info!("logout");
        }
    }

    Json(json!({ "logged_out": true }))
}
