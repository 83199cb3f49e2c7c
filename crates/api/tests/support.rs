//! Shared helpers for route tests.
#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::http::header::{CONTENT_TYPE, COOKIE};
use axum::http::{Request, Response};
use axum::Router;
use hostatlas_api::{build_router, AppContext, SharedContext};
use hostatlas_domain::{Config, CredentialContext};
use serde_json::Value;
use tower::ServiceExt;

/// Router plus a handle on its shared context.
pub struct TestApp {
    pub ctx: SharedContext,
    router: Router,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        let ctx = AppContext::shared(config);
        let router = build_router(ctx.clone());
        Self { ctx, router }
    }

    /// Open a session for `base_url` directly in the store, bypassing
    /// `/login`. Returns the `Cookie` header value.
    pub fn sign_in(&self, base_url: &str) -> String {
        let credentials = CredentialContext::new(base_url, Some("test-token"), None, None);
        let id = self.ctx.sessions.sign_in(None, credentials);
        cookie_for(&id)
    }

    pub async fn get(&self, uri: &str, cookie: Option<&str>) -> Response<Body> {
        let mut request = Request::builder().method("GET").uri(uri);
        if let Some(cookie) = cookie {
            request = request.header(COOKIE, cookie);
        }
        self.send(request.body(Body::empty()).expect("request")).await
    }

    pub async fn post_form(&self, uri: &str, body: &str, cookie: Option<&str>) -> Response<Body> {
        let mut request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded");
        if let Some(cookie) = cookie {
            request = request.header(COOKIE, cookie);
        }
        self.send(request.body(Body::from(body.to_string())).expect("request")).await
    }

    async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(request).await.expect("router is infallible")
    }
}

pub fn cookie_for(session_id: &str) -> String {
    format!("hostatlas_session={session_id}")
}

/// `name=value` part of a `Set-Cookie` header, usable as a `Cookie` header.
pub fn cookie_from_set_cookie(set_cookie: &str) -> String {
    set_cookie.split(';').next().unwrap_or_default().trim().to_string()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    to_bytes(response.into_body(), usize::MAX).await.expect("body").to_vec()
}

pub async fn body_text(response: Response<Body>) -> String {
    String::from_utf8(body_bytes(response).await).expect("utf-8 body")
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_str(&body_text(response).await).expect("json body")
}
