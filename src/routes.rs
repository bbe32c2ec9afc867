//! Demo authentication endpoints.
//!
//! A small axum router mirroring the classic demo-auth surface: basic auth,
//! static-token header auth, and a cookie session login/check/logout trio.
//! Stores are injected through [`AppState`], never referenced as globals.

use std::sync::Arc;

use axum::{
    extract::{FromRequestParts, State},
    http::{header, request::Parts, HeaderMap},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use base64::Engine;
use serde_json::json;
use tracing::info;

use crate::auth::{CredentialStore, SessionStore};
use crate::error::Error;

/// Cookie carrying the opaque session id (32 lowercase hex characters).
pub const SESSION_COOKIE: &str = "web-app-session-id";

/// Header carrying the static auth token.
pub const AUTH_TOKEN_HEADER: &str = "x-auth-token";

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub credentials: Arc<CredentialStore>,
    pub sessions: Arc<SessionStore>,
    /// Append `Secure` to the session cookie (requires HTTPS).
    pub secure_cookies: bool,
}

/// Builds the demo-auth router over the given state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/demo-auth/basic-auth/", get(basic_auth_echo))
        .route("/demo-auth/basic-auth-username/", get(basic_auth_username))
        .route(
            "/demo-auth/some-http-header-auth/",
            get(http_header_token_auth),
        )
        .route("/demo-auth/login-cookie/", post(login_cookie))
        .route("/demo-auth/check-cookie/", get(check_cookie))
        .route("/demo-auth/logout-cookie/", get(logout_cookie))
        .with_state(state)
}

/// Credentials taken from an `Authorization: Basic` header.
pub struct BasicCredentials {
    pub username: String,
    pub password: String,
}

impl<S> FromRequestParts<S> for BasicCredentials
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(Error::bad_credentials)?;

        let encoded = header
            .strip_prefix("Basic ")
            .ok_or_else(Error::bad_credentials)?;
        let decoded = base64::engine::general_purpose::STANDARD
            .decode(encoded)
            .map_err(|_| Error::bad_credentials())?;
        let text = String::from_utf8(decoded).map_err(|_| Error::bad_credentials())?;

        let (username, password) = text.split_once(':').ok_or_else(Error::bad_credentials)?;
        Ok(BasicCredentials {
            username: username.to_string(),
            password: password.to_string(),
        })
    }
}

/// Static token taken from the `x-auth-token` header.
pub struct StaticToken(pub String);

impl<S> FromRequestParts<S> for StaticToken
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(AUTH_TOKEN_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(|token| StaticToken(token.to_string()))
            .ok_or_else(Error::bad_token)
    }
}

/// Session id taken from the `web-app-session-id` cookie.
pub struct SessionId(pub String);

impl<S> FromRequestParts<S> for SessionId
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        session_id_from_headers(&parts.headers)
            .map(SessionId)
            .ok_or_else(Error::not_authenticated)
    }
}

fn session_id_from_headers(headers: &HeaderMap) -> Option<String> {
    let raw = headers.get(header::COOKIE)?.to_str().ok()?;
    raw.split(';').map(str::trim).find_map(|pair| {
        let (name, value) = pair.split_once('=')?;
        (name == SESSION_COOKIE).then(|| value.to_string())
    })
}

/// Echoes whatever basic credentials were supplied, without verifying them.
async fn basic_auth_echo(credentials: BasicCredentials) -> Json<serde_json::Value> {
    Json(json!({
        "message": "Hi!",
        "username": credentials.username,
        "password": credentials.password,
    }))
}

/// Greets the user once `verify_basic` accepts the credentials.
async fn basic_auth_username(
    State(state): State<AppState>,
    credentials: BasicCredentials,
) -> Result<Json<serde_json::Value>, Error> {
    let username = state
        .credentials
        .verify_basic(&credentials.username, &credentials.password)?;

    Ok(Json(json!({
        "message": format!("Hi, {username}!"),
        "username": username,
    })))
}

/// Greets the user mapped to the supplied static token.
async fn http_header_token_auth(
    State(state): State<AppState>,
    StaticToken(token): StaticToken,
) -> Result<Json<serde_json::Value>, Error> {
    let username = state.credentials.verify_token(&token)?;

    Ok(Json(json!({
        "message": format!("Hi, {username}!"),
        "username": username,
    })))
}

/// Token-authenticated login: starts a session and hands the id back as an
/// opaque cookie value.
async fn login_cookie(
    State(state): State<AppState>,
    StaticToken(token): StaticToken,
) -> Result<Response, Error> {
    let username = state.credentials.verify_token(&token)?;
    let session_id = state.sessions.start_session(username);
    info!(username, "session started");

    let cookie = format!(
        "{SESSION_COOKIE}={session_id}; Path=/; HttpOnly; SameSite=Lax{}",
        if state.secure_cookies { "; Secure" } else { "" }
    );
    Ok((
        [(header::SET_COOKIE, cookie)],
        Json(json!({ "result": "ok" })),
    )
        .into_response())
}

/// Returns the session record behind the cookie.
async fn check_cookie(
    State(state): State<AppState>,
    SessionId(session_id): SessionId,
) -> Result<Json<serde_json::Value>, Error> {
    let record = state.sessions.load_session(&session_id)?;

    Ok(Json(json!({
        "message": format!("Hello, {}!", record.username),
        "username": record.username,
        "login_at": record.login_at,
    })))
}

/// Ends the session and expires the cookie.
async fn logout_cookie(
    State(state): State<AppState>,
    SessionId(session_id): SessionId,
) -> Result<Response, Error> {
    // Load first so an unknown cookie reads as "not authenticated" rather
    // than a logout of something that never existed.
    state.sessions.load_session(&session_id)?;
    let record = state.sessions.end_session(&session_id)?;
    info!(username = %record.username, "session ended");

    let expired = format!("{SESSION_COOKIE}=; Path=/; HttpOnly; Max-Age=0");
    Ok((
        [(header::SET_COOKIE, expired)],
        Json(json!({ "message": format!("Bye, {}!", record.username) })),
    )
        .into_response())
}
