//! Demo auth server.
//!
//! Runs the demo-auth routes: basic auth, static-token header auth, and the
//! cookie session login/check/logout trio.
//!
//! # Running the demo
//!
//! 1. Generate the JWT keypair the configuration points at (startup is
//!    fatal without it, matching the reference behavior):
//!    ```bash
//!    mkdir -p certs
//!    openssl genrsa -out certs/jwt-private.pem 2048
//!    openssl rsa -in certs/jwt-private.pem -pubout -out certs/jwt-public.pem
//!    ```
//! 2. Run the demo:
//!    ```bash
//!    cargo run --example auth_server
//!    ```
//! 3. The server starts on http://127.0.0.1:3000
//!
//! # Testing the demo
//!
//! ```bash
//! # Basic auth
//! curl -u john:password http://127.0.0.1:3000/api/v1/demo-auth/basic-auth-username/
//!
//! # Static-token header auth
//! curl -H "x-auth-token: a14f178e75dee69fa66ff3fad9db0daa" \
//!     http://127.0.0.1:3000/api/v1/demo-auth/some-http-header-auth/
//!
//! # Cookie session: login, check, logout
//! curl -c cookies.txt -X POST -H "x-auth-token: a14f178e75dee69fa66ff3fad9db0daa" \
//!     http://127.0.0.1:3000/api/v1/demo-auth/login-cookie/
//! curl -b cookies.txt http://127.0.0.1:3000/api/v1/demo-auth/check-cookie/
//! curl -b cookies.txt http://127.0.0.1:3000/api/v1/demo-auth/logout-cookie/
//! ```

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use dotenvy::dotenv;
use serde_json::json;
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use web_auth_demo::{AppState, CredentialStore, JwtCodec, SessionStore, Settings};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .init();

    // Load environment variables from .env file if present
    dotenv().ok();
    let settings = Settings::from_env();

    // Key material is read once here; a missing file aborts startup.
    let jwt = JwtCodec::from_settings(&settings.auth_jwt)?;
    let mut claims = serde_json::Map::new();
    claims.insert("sub".to_string(), json!("john"));
    let sample = jwt.encode_claims(&claims)?;
    info!(algorithm = %settings.auth_jwt.algorithm, "JWT codec ready, sample token: {sample}");

    let state = AppState {
        credentials: Arc::new(CredentialStore::demo()),
        sessions: Arc::new(SessionStore::new(settings.session_ttl)),
        secure_cookies: settings.secure_cookies,
    };
    let app = Router::new().nest(&settings.api_prefix, web_auth_demo::router(state));

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    info!("Server starting on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
