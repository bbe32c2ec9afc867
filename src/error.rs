//! Crate-wide error taxonomy and its HTTP mapping.
//!
//! Guards never attempt recovery: any failure is surfaced immediately to the
//! boundary as a client-facing error with no retry. Persistence-layer errors
//! are translated into domain errors at the CRUD boundary; raw database
//! detail is logged, never sent to the client.

use std::path::PathBuf;

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// All failures this crate surfaces.
#[derive(Debug, Error)]
pub enum Error {
    /// Bad or missing credentials, bad or missing token, unknown session.
    ///
    /// The `challenge` is attached as a `WWW-Authenticate` header when the
    /// failing scheme expects one (HTTP basic auth).
    #[error("{detail}")]
    Unauthenticated {
        detail: &'static str,
        challenge: Option<&'static str>,
    },

    /// JWT signature mismatch or malformed token.
    #[error("token invalid")]
    InvalidToken,

    /// JWT whose `exp` claim has passed.
    #[error("token expired")]
    ExpiredToken,

    /// Duplicate insert rejected by a uniqueness constraint.
    #[error("constraint violation: {0}")]
    ConstraintViolation(&'static str),

    /// Operating on something that does not exist (e.g. logout of an
    /// already-ended session).
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Product prices are integer minor currency units; negative makes no
    /// sense. Zero is allowed (gift products).
    #[error("product price must not be negative, got {0}")]
    NegativePrice(i32),

    /// JWT key material could not be read at startup.
    #[error("cannot read key file {}: {source}", path.display())]
    KeyFile {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Invalid configuration value (unsupported algorithm, bad PEM, ...).
    #[error("configuration error: {0}")]
    Config(String),

    /// Failed to sign a token with otherwise valid key material.
    #[error("failed to sign token")]
    Signing(#[source] jsonwebtoken::errors::Error),

    /// Any other database error, passed through untranslated.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),
}

impl Error {
    /// Basic-auth rejection, carrying the `WWW-Authenticate: Basic` challenge.
    pub fn bad_credentials() -> Self {
        Error::Unauthenticated {
            detail: "Invalid username or password",
            challenge: Some("Basic"),
        }
    }

    /// Static-token rejection.
    pub fn bad_token() -> Self {
        Error::Unauthenticated {
            detail: "token invalid",
            challenge: None,
        }
    }

    /// Missing or unknown session cookie. Deliberately identical for a
    /// session that never existed and one that was ended or expired.
    pub fn not_authenticated() -> Self {
        Error::Unauthenticated {
            detail: "not authenticated",
            challenge: None,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, challenge) = match &self {
            Error::Unauthenticated { challenge, .. } => (StatusCode::UNAUTHORIZED, *challenge),
            Error::InvalidToken | Error::ExpiredToken => (StatusCode::UNAUTHORIZED, None),
            Error::NotFound(_) => (StatusCode::NOT_FOUND, None),
            Error::ConstraintViolation(_) => (StatusCode::CONFLICT, None),
            Error::NegativePrice(_) => (StatusCode::UNPROCESSABLE_ENTITY, None),
            Error::KeyFile { .. } | Error::Config(_) | Error::Signing(_) | Error::Database(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, None)
            }
        };

        let detail = if status == StatusCode::INTERNAL_SERVER_ERROR {
            // Log the real cause, hand the client a generic message.
            error!(error = %self, "internal error");
            "internal server error".to_string()
        } else {
            self.to_string()
        };

        let mut response = (status, Json(json!({ "detail": detail }))).into_response();
        if let Some(challenge) = challenge {
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, header::HeaderValue::from_static(challenge));
        }
        response
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
