//! # Web Auth Demo
//!
//! A demonstration/teaching backend built on [axum](https://crates.io/crates/axum)
//! and [Sea-ORM](https://crates.io/crates/sea-orm). It shows, side by side:
//!
//! - HTTP basic authentication with a constant-time password check
//! - Static-token authentication via the `x-auth-token` header
//! - Cookie-session authentication over an in-memory, mutex-guarded store
//! - JWT signing primitives with RSA key material loaded from disk at startup
//! - A relational schema (users, profiles, posts, products, orders) with an
//!   association-object many-to-many between orders and products, managed
//!   through Sea-ORM migrations
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use web_auth_demo::{AppState, CredentialStore, SessionStore};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let settings = web_auth_demo::Settings::from_env();
//!
//! let state = AppState {
//!     credentials: Arc::new(CredentialStore::demo()),
//!     sessions: Arc::new(SessionStore::new(settings.session_ttl)),
//!     secure_cookies: settings.secure_cookies,
//! };
//! let app = web_auth_demo::router(state);
//!
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Order/Product CRUD
//!
//! ```no_run
//! use sea_orm::Database;
//! use web_auth_demo::crud;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let db = Database::connect("sqlite::memory:").await?;
//!
//! let order = crud::create_order(&db, None).await?;
//! let phone = crud::create_product(&db, "Iphone 16", "Best for photos", 999).await?;
//! crud::attach_product(&db, &order, &phone, 1, 999).await?;
//!
//! for entry in crud::list_orders_with_products(&db).await? {
//!     println!("order #{}", entry.order.id);
//!     for line in &entry.items {
//!         println!("  {} x{}", line.product.name, line.association.quantity);
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Sessions
//!
//! The session store keeps records in process memory for the process
//! lifetime, with optional lazy expiry. An ended or expired session id is
//! indistinguishable from one that never existed.
//!
//! ```
//! use web_auth_demo::SessionStore;
//!
//! let sessions = SessionStore::new(None);
//! let id = sessions.start_session("john");
//! assert_eq!(sessions.load_session(&id).unwrap().username, "john");
//! sessions.end_session(&id).unwrap();
//! assert!(sessions.load_session(&id).is_err());
//! ```

pub mod auth;
pub mod config;
pub mod crud;
pub mod entity;
pub mod error;
#[cfg(feature = "migration")]
pub mod migration;
pub mod routes;

/// Static credential and token fixtures plus the basic/token guards.
pub use auth::CredentialStore;

/// JWT encode/decode over RSA key material read once at startup.
pub use auth::JwtCodec;

/// In-memory cookie-session store with lazy expiry.
pub use auth::{SessionRecord, SessionStore};

/// Environment-driven settings bundle.
pub use config::Settings;

/// Crate-wide error taxonomy with its axum response mapping.
pub use error::{Error, Result};

/// Shared handler state and the demo-auth router.
pub use routes::{router, AppState, SESSION_COOKIE};

/// Sea-ORM migrator for the demo schema.
#[cfg(feature = "migration")]
pub use migration::Migrator;
