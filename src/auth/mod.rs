//! Authentication building blocks.
//!
//! Three independent guards live here: basic-credential verification,
//! static-token verification (both over the [`credentials::CredentialStore`])
//! and cookie-session verification (over the [`session::SessionStore`]),
//! plus the [`jwt::JwtCodec`] signing primitives. Each guard is a pure
//! function of request data and one store; on failure it surfaces an error
//! straight to the boundary, never retrying.

pub mod credentials;
pub mod jwt;
pub mod session;

pub use credentials::CredentialStore;
pub use jwt::JwtCodec;
pub use session::{SessionRecord, SessionStore};
