//! Static credential and token store with the basic/token guards.

use std::collections::HashMap;

use subtle::ConstantTimeEq;

use crate::error::{Error, Result};

/// Read-only credential material, immutable after process start.
///
/// Holds two mappings: username to plaintext password (for HTTP basic auth)
/// and opaque static token to username (for the `x-auth-token` header
/// scheme). Plaintext passwords are a deliberate property of this demo, not
/// something to copy into a real deployment.
#[derive(Debug, Clone, Default)]
pub struct CredentialStore {
    passwords: HashMap<String, String>,
    tokens: HashMap<String, String>,
}

impl CredentialStore {
    /// Builds a store from explicit credential and token pairs.
    pub fn new<P, T>(passwords: P, tokens: T) -> Self
    where
        P: IntoIterator<Item = (String, String)>,
        T: IntoIterator<Item = (String, String)>,
    {
        Self {
            passwords: passwords.into_iter().collect(),
            tokens: tokens.into_iter().collect(),
        }
    }

    /// The fixture accounts and tokens the demo endpoints are documented
    /// against.
    pub fn demo() -> Self {
        Self::new(
            [
                ("admin".to_string(), "admin".to_string()),
                ("john".to_string(), "password".to_string()),
            ],
            [
                (
                    "a0787852e766b02e87f6dd15e4c3d1f1".to_string(),
                    "admin".to_string(),
                ),
                (
                    "a14f178e75dee69fa66ff3fad9db0daa".to_string(),
                    "john".to_string(),
                ),
            ],
        )
    }

    /// Verifies basic-auth credentials, returning the username on success.
    ///
    /// The password comparison is constant-time (`subtle::ConstantTimeEq`) so
    /// response timing does not reveal how much of a guess was correct.
    pub fn verify_basic<'a>(&self, username: &'a str, password: &str) -> Result<&'a str> {
        let stored = self.passwords.get(username).ok_or_else(Error::bad_credentials)?;

        // ct_eq yields false for length mismatches without short-circuiting.
        if bool::from(stored.as_bytes().ct_eq(password.as_bytes())) {
            Ok(username)
        } else {
            Err(Error::bad_credentials())
        }
    }

    /// Resolves a static auth token to its username. Plain lookup; tokens are
    /// high-entropy opaque values, so no timing guarantee is made here.
    pub fn verify_token(&self, token: &str) -> Result<&str> {
        self.tokens
            .get(token)
            .map(String::as_str)
            .ok_or_else(Error::bad_token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_credentials_verify() {
        let store = CredentialStore::demo();
        assert_eq!(store.verify_basic("admin", "admin").unwrap(), "admin");
        assert_eq!(store.verify_basic("john", "password").unwrap(), "john");
    }

    #[test]
    fn wrong_password_is_unauthenticated() {
        let store = CredentialStore::demo();
        let err = store.verify_basic("john", "passw0rd").unwrap_err();
        assert!(matches!(err, Error::Unauthenticated { .. }));
    }

    #[test]
    fn unknown_user_is_unauthenticated() {
        let store = CredentialStore::demo();
        let err = store.verify_basic("alice", "password").unwrap_err();
        assert!(matches!(err, Error::Unauthenticated { .. }));
    }

    #[test]
    fn password_of_different_length_is_rejected() {
        let store = CredentialStore::demo();
        assert!(store.verify_basic("john", "passwordpassword").is_err());
        assert!(store.verify_basic("john", "").is_err());
    }

    #[test]
    fn known_tokens_resolve() {
        let store = CredentialStore::demo();
        assert_eq!(
            store
                .verify_token("a0787852e766b02e87f6dd15e4c3d1f1")
                .unwrap(),
            "admin"
        );
        assert_eq!(
            store
                .verify_token("a14f178e75dee69fa66ff3fad9db0daa")
                .unwrap(),
            "john"
        );
    }

    #[test]
    fn unknown_token_is_unauthenticated() {
        let store = CredentialStore::demo();
        let err = store.verify_token("deadbeef").unwrap_err();
        assert!(matches!(err, Error::Unauthenticated { .. }));
    }
}
