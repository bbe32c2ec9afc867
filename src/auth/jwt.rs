//! JWT signing primitives over asymmetric key material.
//!
//! Key files are read once at startup via [`JwtCodec::from_settings`];
//! unreadable files are a startup-fatal error, never a per-call one. Issued
//! tokens are not tracked anywhere, so there is no revocation.

use std::fmt;
use std::fs;

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde_json::{json, Map, Value};

use crate::config::AuthJwtSettings;
use crate::error::{Error, Result};

/// Claims payload: a plain JSON object, `exp`/`iat` injected at encode time.
pub type Claims = Map<String, Value>;

/// Encoder/decoder pair bound to one algorithm and one keypair.
pub struct JwtCodec {
    algorithm: Algorithm,
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

// Hand-written: the key types carry secret material and expose no Debug.
impl fmt::Debug for JwtCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtCodec")
            .field("algorithm", &self.algorithm)
            .field("encoding", &"<redacted>")
            .field("decoding", &"<redacted>")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

impl JwtCodec {
    /// Builds a codec from already-parsed key material. Primarily for tests;
    /// production code goes through [`JwtCodec::from_settings`].
    pub fn new(algorithm: Algorithm, encoding: EncodingKey, decoding: DecodingKey, ttl: Duration) -> Self {
        let mut validation = Validation::new(algorithm);
        // Exact expiry, no clock-skew tolerance.
        validation.leeway = 0;
        Self {
            algorithm,
            encoding,
            decoding,
            validation,
            ttl,
        }
    }

    /// Loads the RSA keypair named by the settings.
    ///
    /// Fails with [`Error::KeyFile`] when a file cannot be read and
    /// [`Error::Config`] for an unsupported algorithm or malformed PEM —
    /// both are meant to abort startup.
    pub fn from_settings(settings: &AuthJwtSettings) -> Result<Self> {
        let algorithm: Algorithm = settings
            .algorithm
            .parse()
            .map_err(|_| Error::Config(format!("unknown JWT algorithm {:?}", settings.algorithm)))?;
        if !matches!(
            algorithm,
            Algorithm::RS256
                | Algorithm::RS384
                | Algorithm::RS512
                | Algorithm::PS256
                | Algorithm::PS384
                | Algorithm::PS512
        ) {
            return Err(Error::Config(format!(
                "JWT algorithm {:?} is not in the RSA family",
                settings.algorithm
            )));
        }

        let private_pem = fs::read(&settings.private_key_path).map_err(|source| Error::KeyFile {
            path: settings.private_key_path.clone(),
            source,
        })?;
        let public_pem = fs::read(&settings.public_key_path).map_err(|source| Error::KeyFile {
            path: settings.public_key_path.clone(),
            source,
        })?;

        let encoding = EncodingKey::from_rsa_pem(&private_pem)
            .map_err(|e| Error::Config(format!("invalid private key PEM: {e}")))?;
        let decoding = DecodingKey::from_rsa_pem(&public_pem)
            .map_err(|e| Error::Config(format!("invalid public key PEM: {e}")))?;

        Ok(Self::new(
            algorithm,
            encoding,
            decoding,
            Duration::minutes(settings.access_token_ttl_minutes),
        ))
    }

    /// Signs a copy of `payload` with `exp = now + ttl` and `iat = now`
    /// injected, using the codec's configured TTL.
    pub fn encode_claims(&self, payload: &Claims) -> Result<String> {
        self.encode_claims_with_ttl(payload, self.ttl)
    }

    /// Same as [`encode_claims`](Self::encode_claims) with an explicit TTL.
    /// A negative TTL mints an already-expired token, useful in tests.
    pub fn encode_claims_with_ttl(&self, payload: &Claims, ttl: Duration) -> Result<String> {
        let now = Utc::now();
        let mut claims = payload.clone();
        claims.insert("iat".to_string(), json!(now.timestamp()));
        claims.insert("exp".to_string(), json!((now + ttl).timestamp()));

        encode(&Header::new(self.algorithm), &claims, &self.encoding).map_err(Error::Signing)
    }

    /// Verifies signature and expiry, returning the full claims map.
    pub fn decode_claims(&self, token: &str) -> Result<Claims> {
        decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => Error::ExpiredToken,
                _ => Error::InvalidToken,
            })
    }
}
