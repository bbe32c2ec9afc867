//! Configuration surface, loaded once at process start.
//!
//! Everything comes from environment variables with defaults matching the
//! demo deployment (sqlite database file, RSA key PEMs under `certs/`).
//! Demos call [`dotenvy::dotenv`] before [`Settings::from_env`] so a local
//! `.env` file is honored.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Database connection settings.
#[derive(Debug, Clone)]
pub struct DbSettings {
    /// Sea-ORM connection URL.
    pub url: String,
    /// Log every SQL statement (maps to sqlx statement logging).
    pub echo: bool,
}

/// JWT signing settings. Key material lives on disk and is read once by
/// [`crate::auth::jwt::JwtCodec::from_settings`]; a missing file is fatal at
/// startup, not per call.
#[derive(Debug, Clone)]
pub struct AuthJwtSettings {
    pub private_key_path: PathBuf,
    pub public_key_path: PathBuf,
    /// RSA family only (RS256 by default).
    pub algorithm: String,
    pub access_token_ttl_minutes: i64,
}

/// Top-level settings bundle handed to demos at startup.
#[derive(Debug, Clone)]
pub struct Settings {
    pub api_prefix: String,
    pub db: DbSettings,
    pub auth_jwt: AuthJwtSettings,
    /// Sessions older than this are treated as absent on access.
    /// `None` disables expiry.
    pub session_ttl: Option<Duration>,
    /// Append `Secure` to the session cookie. Off by default so the demo
    /// works over plain HTTP.
    pub secure_cookies: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_prefix: "/api/v1".to_string(),
            db: DbSettings {
                url: "sqlite://test.db?mode=rwc".to_string(),
                echo: false,
            },
            auth_jwt: AuthJwtSettings {
                private_key_path: PathBuf::from("certs/jwt-private.pem"),
                public_key_path: PathBuf::from("certs/jwt-public.pem"),
                algorithm: "RS256".to_string(),
                access_token_ttl_minutes: 30,
            },
            session_ttl: Some(Duration::from_secs(24 * 60 * 60)),
            secure_cookies: false,
        }
    }
}

impl Settings {
    /// Builds settings from the environment, falling back to defaults for
    /// anything unset or unparseable.
    ///
    /// Recognized variables: `API_PREFIX`, `DATABASE_URL`, `DB_ECHO`,
    /// `JWT_PRIVATE_KEY_PATH`, `JWT_PUBLIC_KEY_PATH`, `JWT_ALGORITHM`,
    /// `ACCESS_TOKEN_TTL_MINUTES`, `SESSION_TTL_MINUTES` (0 disables expiry,
    /// negative values are ignored and the default TTL is kept),
    /// `SECURE_COOKIES`.
    pub fn from_env() -> Self {
        let mut settings = Settings::default();

        if let Ok(prefix) = env::var("API_PREFIX") {
            settings.api_prefix = prefix;
        }
        if let Ok(url) = env::var("DATABASE_URL") {
            settings.db.url = url;
        }
        if let Some(echo) = env_bool("DB_ECHO") {
            settings.db.echo = echo;
        }
        if let Ok(path) = env::var("JWT_PRIVATE_KEY_PATH") {
            settings.auth_jwt.private_key_path = PathBuf::from(path);
        }
        if let Ok(path) = env::var("JWT_PUBLIC_KEY_PATH") {
            settings.auth_jwt.public_key_path = PathBuf::from(path);
        }
        if let Ok(algorithm) = env::var("JWT_ALGORITHM") {
            settings.auth_jwt.algorithm = algorithm;
        }
        if let Some(minutes) = env_i64("ACCESS_TOKEN_TTL_MINUTES") {
            settings.auth_jwt.access_token_ttl_minutes = minutes;
        }
        if let Some(minutes) = env_i64("SESSION_TTL_MINUTES") {
            settings.session_ttl = session_ttl_from_minutes(minutes, settings.session_ttl);
        }
        if let Some(secure) = env_bool("SECURE_COOKIES") {
            settings.secure_cookies = secure;
        }

        settings
    }
}

/// Zero disables expiry; a negative value is ignored and the fallback kept.
fn session_ttl_from_minutes(minutes: i64, fallback: Option<Duration>) -> Option<Duration> {
    match minutes {
        0 => None,
        m if m > 0 => Some(Duration::from_secs(m as u64 * 60)),
        _ => fallback,
    }
}

fn env_bool(name: &str) -> Option<bool> {
    let value = env::var(name).ok()?;
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn env_i64(name: &str) -> Option<i64> {
    env::var(name).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_mirror_demo_deployment() {
        let settings = Settings::default();
        assert_eq!(settings.api_prefix, "/api/v1");
        assert_eq!(settings.auth_jwt.algorithm, "RS256");
        assert_eq!(settings.auth_jwt.access_token_ttl_minutes, 30);
        assert_eq!(settings.session_ttl, Some(Duration::from_secs(86_400)));
        assert!(!settings.secure_cookies);
    }

    #[test]
    fn session_ttl_minutes_zero_disables_and_negative_keeps_fallback() {
        let fallback = Some(Duration::from_secs(86_400));
        assert_eq!(session_ttl_from_minutes(0, fallback), None);
        assert_eq!(
            session_ttl_from_minutes(30, fallback),
            Some(Duration::from_secs(1800))
        );
        assert_eq!(session_ttl_from_minutes(-5, fallback), fallback);
    }
}
