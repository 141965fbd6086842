// BSD 3-Clause License
// Copyright (c) 2025, NØNOS - NOXTERM
//
//! Configuration type definitions

use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use serde::{Serialize, Serializer};

use super::error::ConfigError;

/// Validated application settings.
///
/// Built once at startup by [`Settings::from_env`] or
/// [`Settings::from_source`] and shared read-only afterwards. Fields are
/// private so a `Settings` value can only come out of the loader.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Settings {
    #[serde(serialize_with = "serialize_redacted_url")]
    pub(super) database_url: String,
    #[serde(serialize_with = "serialize_redacted_url")]
    pub(super) redis_url: String,
    #[serde(skip_serializing)]
    pub(super) secret_key: String,
    pub(super) algorithm: String,
    pub(super) access_token_expire_minutes: i64,
    pub(super) port: u16,
    pub(super) host: String,
    pub(super) debug: bool,
    pub(super) webdav_url: String,
    pub(super) webdav_username: String,
    #[serde(skip_serializing)]
    pub(super) webdav_password: String,
    pub(super) allowed_origins: Vec<String>,
    pub(super) allowed_origins_raw: Option<String>,
}

/// Replaces the userinfo part of a URL (`user:password@`) with
/// `[REDACTED]@`. URLs without credentials are returned unchanged.
pub fn redact_url(url: &str) -> String {
    let Some((scheme, rest)) = url.split_once("://") else {
        return url.to_string();
    };
    let authority_end = rest
        .find(|c: char| matches!(c, '/' | '?' | '#'))
        .unwrap_or(rest.len());
    match rest[..authority_end].rfind('@') {
        Some(at) => format!("{}://[REDACTED]@{}", scheme, &rest[at + 1..]),
        None => url.to_string(),
    }
}

fn serialize_redacted_url<S: Serializer>(url: &str, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&redact_url(url))
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("database_url", &redact_url(&self.database_url))
            .field("redis_url", &redact_url(&self.redis_url))
            .field("secret_key", &"[REDACTED]")
            .field("algorithm", &self.algorithm)
            .field("access_token_expire_minutes", &self.access_token_expire_minutes)
            .field("port", &self.port)
            .field("host", &self.host)
            .field("debug", &self.debug)
            .field("webdav_url", &self.webdav_url)
            .field("webdav_username", &self.webdav_username)
            .field("webdav_password", &"[REDACTED]")
            .field("allowed_origins", &self.allowed_origins)
            .finish()
    }
}

impl Settings {
    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn redis_url(&self) -> &str {
        &self.redis_url
    }

    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }

    /// JWT signing algorithm name, e.g. `HS256`.
    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    pub fn access_token_expire_minutes(&self) -> i64 {
        self.access_token_expire_minutes
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    pub fn webdav_url(&self) -> &str {
        &self.webdav_url
    }

    pub fn webdav_username(&self) -> &str {
        &self.webdav_username
    }

    pub fn webdav_password(&self) -> &str {
        &self.webdav_password
    }

    /// CORS allow-list after normalization.
    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    /// `ALLOWED_ORIGINS` exactly as supplied, when it came in as text.
    pub fn allowed_origins_raw(&self) -> Option<&str> {
        self.allowed_origins_raw.as_deref()
    }

    /// Bind address. The host must be an IP literal.
    pub fn listen_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self.host.parse().map_err(|e| ConfigError::InvalidValue {
            key: "host".to_string(),
            value: self.host.clone(),
            reason: format!("Not an IP address: {}", e),
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }

    /// Access token lifetime. Negative minute counts yield zero.
    pub fn access_token_ttl(&self) -> Duration {
        let minutes = u64::try_from(self.access_token_expire_minutes).unwrap_or(0);
        Duration::from_secs(minutes.saturating_mul(60))
    }

    pub fn webdav_enabled(&self) -> bool {
        !self.webdav_url.is_empty()
    }

    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|o| o == "*")
    }
}
