// BSD 3-Clause License
// Copyright (c) 2025, NØNOS - NOXTERM
//
//! Configuration validation

use tracing::warn;

use super::constants::{ACCESS_TOKEN_EXPIRE_MINUTES, MIN_SECRET_KEY_LENGTH, PORT, WEBDAV_URL};
use super::error::ConfigError;
use super::types::Settings;

impl Settings {
    /// Sanity checks beyond type coercion. Risky but usable values are only
    /// logged.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::InvalidValue {
                key: PORT.to_string(),
                value: "0".to_string(),
                reason: "Port cannot be 0".to_string(),
            });
        }

        if self.access_token_expire_minutes <= 0 {
            return Err(ConfigError::InvalidValue {
                key: ACCESS_TOKEN_EXPIRE_MINUTES.to_string(),
                value: self.access_token_expire_minutes.to_string(),
                reason: "Token lifetime must be positive".to_string(),
            });
        }

        if self.webdav_url.is_empty() && !self.webdav_username.is_empty() {
            return Err(ConfigError::InvalidValue {
                key: WEBDAV_URL.to_string(),
                value: String::new(),
                reason: "WebDAV credentials are set but no URL is configured".to_string(),
            });
        }

        if self.debug {
            warn!("Debug mode is enabled");
        }
        if self.allows_any_origin() {
            warn!("CORS allow-list contains '*' - any origin is accepted");
        }
        if self.secret_key.len() < MIN_SECRET_KEY_LENGTH {
            warn!(
                "SECRET_KEY is shorter than {} characters",
                MIN_SECRET_KEY_LENGTH
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{ConfigError, EnvSource, Settings};

    fn settings(extra: &[(&str, &str)]) -> Settings {
        let mut source: EnvSource = [
            ("DATABASE_URL", "postgres://db"),
            ("REDIS_URL", "redis://cache"),
            ("SECRET_KEY", "0123456789abcdef0123456789abcdef"),
        ]
        .into_iter()
        .collect();
        for (key, value) in extra {
            source.insert(key, *value);
        }
        Settings::from_source(&source).unwrap()
    }

    #[test]
    fn test_defaults_are_valid() {
        assert!(settings(&[]).validate().is_ok());
    }

    #[test]
    fn test_port_zero_rejected() {
        let err = settings(&[("PORT", "0")]).validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "port"));
    }

    #[test]
    fn test_non_positive_token_lifetime_rejected() {
        for raw in ["0", "-5"] {
            let err = settings(&[("ACCESS_TOKEN_EXPIRE_MINUTES", raw)])
                .validate()
                .unwrap_err();
            assert_eq!(err.key(), Some("access_token_expire_minutes"));
        }
    }

    #[test]
    fn test_webdav_username_without_url_rejected() {
        let err = settings(&[("WEBDAV_USERNAME", "alice")]).validate().unwrap_err();
        assert_eq!(err.key(), Some("webdav_url"));

        let ok = settings(&[
            ("WEBDAV_URL", "https://dav.example/remote.php"),
            ("WEBDAV_USERNAME", "alice"),
        ]);
        assert!(ok.validate().is_ok());
        assert!(ok.webdav_enabled());
    }

    #[test]
    fn test_wildcard_origin_is_only_a_warning() {
        let s = settings(&[("ALLOWED_ORIGINS", "*")]);
        assert!(s.allows_any_origin());
        assert!(s.validate().is_ok());
    }
}
