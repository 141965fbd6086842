// BSD 3-Clause License
// Copyright (c) 2025, NØNOS - NOXTERM
//! Configuration loading from environment variables

use std::path::PathBuf;

use tracing::{debug, info};

use super::constants::*;
use super::error::ConfigError;
use super::parse::{bool_or, list_or, parse_or, required, text_or};
use super::source::{EnvSource, RawValue};
use super::types::Settings;

/// Chooses where settings are read from before building them.
///
/// By default the live process environment is layered over `.env` in the
/// working directory.
#[derive(Debug, Clone)]
pub struct SettingsLoader {
    env_file: Option<PathBuf>,
    process_env: bool,
    extra: EnvSource,
}

impl Default for SettingsLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsLoader {
    pub fn new() -> Self {
        Self {
            env_file: Some(PathBuf::from(DEFAULT_ENV_FILE)),
            process_env: true,
            extra: EnvSource::new(),
        }
    }

    pub fn env_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.env_file = Some(path.into());
        self
    }

    pub fn without_env_file(mut self) -> Self {
        self.env_file = None;
        self
    }

    /// Skip the process environment; only the env file and fallbacks are read.
    pub fn without_process_env(mut self) -> Self {
        self.process_env = false;
        self
    }

    /// Value used when neither the environment nor the env file sets `key`.
    pub fn fallback(mut self, key: &str, value: impl Into<RawValue>) -> Self {
        self.extra.insert(key, value);
        self
    }

    /// Merged source: fallbacks, then the env file, then the process
    /// environment, each layer overriding the previous one.
    pub fn source(&self) -> Result<EnvSource, ConfigError> {
        let mut merged = self.extra.clone();

        if let Some(path) = &self.env_file {
            match EnvSource::from_env_file(path)? {
                Some(file) => {
                    debug!("Loaded {} entries from {}", file.len(), path.display());
                    merged = EnvSource::overlay(merged, file);
                }
                None => info!(
                    "No {} file found, using environment variables only",
                    path.display()
                ),
            }
        }

        if self.process_env {
            merged = EnvSource::overlay(merged, EnvSource::from_process_env());
        }

        Ok(merged)
    }

    pub fn load(&self) -> Result<Settings, ConfigError> {
        Settings::from_source(&self.source()?)
    }
}

impl Settings {
    /// Loads from the process environment layered over `./.env`.
    pub fn from_env() -> Result<Self, ConfigError> {
        SettingsLoader::new().load()
    }

    /// Builds settings from an explicit source. The first missing or
    /// malformed value aborts construction.
    pub fn from_source(source: &EnvSource) -> Result<Self, ConfigError> {
        let database_url = required(source, DATABASE_URL)?;
        let redis_url = required(source, REDIS_URL)?;
        let secret_key = required(source, SECRET_KEY)?;

        let allowed_origins_raw = source
            .get(ALLOWED_ORIGINS)
            .and_then(RawValue::as_text)
            .map(str::to_string);

        let settings = Settings {
            database_url,
            redis_url,
            secret_key,
            algorithm: text_or(source, ALGORITHM, DEFAULT_ALGORITHM)?,
            access_token_expire_minutes: parse_or(
                source,
                ACCESS_TOKEN_EXPIRE_MINUTES,
                DEFAULT_ACCESS_TOKEN_EXPIRE_MINUTES,
                "integer",
            )?,
            port: parse_or(source, PORT, DEFAULT_PORT, "port number")?,
            host: text_or(source, HOST, DEFAULT_HOST)?,
            debug: bool_or(source, DEBUG, DEFAULT_DEBUG)?,
            webdav_url: text_or(source, WEBDAV_URL, "")?,
            webdav_username: text_or(source, WEBDAV_USERNAME, "")?,
            webdav_password: text_or(source, WEBDAV_PASSWORD, "")?,
            allowed_origins: list_or(source, ALLOWED_ORIGINS, DEFAULT_ALLOWED_ORIGINS)?,
            allowed_origins_raw,
        };

        debug!(
            host = %settings.host,
            port = settings.port,
            debug = settings.debug,
            origins = settings.allowed_origins.len(),
            "Settings resolved"
        );

        Ok(settings)
    }
}
