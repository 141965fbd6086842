// BSD 3-Clause License
// Copyright (c) 2025, NØNOS - NOXTERM
//
//! Setting names and default values.

// =============================================================================
// Setting names (matched case-insensitively against environment variables)
// =============================================================================

pub const DATABASE_URL: &str = "database_url";
pub const REDIS_URL: &str = "redis_url";
pub const SECRET_KEY: &str = "secret_key";
pub const ALGORITHM: &str = "algorithm";
pub const ACCESS_TOKEN_EXPIRE_MINUTES: &str = "access_token_expire_minutes";
pub const PORT: &str = "port";
pub const HOST: &str = "host";
pub const DEBUG: &str = "debug";
pub const WEBDAV_URL: &str = "webdav_url";
pub const WEBDAV_USERNAME: &str = "webdav_username";
pub const WEBDAV_PASSWORD: &str = "webdav_password";
pub const ALLOWED_ORIGINS: &str = "allowed_origins";

/// Settings without a default; construction fails when any is missing.
pub const REQUIRED_SETTINGS: &[&str] = &[DATABASE_URL, REDIS_URL, SECRET_KEY];

// =============================================================================
// Defaults
// =============================================================================

pub const DEFAULT_ALGORITHM: &str = "HS256";

/// One day
pub const DEFAULT_ACCESS_TOKEN_EXPIRE_MINUTES: i64 = 1440;

pub const DEFAULT_PORT: u16 = 4000;
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_DEBUG: bool = true;

pub const DEFAULT_ALLOWED_ORIGINS: &[&str] = &[
    "https://nareshka.site",
    "https://v2.nareshka.site",
    "http://localhost:5173",
];

/// Overlay file looked up in the working directory.
pub const DEFAULT_ENV_FILE: &str = ".env";

// =============================================================================
// Validation thresholds
// =============================================================================

/// Secret keys shorter than this are accepted but logged as weak.
pub const MIN_SECRET_KEY_LENGTH: usize = 32;
