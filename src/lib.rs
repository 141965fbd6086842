// BSD 3-Clause License
// Copyright (c) 2025, NØNOS - NOXTERM
//
// Settings library: loads and validates application configuration from the
// environment.

pub mod config;

pub use config::{ConfigError, EnvSource, RawValue, Settings, SettingsLoader};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const BUILD_TIME: &str = include_str!(concat!(env!("OUT_DIR"), "/build_time.txt"));
pub const GIT_HASH: &str = env!("GIT_HASH");
