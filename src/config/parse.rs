// BSD 3-Clause License
// Copyright (c) 2025, NØNOS - NOXTERM
//
//! Coercion of raw values into typed settings.

use std::str::FromStr;

use tracing::debug;

use super::error::ConfigError;
use super::source::{EnvSource, RawValue};

fn scalar<'a>(
    key: &str,
    raw: &'a RawValue,
    expected: &'static str,
) -> Result<&'a str, ConfigError> {
    raw.as_text().ok_or_else(|| ConfigError::TypeMismatch {
        key: key.to_string(),
        value: raw.render(),
        expected,
    })
}

/// Required text setting. Absent or blank values are reported as missing.
pub fn required(source: &EnvSource, key: &str) -> Result<String, ConfigError> {
    let missing = || ConfigError::MissingRequired {
        key: key.to_string(),
    };
    let raw = source.get(key).ok_or_else(missing)?;
    let value = scalar(key, raw, "string")?;
    if value.trim().is_empty() {
        return Err(missing());
    }
    Ok(value.to_string())
}

pub fn text_or(source: &EnvSource, key: &str, default: &str) -> Result<String, ConfigError> {
    match source.get(key) {
        Some(raw) => scalar(key, raw, "string").map(str::to_string),
        None => Ok(default.to_string()),
    }
}

pub fn parse_or<T>(
    source: &EnvSource,
    key: &str,
    default: T,
    expected: &'static str,
) -> Result<T, ConfigError>
where
    T: FromStr,
{
    let Some(raw) = source.get(key) else {
        return Ok(default);
    };
    let value = scalar(key, raw, expected)?;
    value.trim().parse().map_err(|_| ConfigError::TypeMismatch {
        key: key.to_string(),
        value: value.to_string(),
        expected,
    })
}

/// Accepted tokens, case-insensitive: true/false, 1/0, yes/no, on/off.
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

pub fn bool_or(source: &EnvSource, key: &str, default: bool) -> Result<bool, ConfigError> {
    let Some(raw) = source.get(key) else {
        return Ok(default);
    };
    let value = scalar(key, raw, "boolean")?;
    parse_bool(value).ok_or_else(|| ConfigError::TypeMismatch {
        key: key.to_string(),
        value: value.to_string(),
        expected: "boolean",
    })
}

/// Splits on commas, trimming each piece and dropping empty ones.
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Normalizes a list-valued setting.
///
/// Lists pass through unchanged. Text is first read as a JSON array of
/// strings, kept verbatim including duplicates and empty entries; anything
/// that is not such an array falls back to [`split_list`].
pub fn normalize_origins(key: &str, raw: &RawValue) -> Result<Vec<String>, ConfigError> {
    match raw {
        RawValue::List(items) => Ok(items.clone()),
        RawValue::Text(text) => match serde_json::from_str::<Vec<String>>(text) {
            Ok(items) => Ok(items),
            Err(_) => {
                debug!("{} is not a JSON array, splitting on commas", key);
                Ok(split_list(text))
            }
        },
    }
}

pub fn list_or(
    source: &EnvSource,
    key: &str,
    default: &[&str],
) -> Result<Vec<String>, ConfigError> {
    match source.get(key) {
        Some(raw) => normalize_origins(key, raw),
        None => Ok(default.iter().map(|s| s.to_string()).collect()),
    }
}
