// BSD 3-Clause License
// Copyright (c) 2025, NØNOS - NOXTERM
//
//! Raw key/value sources the settings are resolved from.
//! Keys are folded to lowercase so lookups ignore case.

use std::collections::HashMap;
use std::env;
use std::path::Path;

use super::error::ConfigError;

/// A value as supplied, before any coercion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawValue {
    /// Text from an environment variable or env file.
    Text(String),
    /// An already-split list, supplied programmatically.
    List(Vec<String>),
}

impl RawValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            RawValue::Text(s) => Some(s),
            RawValue::List(_) => None,
        }
    }

    /// Printable form used in error messages. Lists render as JSON.
    pub fn render(&self) -> String {
        match self {
            RawValue::Text(s) => s.clone(),
            RawValue::List(items) => {
                serde_json::to_string(items).unwrap_or_else(|_| format!("{:?}", items))
            }
        }
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::Text(s.to_string())
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        RawValue::Text(s)
    }
}

impl From<Vec<String>> for RawValue {
    fn from(items: Vec<String>) -> Self {
        RawValue::List(items)
    }
}

impl From<Vec<&str>> for RawValue {
    fn from(items: Vec<&str>) -> Self {
        RawValue::List(items.into_iter().map(str::to_string).collect())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    value: RawValue,
    // Set when the key was spelled in all caps, e.g. `PORT` rather than `Port`.
    uppercase: bool,
}

/// Case-insensitive mapping of setting names to raw values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSource {
    entries: HashMap<String, Entry>,
}

impl EnvSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the live process environment. Variables whose name or
    /// value is not valid UTF-8 are skipped.
    pub fn from_process_env() -> Self {
        let mut source = Self::new();
        for (key, value) in env::vars_os() {
            if let (Ok(key), Ok(value)) = (key.into_string(), value.into_string()) {
                source.insert(key, value);
            }
        }
        source
    }

    /// Reads `KEY=value` pairs from an env file without touching the process
    /// environment. Returns `Ok(None)` when the file does not exist.
    pub fn from_env_file(path: impl AsRef<Path>) -> Result<Option<Self>, ConfigError> {
        let path = path.as_ref();
        let file_error = |e: dotenvy::Error| ConfigError::EnvFile {
            path: path.display().to_string(),
            message: e.to_string(),
        };

        let iter = match dotenvy::from_path_iter(path) {
            Ok(iter) => iter,
            Err(e) if e.not_found() => return Ok(None),
            Err(e) => return Err(file_error(e)),
        };

        let mut source = Self::new();
        for item in iter {
            let (key, value) = item.map_err(file_error)?;
            source.insert(key, value);
        }
        Ok(Some(source))
    }

    /// Merges two sources; on key collision the value from `upper` wins.
    pub fn overlay(lower: EnvSource, upper: EnvSource) -> EnvSource {
        let mut merged = lower;
        merged.entries.extend(upper.entries);
        merged
    }

    /// Inserts a value. Within a single source an all-caps spelling of a key
    /// is never replaced by a mixed- or lower-case spelling of the same key.
    pub fn insert(&mut self, key: impl AsRef<str>, value: impl Into<RawValue>) {
        let key = key.as_ref();
        let uppercase = key == key.to_ascii_uppercase();
        let folded = key.to_ascii_lowercase();

        if let Some(existing) = self.entries.get(&folded) {
            if existing.uppercase && !uppercase {
                return;
            }
        }
        self.entries.insert(
            folded,
            Entry {
                value: value.into(),
                uppercase,
            },
        );
    }

    /// Inserts only when no spelling of `key` is present. Returns whether the
    /// value was inserted.
    pub fn insert_if_absent(&mut self, key: impl AsRef<str>, value: impl Into<RawValue>) -> bool {
        let key = key.as_ref();
        if self.contains(key) {
            return false;
        }
        self.insert(key, value);
        true
    }

    pub fn get(&self, key: &str) -> Option<&RawValue> {
        self.entries
            .get(&key.to_ascii_lowercase())
            .map(|entry| &entry.value)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(&key.to_ascii_lowercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for EnvSource
where
    K: AsRef<str>,
    V: Into<RawValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut source = Self::new();
        for (key, value) in iter {
            source.insert(key, value);
        }
        source
    }
}
