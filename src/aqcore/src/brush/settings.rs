// SPDX-License-Identifier: GPL-3.0-or-later

use serde_json::{Map, Value};
use tracing::warn;

/// A string keyed map of brush settings.
///
/// Stored as a JSON object so it can be read from and written to
/// configuration files as is.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BrushSettings(Map<String, Value>);

impl BrushSettings {
    pub fn new() -> BrushSettings {
        BrushSettings(Map::new())
    }

    /// Parse settings from a JSON object
    pub fn from_json(json: &str) -> serde_json::Result<BrushSettings> {
        serde_json::from_str::<Map<String, Value>>(json).map(BrushSettings)
    }

    pub fn to_json(&self) -> String {
        Value::Object(self.0.clone()).to_string()
    }

    pub fn insert(&mut self, key: &str, value: impl Into<Value>) {
        self.0.insert(key.to_owned(), value.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Copy all entries of `other` into this map, replacing existing keys
    pub fn merge(&mut self, other: &BrushSettings) {
        for (k, v) in other.0.iter() {
            self.0.insert(k.clone(), v.clone());
        }
    }

    /// Get an integer value.
    ///
    /// Missing keys and values that are not numbers return `default`.
    /// Fractional values are truncated.
    pub fn int_value(&self, key: &str, default: i32) -> i32 {
        match self.0.get(key) {
            None => default,
            Some(Value::Number(n)) => {
                if let Some(i) = n.as_i64() {
                    i.clamp(i32::MIN as i64, i32::MAX as i64) as i32
                } else if let Some(f) = n.as_f64() {
                    f as i32
                } else {
                    default
                }
            }
            Some(v) => {
                warn!("Brush setting {} is not a number: {}", key, v);
                default
            }
        }
    }

    /// Get a string value. Missing keys and non-strings return `default`.
    pub fn str_value(&self, key: &str, default: &str) -> String {
        match self.0.get(key) {
            None => default.to_owned(),
            Some(Value::String(s)) => s.clone(),
            Some(v) => {
                warn!("Brush setting {} is not a string: {}", key, v);
                default.to_owned()
            }
        }
    }
}

impl From<Map<String, Value>> for BrushSettings {
    fn from(map: Map<String, Value>) -> Self {
        BrushSettings(map)
    }
}
