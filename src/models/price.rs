use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::locale;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceEntry {
    pub code: String,
    pub name: String,

    // Buying side ("calculatedAlis" on the wire).
    #[serde(rename = "calculatedAlis")]
    pub buying: f64,
    // Selling side ("calculatedSatis" on the wire).
    #[serde(rename = "calculatedSatis")]
    pub selling: f64,

    // Change metadata used only for display.
    #[serde(default)]
    pub direction: Option<String>,
    #[serde(default)]
    pub change_pct: Option<f64>,
}

impl PriceEntry {
    /// Normalizes one feed entry. The feed is loosely typed: prices may
    /// arrive as numbers or locale-formatted strings, and anything else
    /// coerces to 0.0 so the evaluator skips it.
    pub fn from_feed_value(raw: &Value) -> Option<Self> {
        let code = raw.get("code")?.as_str()?.trim().to_string();
        if code.is_empty() {
            return None;
        }

        let name = raw
            .get("name")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(&code)
            .to_string();

        Some(PriceEntry {
            buying: coerce_price(raw.get("calculatedAlis")),
            selling: coerce_price(raw.get("calculatedSatis")),
            direction: raw
                .get("direction")
                .and_then(Value::as_str)
                .map(str::to_string),
            change_pct: raw.get("percent").and_then(Value::as_f64),
            code,
            name,
        })
    }
}

fn coerce_price(raw: Option<&Value>) -> f64 {
    match raw {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => locale::parse_locale_number(s),
        _ => 0.0,
    }
}

/// A complete point-in-time price list, keyed by instrument code.
/// Each feed frame fully replaces the previous snapshot.
#[derive(Debug, Clone, Default)]
pub struct PriceSnapshot {
    entries: HashMap<String, PriceEntry>,
}

impl PriceSnapshot {
    pub fn new(entries: Vec<PriceEntry>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|e| (e.code.clone(), e))
                .collect(),
        }
    }

    /// Builds a snapshot from a raw feed frame. Accepts either a bare array
    /// of entries or an object wrapping it under "data". Entries that fail
    /// normalization are dropped.
    pub fn from_feed_json(raw: &Value) -> Self {
        let items = match raw {
            Value::Array(items) => items.as_slice(),
            Value::Object(map) => match map.get("data") {
                Some(Value::Array(items)) => items.as_slice(),
                _ => &[],
            },
            _ => &[],
        };

        Self::new(items.iter().filter_map(PriceEntry::from_feed_value).collect())
    }

    pub fn entry(&self, code: &str) -> Option<&PriceEntry> {
        self.entries.get(code)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
