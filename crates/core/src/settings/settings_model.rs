//! Settings domain models.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::settings_defaults::default_value;
use crate::constants::{COORDINATOR_EMAIL_KEY, PHOTO_SLOT_KEYS};
use crate::errors::{Result, ValidationError};

/// Merged view of the settings table: defaults overlaid with persisted values.
///
/// Values stay strings on the wire; the accessors below parse on read.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct Settings(BTreeMap<String, String>);

/// Raw admin update body: arbitrary keys, arbitrary JSON values.
pub type SettingsUpdate = serde_json::Map<String, Value>;

/// One entry of the `timeline` setting.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TimelineEvent {
    pub time: String,
    pub title: String,
    #[serde(default)]
    pub detail: String,
    #[serde(default)]
    pub note: String,
}

/// One entry of the `faq` setting.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FaqEntry {
    pub q: String,
    pub a: String,
}

impl From<BTreeMap<String, String>> for Settings {
    fn from(map: BTreeMap<String, String>) -> Self {
        Settings(map)
    }
}

impl Settings {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Value for `key`, or an empty string when absent.
    pub fn value(&self, key: &str) -> &str {
        self.get(key).unwrap_or("")
    }

    /// Drops the photo slot keys, which carry large inline image data.
    pub fn without_photos(mut self) -> Self {
        for slot in PHOTO_SLOT_KEYS {
            self.0.remove(slot);
        }
        self
    }

    pub fn couple_names(&self) -> (&str, &str) {
        (self.value("name1"), self.value("name2"))
    }

    /// Meal choices offered on the RSVP form.
    pub fn meals(&self) -> Vec<String> {
        self.value("meals")
            .split(',')
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn collect_dietary(&self) -> bool {
        self.flag("collect_dietary")
    }

    pub fn song_requests(&self) -> bool {
        self.flag("song_requests")
    }

    pub fn coordinator_email(&self) -> Option<&str> {
        self.get(COORDINATOR_EMAIL_KEY)
            .map(str::trim)
            .filter(|v| !v.is_empty())
    }

    pub fn timeline(&self) -> Result<Vec<TimelineEvent>> {
        self.json("timeline")
    }

    pub fn faq(&self) -> Result<Vec<FaqEntry>> {
        self.json("faq")
    }

    pub fn wedding_party(&self) -> Result<Vec<Value>> {
        self.json("wedding_party")
    }

    fn flag(&self, key: &str) -> bool {
        let fallback = default_value(key) == Some("true");
        match self.value(key).trim() {
            "true" => true,
            "false" => false,
            _ => fallback,
        }
    }

    fn json<T: serde::de::DeserializeOwned>(&self, key: &str) -> Result<T> {
        let raw = self.value(key);
        let raw = if raw.trim().is_empty() { "[]" } else { raw };
        serde_json::from_str(raw).map_err(|e| {
            ValidationError::MalformedSetting {
                key: key.to_string(),
                reason: e.to_string(),
            }
            .into()
        })
    }
}

/// Text form a submitted value is stored as.
///
/// Strings are kept verbatim; everything else uses its JSON text, so
/// `true` becomes `"true"`, `3` becomes `"3"` and arrays stay parseable.
pub fn coerce_setting_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
