//! RSVP domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{Result, ValidationError};

/// A stored guest response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Rsvp {
    pub id: i32,
    pub fname: String,
    pub lname: String,
    pub email: Option<String>,
    pub guests: i32,
    pub meal: Option<String>,
    pub song: Option<String>,
    pub message: Option<String>,
    /// Stored as naive UTC, serialized as RFC 3339 with a `Z` suffix.
    #[serde(with = "utc_timestamp")]
    pub created_at: NaiveDateTime,
}

/// Raw form body posted by a guest.
///
/// `guests` arrives as whatever the browser sent (number or text) and is
/// normalized by [`RsvpSubmission::normalize`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RsvpSubmission {
    pub fname: Option<String>,
    pub lname: Option<String>,
    pub email: Option<String>,
    pub guests: Option<Value>,
    pub meal: Option<String>,
    pub song: Option<String>,
    pub message: Option<String>,
}

/// Validated input for creating an RSVP
#[derive(Debug, Clone, PartialEq)]
pub struct NewRsvp {
    pub fname: String,
    pub lname: String,
    pub email: Option<String>,
    pub guests: i32,
    pub meal: Option<String>,
    pub song: Option<String>,
    pub message: Option<String>,
}

/// Headcount summary for the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RsvpStats {
    pub rsvps: i64,
    pub guests: i64,
    pub meals: Vec<MealCount>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealCount {
    pub meal: String,
    pub count: i64,
}

impl RsvpSubmission {
    /// Trims and validates the submission. Both names are required.
    pub fn normalize(self) -> Result<NewRsvp> {
        let fname = self.fname.as_deref().map(str::trim).unwrap_or_default();
        let lname = self.lname.as_deref().map(str::trim).unwrap_or_default();
        if fname.is_empty() || lname.is_empty() {
            return Err(ValidationError::NameRequired.into());
        }

        Ok(NewRsvp {
            fname: fname.to_string(),
            lname: lname.to_string(),
            email: trimmed_or_none(self.email),
            guests: parse_guest_count(self.guests.as_ref()),
            meal: self.meal.filter(|m| !m.is_empty()),
            song: trimmed_or_none(self.song),
            message: trimmed_or_none(self.message),
        })
    }
}

fn trimmed_or_none(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Party size from a loosely typed form value.
///
/// Numbers are truncated, strings are read up to the first non-digit
/// (`"3 people"` is 3). Anything missing, unreadable or below 1 counts as 1.
pub fn parse_guest_count(value: Option<&Value>) -> i32 {
    let parsed = match value {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)),
        Some(Value::String(s)) => leading_integer(s),
        _ => None,
    };

    match parsed {
        Some(n) if n >= 1 => i32::try_from(n).unwrap_or(i32::MAX),
        _ => 1,
    }
}

fn leading_integer(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    // Oversized digit runs saturate rather than fail.
    let magnitude = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

mod utc_timestamp {
    use chrono::{DateTime, NaiveDateTime, SecondsFormat};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &NaiveDateTime,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.and_utc().to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.naive_utc())
            .or_else(|_| raw.parse::<NaiveDateTime>())
            .map_err(serde::de::Error::custom)
    }
}
