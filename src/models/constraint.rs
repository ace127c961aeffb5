// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Per-user scheduling constraints: minimum sleep and weekly
//! unavailability windows.

use super::defaults::{self, non_empty};
use crate::time_utils::parse_clock;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reason an unavailability window exists.
///
/// Only `MEETING` has client-side meaning; anything else the backend
/// sends is carried through verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum UnavailabilityKind {
    Meeting,
    Other(String),
}

impl UnavailabilityKind {
    pub fn as_str(&self) -> &str {
        match self {
            UnavailabilityKind::Meeting => "MEETING",
            UnavailabilityKind::Other(s) => s,
        }
    }
}

impl Default for UnavailabilityKind {
    fn default() -> Self {
        defaults::UNAVAILABLE_KIND
    }
}

impl From<String> for UnavailabilityKind {
    fn from(value: String) -> Self {
        if value.is_empty() {
            UnavailabilityKind::default()
        } else if value.eq_ignore_ascii_case("MEETING") {
            UnavailabilityKind::Meeting
        } else {
            UnavailabilityKind::Other(value)
        }
    }
}

impl From<&str> for UnavailabilityKind {
    fn from(value: &str) -> Self {
        UnavailabilityKind::from(value.to_string())
    }
}

impl From<UnavailabilityKind> for String {
    fn from(value: UnavailabilityKind) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for UnavailabilityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recurring weekly window during which the user cannot be scheduled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unavailability {
    /// Backend-assigned identifier
    #[serde(default)]
    pub id: u64,
    /// Day-of-week index
    #[serde(default)]
    pub day: u8,
    /// `HH:MM`
    #[serde(default)]
    pub start: String,
    /// `HH:MM`
    #[serde(default)]
    pub end: String,
    #[serde(rename = "type", default)]
    pub kind: UnavailabilityKind,
}

impl Unavailability {
    /// Parsed clock window, if both ends are well formed.
    pub fn span(&self) -> Option<(NaiveTime, NaiveTime)> {
        Some((parse_clock(&self.start)?, parse_clock(&self.end)?))
    }
}

/// Everything the backend knows about a user's constraints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstraintSet {
    /// Minimum nightly sleep, in hours
    #[serde(default = "default_min_sleep")]
    pub min_sleep: f64,
    #[serde(default)]
    pub unavailable: Vec<Unavailability>,
}

fn default_min_sleep() -> f64 {
    defaults::MIN_SLEEP_HOURS
}

impl Default for ConstraintSet {
    fn default() -> Self {
        Self {
            min_sleep: defaults::MIN_SLEEP_HOURS,
            unavailable: Vec::new(),
        }
    }
}

/// A new unavailability window; every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnavailabilityInput {
    #[serde(default)]
    pub day: Option<u8>,
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<UnavailabilityKind>,
}

impl UnavailabilityInput {
    /// Form fields in wire order (after `action` and `userId`), defaults
    /// applied.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            (
                "day",
                self.day.unwrap_or(defaults::UNAVAILABLE_DAY).to_string(),
            ),
            (
                "start",
                non_empty(self.start.as_deref())
                    .unwrap_or(defaults::UNAVAILABLE_START)
                    .to_string(),
            ),
            (
                "end",
                non_empty(self.end.as_deref())
                    .unwrap_or(defaults::UNAVAILABLE_END)
                    .to_string(),
            ),
            (
                "type",
                self.kind
                    .clone()
                    .unwrap_or(defaults::UNAVAILABLE_KIND)
                    .to_string(),
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_input_takes_defaults() {
        let fields = UnavailabilityInput::default().fields();
        assert_eq!(
            fields,
            vec![
                ("day", "0".to_string()),
                ("start", "00:00".to_string()),
                ("end", "23:59".to_string()),
                ("type", "MEETING".to_string()),
            ]
        );
    }

    #[test]
    fn blank_strings_count_as_unset() {
        let input = UnavailabilityInput {
            day: Some(3),
            start: Some(String::new()),
            end: Some("12:00".to_string()),
            kind: Some(UnavailabilityKind::from("COURS")),
        };
        let fields = input.fields();
        assert_eq!(fields[0], ("day", "3".to_string()));
        assert_eq!(fields[1], ("start", "00:00".to_string()));
        assert_eq!(fields[2], ("end", "12:00".to_string()));
        assert_eq!(fields[3], ("type", "COURS".to_string()));
    }

    #[test]
    fn constraint_set_fills_missing_fields() {
        let set: ConstraintSet = serde_json::from_value(json!({})).unwrap();
        assert_eq!(set, ConstraintSet::default());

        let set: ConstraintSet = serde_json::from_value(json!({
            "minSleep": 7.5,
            "unavailable": [
                {"id": 4, "day": 1, "start": "09:00", "end": "10:30", "type": "MEETING"},
                {"id": 5, "day": 2, "start": "14:00", "end": "15:00", "type": "SPORT"}
            ]
        }))
        .unwrap();
        assert_eq!(set.min_sleep, 7.5);
        assert_eq!(set.unavailable[0].kind, UnavailabilityKind::Meeting);
        assert_eq!(
            set.unavailable[1].kind,
            UnavailabilityKind::Other("SPORT".to_string())
        );
        assert_eq!(
            set.unavailable[0].span(),
            Some((
                NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
                NaiveTime::from_hms_opt(10, 30, 0).unwrap()
            ))
        );
    }
}
