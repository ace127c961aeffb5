// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Typed view over write replies.
//!
//! Writes return the backend's JSON untouched. Callers that care about the
//! shape can look through [`WriteAck`].

use serde::Deserialize;
use serde_json::Value;

/// Activity moved by the backend when it re-planned around a conflict.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RescheduledActivity {
    pub id: u64,
    #[serde(default)]
    pub titre: String,
    #[serde(default)]
    pub debut: String,
    #[serde(default)]
    pub fin: String,
    #[serde(default)]
    pub priorite: String,
}

/// `{"status":"ok","id":12}` or, after re-planning,
/// `{"status":"ok","optimised":true,"activites":[...],"count":3}`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct WriteAck {
    pub status: String,
    pub id: Option<u64>,
    pub optimised: bool,
    #[serde(rename = "activites")]
    pub rescheduled: Vec<RescheduledActivity>,
    pub count: Option<u64>,
    pub error: Option<String>,
}

impl WriteAck {
    /// `None` when the reply is not an object of the expected shape.
    pub fn from_value(value: &Value) -> Option<Self> {
        if !value.is_object() {
            return None;
        }
        serde_json::from_value(value.clone()).ok()
    }

    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}
