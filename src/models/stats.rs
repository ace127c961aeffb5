// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Workload and fatigue figures computed by the backend.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Aggregate workload over a date range.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatsSummary {
    pub total_hours: f64,
    pub days: u32,
    pub avg_hours_per_day: f64,
    pub avg_fatigue: f64,
    pub min_fatigue: f64,
    pub max_fatigue: f64,
}

/// Fatigue index for a single day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyFatigue {
    pub date: NaiveDate,
    pub fatigue_index: f64,
}

/// `/stats` reply envelope.
#[derive(Debug, Deserialize)]
pub(crate) struct SummaryEnvelope {
    #[serde(default)]
    pub summary: Option<StatsSummary>,
}

/// `/fatigue` reply envelope.
#[derive(Debug, Deserialize)]
pub(crate) struct FatigueEnvelope {
    #[serde(default)]
    pub daily: Vec<DailyFatigue>,
}
