// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Read-only workload statistics from `/stats` and `/fatigue`.
//!
//! Same policy as the other reads: failures are logged and replaced by an
//! empty value.

use crate::models::stats::{FatigueEnvelope, SummaryEnvelope};
use crate::models::{DailyFatigue, StatsSummary, UserId};
use crate::services::backend::{PlanningClient, FATIGUE_PATH, STATS_PATH};
use crate::time_utils::format_local_datetime;
use chrono::NaiveDateTime;

pub struct StatsApi<'a> {
    client: &'a PlanningClient,
    user_id: UserId,
}

impl<'a> StatsApi<'a> {
    pub(crate) fn new(client: &'a PlanningClient, user_id: UserId) -> Self {
        Self { client, user_id }
    }

    /// Workload summary between two instants; zeroed on failure.
    pub async fn summary(&self, from: NaiveDateTime, to: NaiveDateTime) -> StatsSummary {
        match self
            .client
            .get_json::<SummaryEnvelope>(STATS_PATH, &self.range(from, to))
            .await
        {
            Ok(envelope) => envelope.summary.unwrap_or_default(),
            Err(e) => {
                tracing::warn!(error = %e, user_id = self.user_id, "Failed to load stats");
                StatsSummary::default()
            }
        }
    }

    /// Per-day fatigue index; empty on failure.
    pub async fn daily_fatigue(&self, from: NaiveDateTime, to: NaiveDateTime) -> Vec<DailyFatigue> {
        match self
            .client
            .get_json::<FatigueEnvelope>(FATIGUE_PATH, &self.range(from, to))
            .await
        {
            Ok(envelope) => envelope.daily,
            Err(e) => {
                tracing::warn!(error = %e, user_id = self.user_id, "Failed to load fatigue");
                Vec::new()
            }
        }
    }

    fn range(&self, from: NaiveDateTime, to: NaiveDateTime) -> [(&'static str, String); 3] {
        [
            ("userId", self.user_id.to_string()),
            ("dateDebut", format_local_datetime(from)),
            ("dateFin", format_local_datetime(to)),
        ]
    }
}
