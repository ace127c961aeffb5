// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Constraint operations against `/contraintes`.

use crate::error::Result;
use crate::models::{ConstraintSet, UnavailabilityInput, UserId};
use crate::services::backend::{PlanningClient, CONSTRAINTS_PATH};
use serde_json::Value;

/// Constraint operations scoped to one user.
pub struct ConstraintsApi<'a> {
    client: &'a PlanningClient,
    user_id: UserId,
}

impl<'a> ConstraintsApi<'a> {
    pub(crate) fn new(client: &'a PlanningClient, user_id: UserId) -> Self {
        Self { client, user_id }
    }

    /// The user's constraints, or `{minSleep: 8, unavailable: []}` if the
    /// backend could not be read.
    pub async fn list(&self) -> ConstraintSet {
        let query = [("userId", self.user_id.to_string())];
        match self
            .client
            .get_json::<Option<ConstraintSet>>(CONSTRAINTS_PATH, &query)
            .await
        {
            Ok(set) => set.unwrap_or_default(),
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    user_id = self.user_id,
                    "Failed to load constraints, using defaults"
                );
                ConstraintSet::default()
            }
        }
    }

    /// Set the minimum nightly sleep, in hours.
    pub async fn set_min_sleep(&self, hours: f64) -> Result<Value> {
        let form = vec![
            ("action", "setSleep".to_string()),
            ("userId", self.user_id.to_string()),
            ("minSleep", hours.to_string()),
        ];

        self.post(&form, "Error saving min sleep").await
    }

    pub async fn add_unavailability(&self, entry: &UnavailabilityInput) -> Result<Value> {
        let mut form = vec![
            ("action", "addUnavailable".to_string()),
            ("userId", self.user_id.to_string()),
        ];
        form.extend(entry.fields());

        self.post(&form, "Error adding unavailability").await
    }

    pub async fn delete_unavailability(&self, id: u64) -> Result<Value> {
        let form = vec![
            ("action", "delUnavailable".to_string()),
            ("userId", self.user_id.to_string()),
            ("id", id.to_string()),
        ];

        self.post(&form, "Error deleting unavailability").await
    }

    async fn post(&self, form: &[(&str, String)], failure: &'static str) -> Result<Value> {
        self.client
            .post_form(CONSTRAINTS_PATH, form)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, user_id = self.user_id, "{}", failure);
                e
            })
    }
}
