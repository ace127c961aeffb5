// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity CRUD against `/activites`.
//!
//! Listing never fails: any error is logged and an empty list returned.
//! Writes log and propagate.

use crate::error::Result;
use crate::models::{Activity, ActivityForm, ActivityInput, UserId};
use crate::services::backend::{PlanningClient, ACTIVITIES_PATH};
use serde_json::Value;

/// Activity operations scoped to one user.
pub struct ActivitiesApi<'a> {
    client: &'a PlanningClient,
    user_id: UserId,
}

impl<'a> ActivitiesApi<'a> {
    pub(crate) fn new(client: &'a PlanningClient, user_id: UserId) -> Self {
        Self { client, user_id }
    }

    /// All activities of the user, or an empty list if the backend could
    /// not be read.
    pub async fn list(&self) -> Vec<Activity> {
        let query = [("userId", self.user_id.to_string())];
        match self
            .client
            .get_json::<Option<Vec<Activity>>>(ACTIVITIES_PATH, &query)
            .await
        {
            Ok(activities) => activities.unwrap_or_default(),
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    user_id = self.user_id,
                    "Failed to load activities, using empty list"
                );
                Vec::new()
            }
        }
    }

    /// Create an activity. Returns the backend reply as-is.
    pub async fn create(&self, activity: &ActivityInput) -> Result<Value> {
        let mut form = self.command("create", None);
        form.extend(ActivityForm::normalize(activity).fields());

        self.client
            .post_form(ACTIVITIES_PATH, &form)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, user_id = self.user_id, "Error creating activity");
                e
            })
    }

    /// Replace every field of an existing activity.
    pub async fn update(&self, id: u64, activity: &ActivityInput) -> Result<Value> {
        let mut form = self.command("update", Some(id));
        form.extend(ActivityForm::normalize(activity).fields());

        self.client
            .post_form(ACTIVITIES_PATH, &form)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, user_id = self.user_id, id, "Error updating activity");
                e
            })
    }

    pub async fn delete(&self, id: u64) -> Result<Value> {
        let form = self.command("delete", Some(id));

        self.client
            .post_form(ACTIVITIES_PATH, &form)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, user_id = self.user_id, id, "Error deleting activity");
                e
            })
    }

    fn command(&self, action: &str, id: Option<u64>) -> Vec<(&'static str, String)> {
        let mut form = vec![("action", action.to_string())];
        if let Some(id) = id {
            form.push(("id", id.to_string()));
        }
        form.push(("userId", self.user_id.to_string()));
        form
    }
}
