// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Re-planning through `/optimisation/generer` and `/optimisation/appliquer`.
//!
//! Both are writes: failures are logged and returned.

use crate::error::{ClientError, Result};
use crate::models::{OptimisedPlan, PlanRequest, UserId};
use crate::services::backend::{PlanningClient, OPTIMISE_APPLY_PATH, OPTIMISE_GENERATE_PATH};
use crate::time_utils::format_local_datetime;

pub struct OptimisationApi<'a> {
    client: &'a PlanningClient,
    user_id: UserId,
}

impl<'a> OptimisationApi<'a> {
    pub(crate) fn new(client: &'a PlanningClient, user_id: UserId) -> Self {
        Self { client, user_id }
    }

    /// Compute a plan without saving it.
    pub async fn generate(&self, request: &PlanRequest) -> Result<OptimisedPlan> {
        self.submit(OPTIMISE_GENERATE_PATH, request).await
    }

    /// Compute a plan and save it as the user's activities.
    pub async fn apply(&self, request: &PlanRequest) -> Result<OptimisedPlan> {
        self.submit(OPTIMISE_APPLY_PATH, request).await
    }

    async fn submit(&self, path: &str, request: &PlanRequest) -> Result<OptimisedPlan> {
        let form = self.form(request)?;
        let plan: OptimisedPlan = self
            .client
            .post_form(path, &form)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, user_id = self.user_id, path, "Optimisation failed");
                e
            })?;

        tracing::info!(
            user_id = self.user_id,
            path,
            activities = plan.activities.len(),
            applied = plan.applied,
            "Plan computed"
        );
        Ok(plan)
    }

    fn form(&self, request: &PlanRequest) -> Result<Vec<(&'static str, String)>> {
        let mut form = vec![
            ("userId", self.user_id.to_string()),
            ("dateDebut", format_local_datetime(request.date_debut)),
            ("dateFin", format_local_datetime(request.date_fin)),
        ];
        if !request.tasks.is_empty() {
            let tasks = serde_json::to_string(&request.tasks)
                .map_err(|e| ClientError::Internal(e.into()))?;
            form.push(("activites", tasks));
        }
        Ok(form)
    }
}
