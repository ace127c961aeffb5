// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Conflict detection results from `/conflits`.

use crate::models::conflict::ConflictsEnvelope;
use crate::models::{Conflict, UserId};
use crate::services::backend::{PlanningClient, CONFLICTS_PATH};
use chrono::NaiveDate;

pub struct ConflictsApi<'a> {
    client: &'a PlanningClient,
    user_id: UserId,
}

impl<'a> ConflictsApi<'a> {
    pub(crate) fn new(client: &'a PlanningClient, user_id: UserId) -> Self {
        Self { client, user_id }
    }

    /// Conflicts between `from` and `to` (whole days, inclusive).
    ///
    /// Without `from` the backend checks the current week. Any failure,
    /// including an `error` status in a 200 reply, gives an empty list.
    pub async fn list(&self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Vec<Conflict> {
        let mut query = vec![("userId", self.user_id.to_string())];
        if let Some(from) = from {
            query.push(("start", from.format("%Y-%m-%d").to_string()));
        }
        if let Some(to) = to {
            query.push(("end", to.format("%Y-%m-%d").to_string()));
        }

        match self
            .client
            .get_json::<ConflictsEnvelope>(CONFLICTS_PATH, &query)
            .await
        {
            Ok(envelope) if envelope.status.eq_ignore_ascii_case("ok") => envelope.conflits,
            Ok(envelope) => {
                tracing::warn!(
                    user_id = self.user_id,
                    status = %envelope.status,
                    message = ?envelope.message,
                    "Backend refused conflict check"
                );
                Vec::new()
            }
            Err(e) => {
                tracing::warn!(error = %e, user_id = self.user_id, "Failed to load conflicts");
                Vec::new()
            }
        }
    }
}
