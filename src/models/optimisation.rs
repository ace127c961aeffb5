// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Re-planning requests and the plans the backend returns.

use super::ack::RescheduledActivity;
use super::activity::Priority;
use serde::{Deserialize, Serialize};

/// A task to place, as the planner expects it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanTask {
    pub titre: String,
    pub duree_heures: u32,
    pub priorite: Priority,
}

/// Period to re-plan and, optionally, the tasks to place in it.
///
/// Without tasks the backend plans its own placeholder set.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanRequest {
    pub date_debut: chrono::NaiveDateTime,
    pub date_fin: chrono::NaiveDateTime,
    pub tasks: Vec<PlanTask>,
}

/// Reply from `/optimisation/generer` or `/optimisation/appliquer`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct OptimisedPlan {
    pub status: String,
    /// Set when the plan was written back to the user's activities.
    pub applied: bool,
    #[serde(rename = "activites")]
    pub activities: Vec<RescheduledActivity>,
    pub error: Option<String>,
}

impl OptimisedPlan {
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn task_serializes_for_planner() {
        let task = PlanTask {
            titre: "Rapport".to_string(),
            duree_heures: 3,
            priorite: Priority::Haute,
        };
        assert_eq!(
            serde_json::to_value(&task).unwrap(),
            json!({"titre": "Rapport", "dureeHeures": 3, "priorite": "HAUTE"})
        );
    }

    #[test]
    fn generated_plan_has_unsaved_activities() {
        let plan: OptimisedPlan = serde_json::from_value(json!({
            "status": "ok",
            "activites": [
                {"id": 0, "titre": "Tâche A", "debut": "2025-12-22T08:00", "fin": "2025-12-22T10:00", "priorite": "HAUTE"}
            ]
        }))
        .unwrap();

        assert!(plan.is_ok());
        assert!(!plan.applied);
        assert_eq!(plan.activities[0].id, 0);
        assert_eq!(plan.activities[0].titre, "Tâche A");
    }
}
