// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Activity model: the backend read shape, the accepted input shapes, and
//! the canonical form record sent on writes.

use super::defaults::{self, non_empty};
use super::UserId;
use crate::time_utils::parse_local_datetime;
use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Activity priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    Basse,
    Normale,
    Haute,
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Basse => "BASSE",
            Priority::Normale => "NORMALE",
            Priority::Haute => "HAUTE",
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        defaults::PRIORITE
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "BASSE" => Ok(Priority::Basse),
            "NORMALE" => Ok(Priority::Normale),
            "HAUTE" => Ok(Priority::Haute),
            other => Err(format!("unknown priority: {other}")),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Activity progress status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Planifie,
    EnCours,
    Termine,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Planifie => "PLANIFIE",
            Status::EnCours => "EN_COURS",
            Status::Termine => "TERMINE",
        }
    }
}

impl Default for Status {
    fn default() -> Self {
        defaults::STATUT
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PLANIFIE" => Ok(Status::Planifie),
            "EN_COURS" => Ok(Status::EnCours),
            "TERMINE" => Ok(Status::Termine),
            other => Err(format!("unknown status: {other}")),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Activity as listed by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    /// Backend-assigned identifier
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub titre: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    /// Start (local ISO-8601, seconds optional)
    #[serde(default, deserialize_with = "null_as_empty")]
    pub debut: String,
    /// End (local ISO-8601, seconds optional)
    #[serde(default, deserialize_with = "null_as_empty")]
    pub fin: String,
    #[serde(default)]
    pub categorie_id: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub priorite: Priority,
    #[serde(default, deserialize_with = "lenient")]
    pub statut: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
}

impl Activity {
    /// Parsed time window, if both ends are present and well formed.
    pub fn window(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        Some((parse_local_datetime(&self.debut)?, parse_local_datetime(&self.fin)?))
    }

    /// Length in minutes. Negative when the backend holds an inverted window.
    pub fn duration_minutes(&self) -> Option<i64> {
        self.window().map(|(start, end)| (end - start).num_minutes())
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Unknown or blank enum strings fall back to the default instead of
/// failing the whole listing.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + Default,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.parse().ok()).unwrap_or_default())
}

/// Activity input using the backend's own field names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NativeActivity {
    pub titre: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub debut: Option<String>,
    #[serde(default)]
    pub fin: Option<String>,
    #[serde(default)]
    pub categorie_id: Option<u64>,
    #[serde(default)]
    pub priorite: Option<Priority>,
    #[serde(default)]
    pub statut: Option<Status>,
    /// Accepted for compatibility; the owner always comes from the session.
    #[serde(default)]
    pub user_id: Option<UserId>,
}

/// Activity input using the `name`/`start`/`end` convention.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AliasedActivity {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
    #[serde(default)]
    pub categorie_id: Option<u64>,
    #[serde(default)]
    pub priority: Option<Priority>,
    /// Wins over `priority` when both are set.
    #[serde(default)]
    pub priorite: Option<Priority>,
    #[serde(default)]
    pub statut: Option<Status>,
    #[serde(default)]
    pub user_id: Option<UserId>,
}

/// Any accepted activity input shape.
///
/// A document carrying `titre` lands in `Native`; otherwise `name` is
/// required. Extra keys such as a listed record's `id` are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ActivityInput {
    Native(NativeActivity),
    Aliased(AliasedActivity),
}

impl From<NativeActivity> for ActivityInput {
    fn from(value: NativeActivity) -> Self {
        ActivityInput::Native(value)
    }
}

impl From<AliasedActivity> for ActivityInput {
    fn from(value: AliasedActivity) -> Self {
        ActivityInput::Aliased(value)
    }
}

/// Canonical activity record, defaults applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityForm {
    pub titre: String,
    pub description: String,
    pub debut: String,
    pub fin: String,
    pub categorie_id: Option<u64>,
    pub priorite: Priority,
    pub statut: Status,
}

impl ActivityForm {
    /// Map either input shape onto the canonical record.
    pub fn normalize(input: &ActivityInput) -> Self {
        match input {
            ActivityInput::Native(a) => Self::build(
                &a.titre,
                a.description.as_deref(),
                a.debut.as_deref(),
                a.fin.as_deref(),
                a.categorie_id,
                a.priorite,
                a.statut,
            ),
            ActivityInput::Aliased(a) => Self::build(
                &a.name,
                a.description.as_deref(),
                a.start.as_deref(),
                a.end.as_deref(),
                a.categorie_id,
                a.priorite.or(a.priority),
                a.statut,
            ),
        }
    }

    fn build(
        titre: &str,
        description: Option<&str>,
        debut: Option<&str>,
        fin: Option<&str>,
        categorie_id: Option<u64>,
        priorite: Option<Priority>,
        statut: Option<Status>,
    ) -> Self {
        Self {
            titre: titre.to_string(),
            description: non_empty(description)
                .unwrap_or(defaults::DESCRIPTION)
                .to_string(),
            debut: debut.unwrap_or_default().to_string(),
            fin: fin.unwrap_or_default().to_string(),
            categorie_id,
            priorite: priorite.unwrap_or(defaults::PRIORITE),
            statut: statut.unwrap_or(defaults::STATUT),
        }
    }

    /// Form fields in wire order (after `action`, `id`, `userId`).
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("titre", self.titre.clone()),
            ("description", self.description.clone()),
            ("debut", self.debut.clone()),
            ("fin", self.fin.clone()),
            (
                "categorieId",
                self.categorie_id
                    .map(|c| c.to_string())
                    .unwrap_or_else(|| defaults::CATEGORIE_ID.to_string()),
            ),
            ("priorite", self.priorite.to_string()),
            ("statut", self.statut.to_string()),
        ]
    }
}
