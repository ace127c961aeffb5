// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Scheduling conflicts detected by the backend.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How serious a conflict is. Unrecognised levels are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Severity {
    Critique,
    Majeure,
    Mineure,
    Other(String),
}

impl Severity {
    pub fn as_str(&self) -> &str {
        match self {
            Severity::Critique => "CRITIQUE",
            Severity::Majeure => "MAJEURE",
            Severity::Mineure => "MINEURE",
            Severity::Other(s) => s,
        }
    }

    /// Lower is more severe; unknown levels sort last.
    pub fn rank(&self) -> u8 {
        match self {
            Severity::Critique => 0,
            Severity::Majeure => 1,
            Severity::Mineure => 2,
            Severity::Other(_) => 3,
        }
    }
}

impl From<String> for Severity {
    fn from(value: String) -> Self {
        match value.to_ascii_uppercase().as_str() {
            "CRITIQUE" => Severity::Critique,
            "MAJEURE" => Severity::Majeure,
            "MINEURE" => Severity::Mineure,
            _ => Severity::Other(value),
        }
    }
}

impl From<Severity> for String {
    fn from(value: Severity) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One detected conflict. `activite2_*` is only set for overlaps between
/// two activities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conflict {
    /// `CHEVAUCHEMENT`, `CONTRAINTE_HORAIRE`, `CONTRAINTE_PERSONNELLE`, `SOMMEIL`, ...
    #[serde(rename = "type", default)]
    pub kind: String,
    pub severite: Severity,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "activite1Id", default)]
    pub activite1_id: u64,
    #[serde(rename = "activite1Titre", default)]
    pub activite1_titre: String,
    #[serde(rename = "activite2Id", default)]
    pub activite2_id: Option<u64>,
    #[serde(rename = "activite2Titre", default)]
    pub activite2_titre: Option<String>,
    /// `YYYY-MM-DDTHH:MM`
    #[serde(default)]
    pub date_debut: Option<String>,
    #[serde(default)]
    pub date_fin: Option<String>,
}

/// `/conflits` reply envelope.
#[derive(Debug, Deserialize)]
pub(crate) struct ConflictsEnvelope {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub conflits: Vec<Conflict>,
}
