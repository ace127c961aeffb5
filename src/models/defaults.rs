// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Values substituted for fields a caller leaves unset.
//!
//! | Record          | Field         | Default    |
//! |-----------------|---------------|------------|
//! | activity        | `priorite`    | `NORMALE`  |
//! | activity        | `statut`      | `PLANIFIE` |
//! | activity        | `description` | `""`       |
//! | activity        | `categorieId` | `""`       |
//! | unavailability  | `day`         | `0`        |
//! | unavailability  | `start`       | `00:00`    |
//! | unavailability  | `end`         | `23:59`    |
//! | unavailability  | `type`        | `MEETING`  |
//! | constraint set  | `minSleep`    | `8`        |
//!
//! An empty string counts as unset.

use super::activity::{Priority, Status};
use super::constraint::UnavailabilityKind;

pub const PRIORITE: Priority = Priority::Normale;
pub const STATUT: Status = Status::Planifie;
pub const DESCRIPTION: &str = "";
pub const CATEGORIE_ID: &str = "";

pub const UNAVAILABLE_DAY: u8 = 0;
pub const UNAVAILABLE_START: &str = "00:00";
pub const UNAVAILABLE_END: &str = "23:59";
pub const UNAVAILABLE_KIND: UnavailabilityKind = UnavailabilityKind::Meeting;

pub const MIN_SLEEP_HOURS: f64 = 8.0;

/// Treat `Some("")` like `None`.
pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
