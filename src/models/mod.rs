// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models exchanged with the planning backend.

pub mod ack;
pub mod activity;
pub mod conflict;
pub mod constraint;
pub mod defaults;
pub mod optimisation;
pub mod session;
pub mod stats;

pub use ack::{RescheduledActivity, WriteAck};
pub use activity::{
    Activity, ActivityForm, ActivityInput, AliasedActivity, NativeActivity, Priority, Status,
};
pub use conflict::{Conflict, Severity};
pub use constraint::{ConstraintSet, Unavailability, UnavailabilityInput, UnavailabilityKind};
pub use optimisation::{OptimisedPlan, PlanRequest, PlanTask};
pub use session::Session;
pub use stats::{DailyFatigue, StatsSummary};

/// Backend user identifier.
pub type UserId = u64;
