// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - backend resource clients.

pub mod activities;
pub mod auth;
pub mod backend;
pub mod conflicts;
pub mod constraints;
pub mod optimisation;
pub mod stats;

pub use activities::ActivitiesApi;
pub use auth::{AuthApi, Registration};
pub use backend::PlanningClient;
pub use conflicts::ConflictsApi;
pub use constraints::ConstraintsApi;
pub use optimisation::OptimisationApi;
pub use stats::StatsApi;
