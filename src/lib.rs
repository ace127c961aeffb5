// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Planning client: activities and constraints on a remote planning
//! backend.
//!
//! This crate provides the HTTP resource clients, session bookkeeping, and
//! toast notifications used by the `planning` command line.

pub mod config;
pub mod error;
pub mod models;
pub mod notify;
pub mod services;
pub mod session;
pub mod time_utils;

use config::Config;
use notify::Notifier;
use services::PlanningClient;
use session::{FileStore, SessionManager};

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub client: PlanningClient,
    pub sessions: SessionManager<FileStore>,
    pub notifier: Notifier,
}

impl AppState {
    /// Wire up the client and the on-disk session for `config`.
    pub fn new(config: Config, notifier: Notifier) -> error::Result<Self> {
        let client = PlanningClient::new(&config)?;
        let sessions = SessionManager::new(FileStore::new(config.session_file.clone()));
        Ok(Self {
            config,
            client,
            sessions,
            notifier,
        })
    }
}
