// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Planning backend HTTP client.
//!
//! Every resource sits behind a single endpoint that dispatches on an
//! `action` form field, so writes are all form-encoded POSTs to the same
//! path and reads are GETs scoped by `userId`.

use crate::config::Config;
use crate::error::{ClientError, Result};
use crate::models::UserId;
use crate::services::{
    ActivitiesApi, AuthApi, ConflictsApi, ConstraintsApi, OptimisationApi, StatsApi,
};
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;

pub const ACTIVITIES_PATH: &str = "/activites";
pub const CONSTRAINTS_PATH: &str = "/contraintes";
pub const AUTH_PATH: &str = "/auth";
pub const STATS_PATH: &str = "/stats";
pub const FATIGUE_PATH: &str = "/fatigue";
pub const CONFLICTS_PATH: &str = "/conflits";
pub const OPTIMISE_GENERATE_PATH: &str = "/optimisation/generer";
pub const OPTIMISE_APPLY_PATH: &str = "/optimisation/appliquer";

/// Planning backend client.
///
/// Cheap to clone; clones share one connection pool. Holds no user state:
/// the user is picked per call through the scoped handles.
#[derive(Clone)]
pub struct PlanningClient {
    http: reqwest::Client,
    base_url: String,
}

impl PlanningClient {
    /// Create a client for the configured backend.
    pub fn new(config: &Config) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| ClientError::Request(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.api_base_url.clone(),
        })
    }

    /// Activity operations for one user.
    pub fn activities(&self, user_id: UserId) -> ActivitiesApi<'_> {
        ActivitiesApi::new(self, user_id)
    }

    /// Constraint operations for one user.
    pub fn constraints(&self, user_id: UserId) -> ConstraintsApi<'_> {
        ConstraintsApi::new(self, user_id)
    }

    /// Login and registration.
    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(self)
    }

    /// Workload statistics for one user.
    pub fn stats(&self, user_id: UserId) -> StatsApi<'_> {
        StatsApi::new(self, user_id)
    }

    /// Detected scheduling conflicts for one user.
    pub fn conflicts(&self, user_id: UserId) -> ConflictsApi<'_> {
        ConflictsApi::new(self, user_id)
    }

    /// Re-planning for one user.
    pub fn optimisation(&self, user_id: UserId) -> OptimisationApi<'_> {
        OptimisationApi::new(self, user_id)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET with query parameters and a JSON response.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        tracing::debug!(path, "GET");

        let response = self
            .http
            .get(self.url(path))
            .header(ACCEPT, "application/json")
            .query(query)
            .send()
            .await?;

        self.check_response_json(response).await
    }

    /// POST a form-encoded command and parse the JSON reply.
    pub(crate) async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        form: &[(&str, String)],
    ) -> Result<T> {
        let action = form
            .iter()
            .find(|(k, _)| *k == "action")
            .map(|(_, v)| v.as_str())
            .unwrap_or("");
        tracing::debug!(path, action, "POST");

        let response = self
            .http
            .post(self.url(path))
            .header(ACCEPT, "application/json")
            .form(form)
            .send()
            .await?;

        self.check_response_json(response).await
    }

    /// Check response status and parse the JSON body.
    async fn check_response_json<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;

        serde_json::from_slice(&bytes)
            .map_err(|e| ClientError::Decode(format!("JSON parse error: {}", e)))
    }
}
