// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Account login and registration against `/auth`.

use crate::error::{ClientError, Result};
use crate::models::{Session, UserId};
use crate::services::backend::{PlanningClient, AUTH_PATH};
use serde::Deserialize;

/// Fields required to open an account.
#[derive(Debug, Clone)]
pub struct Registration {
    pub nom: String,
    pub prenom: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
struct AuthReply {
    #[serde(rename = "userId")]
    user_id: Option<UserId>,
    #[serde(default)]
    message: Option<String>,
}

pub struct AuthApi<'a> {
    client: &'a PlanningClient,
}

impl<'a> AuthApi<'a> {
    pub(crate) fn new(client: &'a PlanningClient) -> Self {
        Self { client }
    }

    /// Check credentials and return the session to store.
    ///
    /// Bad credentials come back as HTTP 401.
    pub async fn login(&self, username: &str, password: &str) -> Result<Session> {
        let form = [
            ("action", "login".to_string()),
            ("username", username.to_string()),
            ("password", password.to_string()),
        ];

        let reply: AuthReply = self
            .client
            .post_form(AUTH_PATH, &form)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, username, "Login failed");
                e
            })?;

        let user_id = user_id_from(reply)?;
        tracing::info!(user_id, username, "Logged in");
        Ok(Session::new(user_id, username))
    }

    /// Create an account and return its id. An existing email is HTTP 409.
    pub async fn register(&self, registration: &Registration) -> Result<UserId> {
        let form = [
            ("action", "register".to_string()),
            ("nom", registration.nom.clone()),
            ("prenom", registration.prenom.clone()),
            ("email", registration.email.clone()),
            ("password", registration.password.clone()),
        ];

        let reply: AuthReply = self
            .client
            .post_form(AUTH_PATH, &form)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, email = %registration.email, "Registration failed");
                e
            })?;

        user_id_from(reply)
    }
}

fn user_id_from(reply: AuthReply) -> Result<UserId> {
    reply.user_id.ok_or_else(|| {
        ClientError::Decode(format!(
            "auth reply without userId{}",
            reply
                .message
                .map(|m| format!(": {}", m))
                .unwrap_or_default()
        ))
    })
}
