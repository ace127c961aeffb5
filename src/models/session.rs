//! Logged-in user identity kept between runs.

use super::UserId;
use serde::{Deserialize, Serialize};

/// The current user.
///
/// A stored username alone means "logged in"; the id may be missing when
/// the session was written by an older client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub user_id: Option<UserId>,
    pub username: String,
}

impl Session {
    pub fn new(user_id: UserId, username: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id),
            username: username.into(),
        }
    }
}
