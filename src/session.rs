// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session bookkeeping: login redirect, logged-in indicator, logout.
//!
//! The session is two keys in a durable key-value store. A stored
//! username means "logged in"; there is no expiry and nothing is checked
//! against the backend.

use crate::error::{ClientError, Result};
use crate::models::Session;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

pub const USER_ID_KEY: &str = "userId";
pub const USERNAME_KEY: &str = "username";

/// File name of the login page.
pub const LOGIN_PAGE: &str = "login.html";

/// Durable string key-value storage.
pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// Process-local store, lost on exit.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn values(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.values
            .lock()
            .map_err(|_| ClientError::Storage("session store lock poisoned".to_string()))
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.values()?.remove(key);
        Ok(())
    }
}

/// Store backed by a JSON object on disk; survives restarts.
///
/// A missing file reads as empty. The whole map is rewritten on every
/// change.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    fn read_content(&self) -> Result<String> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(String::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn parse_map(&self, content: &str) -> Result<HashMap<String, String>> {
        if content.trim().is_empty() {
            return Ok(HashMap::new());
        }
        serde_json::from_str(content)
            .map_err(|e| ClientError::Storage(format!("{}: {}", self.path.display(), e)))
    }

    fn read_map(&self) -> Result<HashMap<String, String>> {
        self.parse_map(&self.read_content()?)
    }

    fn write_map(&self, map: &HashMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(map)
            .map_err(|e| ClientError::Storage(e.to_string()))?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }

    fn update(&self, change: impl FnOnce(&mut HashMap<String, String>)) -> Result<()> {
        let _guard = self
            .lock
            .lock()
            .map_err(|_| ClientError::Storage("session file lock poisoned".to_string()))?;
        let content = self.read_content()?;
        // A corrupt file is replaced rather than blocking every later write.
        let mut map = self.parse_map(&content).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Discarding unreadable session file");
            HashMap::new()
        });
        change(&mut map);
        self.write_map(&map)
    }
}

impl SessionStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_map()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.update(|map| {
            map.insert(key.to_string(), value.to_string());
        })
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.update(|map| {
            map.remove(key);
        })
    }
}

/// The page the session check runs on.
pub trait Page {
    /// Path of the current document, e.g. `/app/pages/planning.html`.
    fn path(&self) -> &str;

    /// Fill the user navigation slot. Returns `false` if the page has none.
    fn render_user_nav(&mut self, nav: &UserNav) -> bool;

    fn navigate(&mut self, href: &str);
}

/// "Logged in as" indicator with a logout control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserNav {
    pub username: String,
}

impl UserNav {
    /// Id of the logout button inside [`UserNav::html`].
    pub const LOGOUT_BUTTON_ID: &'static str = "logoutBtn";

    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }

    pub fn html(&self) -> String {
        format!(
            "<span>Connecté: <strong>{}</strong></span>\n\
             <button id=\"{}\" class=\"btn-logout\">Déconnexion</button>",
            escape_html(&self.username),
            Self::LOGOUT_BUTTON_ID
        )
    }
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Outcome of the page-load session check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// No session; the page was sent to the login page.
    Redirected { to: String },
    /// No session, but already on the login page.
    LoginPage,
    /// Logged in.
    Active(Session),
}

/// True if `path` names the login page (query and fragment ignored).
pub fn is_login_page(path: &str) -> bool {
    let path = path.split(['?', '#']).next().unwrap_or("");
    path.rsplit('/').next() == Some(LOGIN_PAGE)
}

/// Login page href relative to `path`.
pub fn login_href(path: &str) -> String {
    if path.contains("/pages/") {
        LOGIN_PAGE.to_string()
    } else {
        format!("pages/{}", LOGIN_PAGE)
    }
}

/// Reads and writes the session in a [`SessionStore`].
pub struct SessionManager<S> {
    store: S,
}

impl<S: SessionStore> SessionManager<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// The stored session. Storage errors are logged and read as "none".
    pub fn current(&self) -> Option<Session> {
        let username = match self.store.get(USERNAME_KEY) {
            Ok(Some(name)) if !name.is_empty() => name,
            Ok(_) => return None,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read session");
                return None;
            }
        };

        let user_id = match self.store.get(USER_ID_KEY) {
            Ok(raw) => raw.and_then(|id| id.trim().parse().ok()),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read session user id");
                None
            }
        };

        Some(Session { user_id, username })
    }

    /// Like [`current`](Self::current), but a missing session is an error.
    pub fn require(&self) -> Result<Session> {
        self.current().ok_or(ClientError::NotLoggedIn)
    }

    /// Page-load check: redirect to login when logged out, otherwise show
    /// the user indicator.
    pub fn init<P: Page + ?Sized>(&self, page: &mut P) -> SessionState {
        match self.current() {
            None if is_login_page(page.path()) => SessionState::LoginPage,
            None => {
                let to = login_href(page.path());
                tracing::info!(from = page.path(), to = %to, "No session, redirecting to login");
                page.navigate(&to);
                SessionState::Redirected { to }
            }
            Some(session) => {
                if !page.render_user_nav(&UserNav::new(session.username.clone())) {
                    tracing::debug!(path = page.path(), "Page has no user nav slot");
                }
                SessionState::Active(session)
            }
        }
    }

    /// Persist a freshly authenticated session.
    pub fn sign_in(&self, session: &Session) -> Result<()> {
        match session.user_id {
            Some(id) => self.store.set(USER_ID_KEY, &id.to_string())?,
            None => self.store.remove(USER_ID_KEY)?,
        }
        self.store.set(USERNAME_KEY, &session.username)
    }

    /// Forget the session and go to the login page.
    ///
    /// Navigation happens even when clearing the store fails; the first
    /// storage error is returned.
    pub fn logout<P: Page + ?Sized>(&self, page: &mut P) -> Result<()> {
        let cleared = self.clear();
        let to = login_href(page.path());
        tracing::info!(to = %to, "Logged out");
        page.navigate(&to);
        cleared
    }

    /// Remove both session keys.
    pub fn clear(&self) -> Result<()> {
        let user_id = self.store.remove(USER_ID_KEY);
        let username = self.store.remove(USERNAME_KEY);
        user_id.and(username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_login_page() {
        assert!(is_login_page("/app/pages/login.html"));
        assert!(is_login_page("login.html?next=planning"));
        assert!(!is_login_page("/app/pages/planning.html"));
        assert!(!is_login_page("/app/login.html.bak"));
        assert!(!is_login_page(""));
    }

    #[test]
    fn login_href_depends_on_pages_dir() {
        assert_eq!(login_href("/app/pages/planning.html"), "login.html");
        assert_eq!(login_href("/app/index.html"), "pages/login.html");
    }

    #[test]
    fn user_nav_escapes_username() {
        let html = UserNav::new("<b>eve</b>").html();
        assert!(html.contains("&lt;b&gt;eve&lt;/b&gt;"));
        assert!(html.contains("id=\"logoutBtn\""));
    }

    #[test]
    fn escape_html_covers_ampersand_and_quotes() {
        assert_eq!(escape_html("Tom & Jerry"), "Tom &amp; Jerry");
        assert_eq!(escape_html("O'Brien"), "O&#39;Brien");
        assert_eq!(escape_html("\"x\""), "&quot;x&quot;");
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
    }

    #[test]
    fn blank_username_is_no_session() {
        let manager = SessionManager::new(MemoryStore::new());
        manager.store().set(USERNAME_KEY, "").unwrap();
        assert!(manager.current().is_none());
        assert!(matches!(manager.require(), Err(ClientError::NotLoggedIn)));
    }
}
