// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session check, sign-in, and logout behaviour.

use planning_client::models::Session;
use planning_client::session::{
    FileStore, MemoryStore, Page, SessionManager, SessionState, SessionStore, UserNav,
    USERNAME_KEY, USER_ID_KEY,
};

/// Page double recording what the session manager did to it.
struct TestPage {
    path: String,
    has_nav: bool,
    nav_html: Option<String>,
    navigated_to: Option<String>,
}

impl TestPage {
    fn new(path: &str) -> Self {
        Self {
            path: path.to_string(),
            has_nav: true,
            nav_html: None,
            navigated_to: None,
        }
    }

    fn without_nav(path: &str) -> Self {
        Self {
            has_nav: false,
            ..Self::new(path)
        }
    }
}

impl Page for TestPage {
    fn path(&self) -> &str {
        &self.path
    }

    fn render_user_nav(&mut self, nav: &UserNav) -> bool {
        if self.has_nav {
            self.nav_html = Some(nav.html());
        }
        self.has_nav
    }

    fn navigate(&mut self, href: &str) {
        self.navigated_to = Some(href.to_string());
    }
}

fn signed_in() -> SessionManager<MemoryStore> {
    let manager = SessionManager::new(MemoryStore::new());
    manager.sign_in(&Session::new(2, "alice")).unwrap();
    manager
}

#[test]
fn test_redirects_when_logged_out() {
    let manager = SessionManager::new(MemoryStore::new());

    let mut page = TestPage::new("/app/pages/planning.html");
    assert_eq!(
        manager.init(&mut page),
        SessionState::Redirected {
            to: "login.html".to_string()
        }
    );
    assert_eq!(page.navigated_to.as_deref(), Some("login.html"));

    let mut root = TestPage::new("/app/index.html");
    manager.init(&mut root);
    assert_eq!(root.navigated_to.as_deref(), Some("pages/login.html"));
}

#[test]
fn test_no_redirect_on_login_page() {
    let manager = SessionManager::new(MemoryStore::new());
    let mut page = TestPage::new("/app/pages/login.html");

    assert_eq!(manager.init(&mut page), SessionState::LoginPage);
    assert!(page.navigated_to.is_none());
    assert!(page.nav_html.is_none());
}

#[test]
fn test_logged_in_renders_nav() {
    let manager = signed_in();
    let mut page = TestPage::new("/app/pages/planning.html");

    assert_eq!(
        manager.init(&mut page),
        SessionState::Active(Session::new(2, "alice"))
    );
    assert!(page.navigated_to.is_none());
    let html = page.nav_html.expect("nav should be rendered");
    assert!(html.contains("<strong>alice</strong>"));
    assert!(html.contains("logoutBtn"));
}

#[test]
fn test_missing_nav_slot_is_tolerated() {
    let manager = signed_in();
    let mut page = TestPage::without_nav("/app/index.html");

    assert!(matches!(manager.init(&mut page), SessionState::Active(_)));
    assert!(page.navigated_to.is_none());
}

#[test]
fn test_username_without_user_id_is_still_logged_in() {
    let manager = SessionManager::new(MemoryStore::new());
    manager.store().set(USERNAME_KEY, "bob").unwrap();
    let mut page = TestPage::new("/app/pages/planning.html");

    match manager.init(&mut page) {
        SessionState::Active(session) => {
            assert_eq!(session.username, "bob");
            assert_eq!(session.user_id, None);
        }
        other => panic!("expected active session, got {:?}", other),
    }
}

#[test]
fn test_logout_clears_and_navigates() {
    let manager = signed_in();
    let mut page = TestPage::new("/app/pages/planning.html");

    manager.logout(&mut page).unwrap();

    assert_eq!(page.navigated_to.as_deref(), Some("login.html"));
    assert_eq!(manager.store().get(USER_ID_KEY).unwrap(), None);
    assert_eq!(manager.store().get(USERNAME_KEY).unwrap(), None);
    assert!(manager.current().is_none());
}

#[test]
fn test_file_store_survives_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state").join("session.json");

    let first = SessionManager::new(FileStore::new(&path));
    first.sign_in(&Session::new(7, "carol")).unwrap();
    drop(first);

    let reloaded = SessionManager::new(FileStore::new(&path));
    assert_eq!(reloaded.current(), Some(Session::new(7, "carol")));

    let mut page = TestPage::new("/app/index.html");
    reloaded.logout(&mut page).unwrap();
    assert!(SessionManager::new(FileStore::new(&path)).current().is_none());
    assert_eq!(page.navigated_to.as_deref(), Some("pages/login.html"));
}

#[test]
fn test_corrupt_session_file_reads_as_logged_out() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    std::fs::write(&path, "{not json").unwrap();

    let manager = SessionManager::new(FileStore::new(&path));
    let mut page = TestPage::new("/app/pages/planning.html");

    assert!(matches!(
        manager.init(&mut page),
        SessionState::Redirected { .. }
    ));
    assert!(manager.store().get(USERNAME_KEY).is_err());

    manager.sign_in(&Session::new(2, "alice")).unwrap();
    assert_eq!(manager.current(), Some(Session::new(2, "alice")));

    manager.logout(&mut page).unwrap();
    assert!(manager.current().is_none());
    assert_eq!(page.navigated_to.as_deref(), Some("login.html"));
}

#[test]
fn test_logout_with_corrupt_file_recovers() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    std::fs::write(&path, "[1, 2").unwrap();

    let manager = SessionManager::new(FileStore::new(&path));
    let mut page = TestPage::new("/app/index.html");
    manager.logout(&mut page).unwrap();

    assert_eq!(page.navigated_to.as_deref(), Some("pages/login.html"));
    assert_eq!(manager.store().get(USERNAME_KEY).unwrap(), None);
}
