//! Shared fixtures for the vote-client integration tests
#![allow(dead_code)]

use std::time::Duration;

use vote_client::{ApiClient, App, MemorySessionStore, NotificationStatus};
use vote_core::{Role, Session};
use wiremock::MockServer;

pub const VOTER_TOKEN: &str = "voter-token";
pub const ADMIN_TOKEN: &str = "admin-token";

/// Redirect delay used by tests that wait for the dashboard redirect
pub const SHORT_REDIRECT: Duration = Duration::from_millis(20);

pub fn app_for(server: &MockServer) -> App {
    build(server, MemorySessionStore::new(), SHORT_REDIRECT)
}

pub fn app_with_redirect_delay(server: &MockServer, delay: Duration) -> App {
    build(server, MemorySessionStore::new(), delay)
}

pub fn voter_app(server: &MockServer) -> App {
    build(
        server,
        MemorySessionStore::with_session(Session::new(VOTER_TOKEN.to_string(), Role::Voter)),
        SHORT_REDIRECT,
    )
}

pub fn admin_app(server: &MockServer) -> App {
    build(
        server,
        MemorySessionStore::with_session(Session::new(ADMIN_TOKEN.to_string(), Role::Admin)),
        SHORT_REDIRECT,
    )
}

fn build(server: &MockServer, store: MemorySessionStore, redirect: Duration) -> App {
    let api = ApiClient::new(&server.uri(), Duration::from_secs(5)).unwrap();
    App::with_parts(api, Box::new(store), Duration::from_millis(3000), redirect).unwrap()
}

/// `(title, description)` of every error notification raised so far
pub fn errors(app: &App) -> Vec<(String, String)> {
    app.notifications()
        .history()
        .into_iter()
        .filter(|n| n.status == NotificationStatus::Error)
        .map(|n| (n.title, n.description))
        .collect()
}

/// Titles of every success notification raised so far
pub fn successes(app: &App) -> Vec<String> {
    app.notifications()
        .history()
        .into_iter()
        .filter(|n| n.status == NotificationStatus::Success)
        .map(|n| n.title)
        .collect()
}

/// Number of requests the server saw for `method` + `path`
pub async fn request_count(server: &MockServer, method: &str, path: &str) -> usize {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter(|r| r.method.as_str() == method && r.url.path() == path)
        .count()
}
