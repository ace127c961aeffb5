// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use planning_client::config::Config;
use planning_client::services::PlanningClient;
use wiremock::{MockServer, Request};

/// Path prefix the real backend is deployed under.
#[allow(dead_code)]
pub const BASE_PATH: &str = "/projet-planning-intelligent";

/// Create a client pointed at the mock backend.
#[allow(dead_code)]
pub fn client_for(server: &MockServer) -> PlanningClient {
    let config = Config::default().with_base_url(&format!("{}{}", server.uri(), BASE_PATH));
    PlanningClient::new(&config).expect("Failed to build client")
}

/// Create a client pointed at a port nothing listens on.
#[allow(dead_code)]
pub fn unreachable_client() -> PlanningClient {
    let config = Config::default().with_base_url("http://127.0.0.1:9/projet-planning-intelligent");
    PlanningClient::new(&config).expect("Failed to build client")
}

/// Full mock path for a backend endpoint.
#[allow(dead_code)]
pub fn endpoint(resource: &str) -> String {
    format!("{}{}", BASE_PATH, resource)
}

/// Decode a form-encoded request body into ordered pairs.
#[allow(dead_code)]
pub fn form_pairs(request: &Request) -> Vec<(String, String)> {
    let body = String::from_utf8_lossy(&request.body);
    let url = reqwest::Url::parse(&format!("http://form.invalid/?{}", body))
        .expect("body should be a valid query string");
    url.query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

/// Value of one form field, if present.
#[allow(dead_code)]
pub fn form_field(request: &Request, name: &str) -> Option<String> {
    form_pairs(request)
        .into_iter()
        .find(|(k, _)| k == name)
        .map(|(_, v)| v)
}

/// All requests the mock server has seen so far.
#[allow(dead_code)]
pub async fn received(server: &MockServer) -> Vec<Request> {
    server
        .received_requests()
        .await
        .expect("request recording is enabled by default")
}
