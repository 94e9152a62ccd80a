mod common;

use common::{VOTER_TOKEN, app_for, errors, request_count, successes, voter_app};

use vote_client::ClientError;
use vote_core::{CandidateId, total_votes};

use googletest::prelude::*;
use serde_json::{Value, json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, method, path},
};

async fn mount_get(server: &MockServer, route: &str, status: u16, body: Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(server)
        .await;
}

fn candidates_body() -> Value {
    json!([
        { "_id": "c1", "name": "Alice", "party": "Blue", "age": 44 },
        { "_id": "c2", "name": "Bob", "party": "Green", "age": 51 }
    ])
}

fn counts_body() -> Value {
    json!([
        { "party": "Blue", "voteCount": 3 },
        { "party": "Green", "voteCount": 1 }
    ])
}

fn profile_body() -> Value {
    json!({ "user": { "name": "Asha", "address": "12 Main St", "age": 34 } })
}

#[tokio::test]
async fn given_healthy_backend_when_mounted_then_all_sections_loaded() {
    // Given: All three reads succeed
    let mock_server = MockServer::start().await;
    mount_get(&mock_server, "/candidate", 200, candidates_body()).await;
    mount_get(&mock_server, "/candidate/vote/count", 200, counts_body()).await;
    Mock::given(method("GET"))
        .and(path("/user/profile"))
        .and(header("Authorization", "Bearer voter-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(profile_body()))
        .mount(&mock_server)
        .await;
    let app = voter_app(&mock_server);
    let mut dashboard = app.voter_dashboard();
    assert!(dashboard.is_loading());

    // When: Mounting the dashboard
    dashboard.mount().await.unwrap();

    // Then: Everything is shown and the loading gate is lifted
    assert!(!dashboard.is_loading());
    assert_eq!(dashboard.candidates().len(), 2);
    assert_eq!(dashboard.vote_counts().len(), 2);
    assert_that!(total_votes(dashboard.vote_counts()), eq(4u64));
    assert_eq!(dashboard.profile().unwrap().name, "Asha");
    assert!(dashboard.profile_error().is_none());
    assert!(errors(&app).is_empty());
}

#[tokio::test]
async fn given_non_array_vote_counts_when_mounted_then_tallies_empty() {
    // Given: The tally endpoint answers 2xx with an object
    let mock_server = MockServer::start().await;
    mount_get(&mock_server, "/candidate", 200, candidates_body()).await;
    mount_get(
        &mock_server,
        "/candidate/vote/count",
        200,
        json!({ "error": "Internal Server Error" }),
    )
    .await;
    mount_get(&mock_server, "/user/profile", 200, profile_body()).await;
    let app = voter_app(&mock_server);
    let mut dashboard = app.voter_dashboard();

    // When: Mounting the dashboard
    dashboard.mount().await.unwrap();

    // Then: An empty tally list is rendered
    assert!(dashboard.vote_counts().is_empty());
    assert_eq!(dashboard.candidates().len(), 2);
}

#[tokio::test]
async fn given_candidate_read_fails_when_mounted_then_other_sections_still_load() {
    // Given: Only the candidate read fails
    let mock_server = MockServer::start().await;
    mount_get(&mock_server, "/candidate", 500, json!({ "error": "boom" })).await;
    mount_get(&mock_server, "/candidate/vote/count", 200, counts_body()).await;
    mount_get(&mock_server, "/user/profile", 200, profile_body()).await;
    let app = voter_app(&mock_server);
    let mut dashboard = app.voter_dashboard();

    // When: Mounting the dashboard
    dashboard.mount().await.unwrap();

    // Then: One error notification, the rest is populated
    assert!(dashboard.candidates().is_empty());
    assert_eq!(dashboard.vote_counts().len(), 2);
    assert!(dashboard.profile().is_some());
    assert_eq!(
        errors(&app),
        vec![(
            "Error fetching candidates".to_string(),
            "Unable to load candidates. Please try again later.".to_string()
        )]
    );
}

#[tokio::test]
async fn given_profile_read_fails_when_mounted_then_loading_cleared_with_error_state() {
    // Given: The profile read fails
    let mock_server = MockServer::start().await;
    mount_get(&mock_server, "/candidate", 200, candidates_body()).await;
    mount_get(&mock_server, "/candidate/vote/count", 200, counts_body()).await;
    mount_get(&mock_server, "/user/profile", 401, json!({ "error": "Token Not Found" })).await;
    let app = voter_app(&mock_server);
    let mut dashboard = app.voter_dashboard();

    // When: Mounting the dashboard
    dashboard.mount().await.unwrap();

    // Then: No endless loading; the failure is explicit
    assert!(!dashboard.is_loading());
    assert!(dashboard.profile().is_none());
    assert_eq!(dashboard.profile_error(), Some("Token Not Found"));
    assert_eq!(errors(&app).len(), 1);
    assert_eq!(errors(&app)[0].0, "Error fetching user profile");
}

#[tokio::test]
async fn given_three_vote_clicks_when_voting_then_three_requests() {
    // Given: A voting endpoint that accepts every request
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/candidate/vote/c1"))
        .and(header("Authorization", "Bearer voter-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "ok" })))
        .expect(3)
        .mount(&mock_server)
        .await;
    mount_get(&mock_server, "/candidate/vote/count", 200, counts_body()).await;
    let app = voter_app(&mock_server);
    let mut dashboard = app.voter_dashboard();
    let id: CandidateId = "c1".parse().unwrap();

    // When: Voting three times
    for _ in 0..3 {
        dashboard.vote(&id).await.unwrap();
    }

    // Then: Three votes and three tally refreshes went out
    assert_eq!(request_count(&mock_server, "POST", "/candidate/vote/c1").await, 3);
    assert_eq!(request_count(&mock_server, "GET", "/candidate/vote/count").await, 3);
    assert_eq!(successes(&app).len(), 3);
}

#[tokio::test]
async fn given_successful_vote_when_tallies_change_then_refreshed_not_guessed() {
    // Given: Tallies that report the vote after it is cast
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/candidate/vote/c2"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;
    mount_get(
        &mock_server,
        "/candidate/vote/count",
        200,
        json!([{ "party": "Green", "voteCount": 7 }]),
    )
    .await;
    let app = voter_app(&mock_server);
    let mut dashboard = app.voter_dashboard();

    // When: Voting
    dashboard.vote(&"c2".parse().unwrap()).await.unwrap();

    // Then: The displayed tallies are exactly the server's
    assert_eq!(dashboard.vote_counts().len(), 1);
    assert_that!(dashboard.vote_counts()[0].vote_count, eq(7u64));
}

#[tokio::test]
async fn given_rejected_vote_when_voting_then_error_and_no_refresh() {
    // Given: The backend refuses the vote
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/candidate/vote/c1"))
        .respond_with(
            ResponseTemplate::new(403).set_body_json(json!({ "message": "You have already voted" })),
        )
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/candidate/vote/count"))
        .respond_with(ResponseTemplate::new(200).set_body_json(counts_body()))
        .expect(0)
        .mount(&mock_server)
        .await;
    let app = voter_app(&mock_server);
    let mut dashboard = app.voter_dashboard();

    // When: Voting
    let result = dashboard.vote(&"c1".parse().unwrap()).await;

    // Then: Failure notification with the server text
    assert_that!(result, err(anything()));
    assert_eq!(
        errors(&app),
        vec![("Vote failed.".to_string(), "You have already voted".to_string())]
    );
}

#[tokio::test]
async fn given_no_session_when_voting_then_not_sent() {
    // Given: An anonymous client
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/candidate/vote/c1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;
    let app = app_for(&mock_server);
    let mut dashboard = app.voter_dashboard();

    // When: Voting
    let result = dashboard.vote(&"c1".parse().unwrap()).await;

    // Then: Rejected locally
    assert!(matches!(result, Err(ClientError::NotAuthenticated { .. })));
    assert_eq!(errors(&app)[0].1, "You are not logged in.");
}

#[tokio::test]
async fn given_accepted_password_change_when_submitted_then_fields_cleared() {
    // Given: The backend accepts the password change
    let mock_server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/user/profile/password"))
        .and(header("Authorization", format!("Bearer {}", VOTER_TOKEN).as_str()))
        .and(body_json(json!({ "currentPassword": "old", "newPassword": "new" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "Password updated" })))
        .expect(1)
        .mount(&mock_server)
        .await;
    let app = voter_app(&mock_server);
    let mut dashboard = app.voter_dashboard();
    dashboard.current_password = "old".to_string();
    dashboard.new_password = "new".to_string();

    // When: Submitting
    dashboard.change_password().await.unwrap();

    // Then: Both fields are cleared
    assert!(dashboard.current_password.is_empty());
    assert!(dashboard.new_password.is_empty());
    assert_eq!(successes(&app), vec!["Password updated!".to_string()]);
}

#[tokio::test]
async fn given_rejected_password_change_when_submitted_then_fields_kept() {
    // Given: The backend rejects the current password
    let mock_server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/user/profile/password"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "error": "Invalid current password" })),
        )
        .mount(&mock_server)
        .await;
    let app = voter_app(&mock_server);
    let mut dashboard = app.voter_dashboard();
    dashboard.current_password = "wrong".to_string();
    dashboard.new_password = "new".to_string();

    // When: Submitting
    let result = dashboard.change_password().await;

    // Then: Fields survive for another attempt
    assert_that!(result, err(anything()));
    assert_eq!(dashboard.current_password, "wrong");
    assert_eq!(dashboard.new_password, "new");
    assert_eq!(
        errors(&app),
        vec![(
            "Password update failed.".to_string(),
            "Invalid current password".to_string()
        )]
    );
}

#[tokio::test]
async fn given_closed_view_when_mounting_then_nothing_applied() {
    // Given: A dashboard whose view was already torn down
    let mock_server = MockServer::start().await;
    mount_get(&mock_server, "/candidate", 200, candidates_body()).await;
    mount_get(&mock_server, "/candidate/vote/count", 200, counts_body()).await;
    mount_get(&mock_server, "/user/profile", 200, profile_body()).await;
    let app = voter_app(&mock_server);
    let mut dashboard = app.voter_dashboard();
    dashboard.scope().cancel();

    // When: Mounting
    let result = dashboard.mount().await;

    // Then: Cancelled, no state and no notifications
    assert!(result.unwrap_err().is_cancelled());
    assert!(dashboard.candidates().is_empty());
    assert!(dashboard.is_loading());
    assert!(app.notifications().history().is_empty());
}

#[tokio::test]
async fn given_single_section_load_when_profile_missing_session_then_gate_cleared() {
    // Given: An anonymous client
    let mock_server = MockServer::start().await;
    let app = app_for(&mock_server);
    let mut dashboard = app.voter_dashboard();

    // When: Loading only the profile
    let result = dashboard.load_profile().await;

    // Then: Rejected locally, loading gate lifted with an explicit error
    assert!(matches!(result, Err(ClientError::NotAuthenticated { .. })));
    assert!(!dashboard.is_loading());
    assert_eq!(dashboard.profile_error(), Some("You are not logged in."));
}

#[tokio::test]
async fn given_single_section_load_when_candidates_read_then_only_candidates_requested() {
    // Given: A healthy candidate endpoint
    let mock_server = MockServer::start().await;
    mount_get(&mock_server, "/candidate", 200, candidates_body()).await;
    let app = voter_app(&mock_server);
    let mut dashboard = app.voter_dashboard();

    // When: Loading only the candidates
    dashboard.load_candidates().await.unwrap();

    // Then: One request, profile untouched
    assert_eq!(dashboard.candidates().len(), 2);
    assert_eq!(mock_server.received_requests().await.unwrap().len(), 1);
    assert!(dashboard.is_loading());
}
