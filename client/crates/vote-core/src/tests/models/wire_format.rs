use crate::{
    Credentials, LoginResponse, PasswordChange, ProfileResponse, Role, SignupRequest, VoteCount,
    total_votes,
};

use serde_json::json;

#[test]
fn test_credentials_use_camel_case() {
    let body = serde_json::to_value(Credentials::new("123412341234", "pw")).unwrap();
    assert_eq!(
        body,
        json!({ "aadharCardNumber": "123412341234", "password": "pw" })
    );
}

#[test]
fn test_signup_request_omits_missing_optional_fields() {
    let request = SignupRequest {
        name: "Ada".to_string(),
        age: 30,
        email: None,
        mobile: Some("555".to_string()),
        address: "1 Main St".to_string(),
        aadhar_card_number: "111122223333".to_string(),
        password: "secret".to_string(),
        role: Role::Admin,
    };

    let body = serde_json::to_value(&request).unwrap();

    assert!(body.get("email").is_none());
    assert_eq!(body["mobile"], "555");
    assert_eq!(body["aadharCardNumber"], "111122223333");
    assert_eq!(body["role"], "admin");
    assert_eq!(body["age"], 30);
}

#[test]
fn test_login_response_tolerates_error_body() {
    let response: LoginResponse =
        serde_json::from_value(json!({ "error": "Invalid credentials" })).unwrap();

    assert!(response.token.is_none());
    assert!(response.role.is_none());
    assert_eq!(response.error.as_deref(), Some("Invalid credentials"));
}

#[test]
fn test_password_change_body() {
    let body = serde_json::to_value(PasswordChange {
        current_password: "old",
        new_password: "new",
    })
    .unwrap();
    assert_eq!(body, json!({ "currentPassword": "old", "newPassword": "new" }));
}

#[test]
fn test_profile_response_unwraps_user() {
    let response: ProfileResponse = serde_json::from_value(json!({
        "user": { "name": "Ada", "address": "1 Main St", "age": 30 }
    }))
    .unwrap();

    assert_eq!(response.user.name, "Ada");
    assert!(response.user.email.is_none());
}

#[test]
fn test_vote_count_total() {
    let counts: Vec<VoteCount> = serde_json::from_value(json!([
        { "party": "A", "voteCount": 3 },
        { "party": "B", "voteCount": 4 }
    ]))
    .unwrap();

    assert_eq!(total_votes(&counts), 7);
    assert_eq!(total_votes(&[]), 0);
}
