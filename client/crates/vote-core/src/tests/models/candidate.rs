use crate::{Candidate, CandidateId};

use std::str::FromStr;

use serde_json::json;

#[test]
fn test_candidate_id_rejects_empty() {
    assert!(CandidateId::from_str("").is_err());
}

#[test]
fn test_candidate_id_rejects_path_separators_and_whitespace() {
    assert!(CandidateId::from_str("abc/def").is_err());
    assert!(CandidateId::from_str("abc def").is_err());
    assert!(CandidateId::from_str("abc\n").is_err());
}

#[test]
fn test_candidate_id_accepts_object_id() {
    let id = CandidateId::from_str("66f1c2a9e4b0a1b2c3d4e5f6").unwrap();
    assert_eq!(id.as_str(), "66f1c2a9e4b0a1b2c3d4e5f6");
    assert_eq!(id.to_string(), "66f1c2a9e4b0a1b2c3d4e5f6");
}

#[test]
fn test_candidate_deserializes_underscore_id() {
    let candidate: Candidate = serde_json::from_value(json!({
        "_id": "c1",
        "name": "Alice",
        "party": "P",
        "age": 40,
        "votes": [],
        "voteCount": 0
    }))
    .unwrap();

    assert_eq!(candidate.id.as_str(), "c1");
    assert_eq!(candidate.name, "Alice");
    assert_eq!(candidate.party, "P");
    assert_eq!(candidate.age, 40);
}

#[test]
fn test_candidate_accepts_plain_id_alias_and_missing_fields() {
    let candidate: Candidate = serde_json::from_value(json!({ "id": "c2" })).unwrap();

    assert_eq!(candidate.id.as_str(), "c2");
    assert!(candidate.name.is_empty());
    assert!(candidate.party.is_empty());
    assert_eq!(candidate.age, 0);
}

#[test]
fn test_candidate_with_invalid_id_fails_to_deserialize() {
    let result: Result<Candidate, _> = serde_json::from_value(json!({ "_id": "" }));
    assert!(result.is_err());
}
