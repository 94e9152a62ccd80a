use crate::Role;

use std::str::FromStr;

#[test]
fn test_role_as_str() {
    assert_eq!(Role::Voter.as_str(), "voter");
    assert_eq!(Role::Admin.as_str(), "admin");
}

#[test]
fn test_role_from_str() {
    assert_eq!(Role::from_str("voter").unwrap(), Role::Voter);
    assert_eq!(Role::from_str("admin").unwrap(), Role::Admin);
    assert!(Role::from_str("Admin").is_err());
    assert!(Role::from_str("").is_err());
}

#[test]
fn test_role_default_is_voter() {
    assert_eq!(Role::default(), Role::Voter);
}

#[test]
fn test_role_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
}
