use crate::{Role, Session};

#[test]
fn test_session_persists_token_and_role_together() {
    let session = Session::new("tok".to_string(), Role::Admin);

    let json = serde_json::to_string(&session).unwrap();
    let restored: Session = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, session);
    assert_eq!(restored.role, Role::Admin);
}
