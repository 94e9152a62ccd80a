use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct UserProfile {
    pub name: String,
    pub email: Option<String>,
    pub mobile: Option<String>,
    pub address: String,
    pub age: u32,
}

/// Wire wrapper for `GET /user/profile`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileResponse {
    pub user: UserProfile,
}
