use serde::Deserialize;

/// Body of `POST /user/login`. The backend sends `{token, role}` on success and
/// `{error}` on failure, so every field is optional.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct LoginResponse {
    pub token: Option<String>,
    pub role: Option<String>,
    pub error: Option<String>,
}
