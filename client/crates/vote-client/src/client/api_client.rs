use crate::{ClientError, ClientResult, candidates_from_value, vote_counts_from_value};

use std::time::Duration;

use log::debug;
use reqwest::{Client as ReqwestClient, Method, RequestBuilder};
use serde_json::Value;
use vote_config::ApiConfig;
use vote_core::{
    Candidate, CandidateId, CandidateInput, Credentials, LoginResponse, PasswordChange,
    ProfileResponse, SignupRequest, UserProfile, VoteCount,
};

/// HTTP client for the voting backend REST API
pub struct ApiClient {
    pub base_url: String,
    client: ReqwestClient,
}

impl ApiClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Backend URL (e.g., "http://localhost:3000")
    /// * `timeout` - Upper bound for every request, connect to last byte
    pub fn new(base_url: &str, timeout: Duration) -> ClientResult<Self> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn from_config(config: &ApiConfig) -> ClientResult<Self> {
        Self::new(&config.base_url, config.timeout())
    }

    /// Build a request, attaching the bearer token when there is one
    fn request(&self, method: Method, path: &str, token: Option<&str>) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!("{} {}", method, url);

        let mut req = self.client.request(method, &url);
        if let Some(token) = token {
            req = req.bearer_auth(token);
        }

        req
    }

    /// Execute request and map non-2xx responses to [`ClientError::Api`]
    async fn execute(&self, req: RequestBuilder) -> ClientResult<Value> {
        let response = req.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<Value>(&text)
                .ok()
                .as_ref()
                .and_then(error_message);
            debug!("Request failed with {}: {:?}", status, message);
            return Err(ClientError::api(status.as_u16(), message));
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }

        Ok(serde_json::from_str(&text)?)
    }

    // =========================================================================
    // User Operations
    // =========================================================================

    /// Create an account
    pub async fn signup(&self, request: &SignupRequest) -> ClientResult<Value> {
        let req = self.request(Method::POST, "/user/signup", None).json(request);
        self.execute(req).await
    }

    /// Exchange credentials for a token and role
    pub async fn login(&self, credentials: &Credentials) -> ClientResult<LoginResponse> {
        let req = self
            .request(Method::POST, "/user/login", None)
            .json(credentials);
        let body = self.execute(req).await?;
        Ok(serde_json::from_value(body)?)
    }

    /// Fetch the caller's profile
    pub async fn profile(&self, token: Option<&str>) -> ClientResult<UserProfile> {
        let token = require_token(token)?;
        let req = self.request(Method::GET, "/user/profile", Some(token));
        let body = self.execute(req).await?;
        let response: ProfileResponse = serde_json::from_value(body)?;
        Ok(response.user)
    }

    /// Change the caller's password
    pub async fn change_password(
        &self,
        token: Option<&str>,
        current_password: &str,
        new_password: &str,
    ) -> ClientResult<()> {
        let token = require_token(token)?;
        let body = PasswordChange {
            current_password,
            new_password,
        };
        let req = self
            .request(Method::PUT, "/user/profile/password", Some(token))
            .json(&body);
        self.execute(req).await?;
        Ok(())
    }

    // =========================================================================
    // Candidate Operations
    // =========================================================================

    /// List all candidates
    pub async fn list_candidates(&self, token: Option<&str>) -> ClientResult<Vec<Candidate>> {
        let req = self.request(Method::GET, "/candidate", token);
        let body = self.execute(req).await?;
        Ok(candidates_from_value(body))
    }

    /// Per-party vote tallies
    pub async fn vote_counts(&self, token: Option<&str>) -> ClientResult<Vec<VoteCount>> {
        let req = self.request(Method::GET, "/candidate/vote/count", token);
        let body = self.execute(req).await?;
        Ok(vote_counts_from_value(body))
    }

    /// Cast a vote for one candidate
    pub async fn vote(&self, token: Option<&str>, id: &CandidateId) -> ClientResult<()> {
        let token = require_token(token)?;
        let req = self.request(Method::POST, &format!("/candidate/vote/{}", id), Some(token));
        self.execute(req).await?;
        Ok(())
    }

    /// Create a candidate
    pub async fn create_candidate(
        &self,
        token: Option<&str>,
        input: &CandidateInput,
    ) -> ClientResult<Value> {
        let token = require_token(token)?;
        let req = self
            .request(Method::POST, "/candidate", Some(token))
            .json(input);
        self.execute(req).await
    }

    /// Replace a candidate's name, party and age
    pub async fn update_candidate(
        &self,
        token: Option<&str>,
        id: &CandidateId,
        input: &CandidateInput,
    ) -> ClientResult<Value> {
        let token = require_token(token)?;
        let req = self
            .request(Method::PUT, &format!("/candidate/{}", id), Some(token))
            .json(input);
        self.execute(req).await
    }

    /// Delete a candidate
    pub async fn delete_candidate(&self, token: Option<&str>, id: &CandidateId) -> ClientResult<()> {
        let token = require_token(token)?;
        let req = self.request(Method::DELETE, &format!("/candidate/{}", id), Some(token));
        self.execute(req).await?;
        Ok(())
    }
}

#[track_caller]
fn require_token(token: Option<&str>) -> ClientResult<&str> {
    token.ok_or_else(ClientError::not_authenticated)
}

/// Pull a human-readable message out of an error body.
///
/// The backend answers `{"error": "..."}`; `{"error": {"message": ...}}` and
/// `{"message": "..."}` are accepted as well.
fn error_message(body: &Value) -> Option<String> {
    match body.get("error") {
        Some(Value::String(message)) => Some(message.clone()),
        Some(error) => error
            .get("message")
            .and_then(|v| v.as_str())
            .map(String::from),
        None => body
            .get("message")
            .and_then(|v| v.as_str())
            .map(String::from),
    }
}
