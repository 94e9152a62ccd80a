use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

/// Description shown when neither the transport nor the backend gave us
/// anything better to say.
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred. Please try again.";

/// Errors that can occur while talking to the backend or managing the session
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("API error (status {status}): {} {location}", .message.as_deref().unwrap_or("no message"))]
    Api {
        status: u16,
        message: Option<String>,
        location: ErrorLocation,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Not logged in {location}")]
    NotAuthenticated { location: ErrorLocation },

    #[error("Unrecognized account role: {} {location}", .value.as_deref().unwrap_or("<missing>"))]
    UnrecognizedRole {
        value: Option<String>,
        location: ErrorLocation,
    },

    #[error("Invalid login response: {message} {location}")]
    InvalidLoginResponse {
        message: String,
        location: ErrorLocation,
    },

    #[error("Session storage error at {path}: {source}")]
    Storage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Candidate not found: {id} {location}")]
    CandidateNotFound { id: String, location: ErrorLocation },

    #[error("Operation cancelled: view was closed {location}")]
    Cancelled { location: ErrorLocation },

    #[error(transparent)]
    Core(#[from] vote_core::CoreError),

    #[error(transparent)]
    Config(#[from] vote_config::ConfigError),
}

impl ClientError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        ClientError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        ClientError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Create an API error with location
    #[track_caller]
    pub fn api(status: u16, message: Option<String>) -> Self {
        ClientError::Api {
            status,
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_authenticated() -> Self {
        ClientError::NotAuthenticated {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unrecognized_role(value: Option<String>) -> Self {
        ClientError::UnrecognizedRole {
            value,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_login_response<S: Into<String>>(message: S) -> Self {
        ClientError::InvalidLoginResponse {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn candidate_not_found<S: Into<String>>(id: S) -> Self {
        ClientError::CandidateNotFound {
            id: id.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn cancelled() -> Self {
        ClientError::Cancelled {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, ClientError::Cancelled { .. })
    }

    /// The description shown to the user for this failure.
    ///
    /// Backend-reported failures use the server message when there is one;
    /// transport and parse failures fall back to [`GENERIC_ERROR_MESSAGE`].
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Api {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            ClientError::NotAuthenticated { .. } => "You are not logged in.".to_string(),
            ClientError::UnrecognizedRole { .. } => "Unrecognized account role.".to_string(),
            ClientError::CandidateNotFound { id, .. } => format!("No candidate with id {}.", id),
            _ => GENERIC_ERROR_MESSAGE.to_string(),
        }
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ClientError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for ClientError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        ClientError::from_json(err)
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
