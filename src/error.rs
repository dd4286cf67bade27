//! Error types for backend calls and local form validation.

use thiserror::Error;

/// Failure of a single backend call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response
    #[error("could not reach the server: {0}")]
    Network(String),

    /// The backend answered with a non-2xx status
    #[error("server rejected the request ({status}): {}", detail.as_deref().unwrap_or("no detail"))]
    Server { status: u16, detail: Option<String> },

    /// A 2xx response whose body did not match the expected shape
    #[error("unexpected response from the server: {0}")]
    Decode(String),
}

impl ApiError {
    /// Text shown to the operator.
    ///
    /// Server-supplied detail wins; otherwise `fallback` for rejected
    /// requests and a generic message for transport or decoding problems.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Server {
                detail: Some(detail),
                ..
            } => detail.clone(),
            Self::Server { detail: None, .. } => fallback.to_string(),
            Self::Network(_) => CONNECTION_ERROR.to_string(),
            Self::Decode(_) => "Unexpected response from the server.".to_string(),
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Self::Decode(e.to_string())
        } else {
            Self::Network(e.to_string())
        }
    }
}

/// Generic text for transport failures
pub const CONNECTION_ERROR: &str = "Could not connect to the server.";

/// Local validation failure; blocks the request entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Email and password are required.")]
    MissingCredentials,

    #[error("Company name, email and password are required.")]
    MissingRegistrationFields,

    #[error("Password must be at least {min} characters.")]
    PasswordTooShort { min: usize },

    #[error("Select a file first.")]
    NoFileSelected,

    #[error("Invalid employee ID.")]
    InvalidEmployeeId,

    #[error("All fields are required.")]
    MissingEmployeeFields,
}
