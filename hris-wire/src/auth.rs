//! Login and registration bodies.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/login/`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Body of `POST /api/registro/`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegistrationRequest {
    pub email: String,
    pub password: String,
    /// Company the new account administers
    #[serde(rename = "empresa")]
    pub company_name: String,
}

/// Successful login reply.
///
/// `user_id` doubles as the tenant key for every later request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    #[serde(rename = "usuario_id")]
    pub user_id: i64,

    #[serde(rename = "empresa", default)]
    pub company_name: String,

    /// Signed session credential, sent by backends that issue one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}
