//! REST contract with the external risk API.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both the browser client (`gloo-net`) and the CLI (`reqwest`) speak this
//! contract. Paths, payloads and error decoding live here so the two
//! transports only differ in how bytes move.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::record::Measurements;

pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";
pub const NETWORK_ERROR_MESSAGE: &str = "Network error, unable to connect to server";

pub const LOGIN_PATH: &str = "/auth/login";
pub const SIGNUP_PATH: &str = "/auth/signup";
pub const VERIFY_EMAIL_PATH: &str = "/auth/verify-email";
pub const RESEND_VERIFICATION_PATH: &str = "/auth/resend-verification";
pub const RECORDS_PATH: &str = "/records";
pub const MY_RECORDS_PATH: &str = "/records/my-records";
pub const BULK_RECORDS_PATH: &str = "/records/bulk";

/// Join an API base URL and a path without doubling slashes.
#[must_use]
pub fn endpoint(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

#[must_use]
pub fn record_path(id: &str) -> String {
    format!("{RECORDS_PATH}/{}", encode_component(id))
}

#[must_use]
pub fn verify_email_path(token: &str) -> String {
    format!("{VERIFY_EMAIL_PATH}?token={}", encode_component(token))
}

/// Percent-encode everything outside the RFC 3986 unreserved set.
#[must_use]
pub fn encode_component(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.' | b'~') {
            out.push(char::from(byte));
        } else {
            out.push_str(&format!("%{byte:02X}"));
        }
    }
    out
}

#[must_use]
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

// =============================================================================
// REQUESTS
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub phone_number: String,
    pub date_of_birth: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResendVerificationRequest {
    pub email: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BulkRecordsRequest {
    pub records: Vec<Measurements>,
}

// =============================================================================
// RESPONSES
// =============================================================================

/// Successful login payload.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AuthResponse {
    #[serde(deserialize_with = "deserialize_id")]
    pub user_id: String,
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub username: String,
    pub access_token: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SignupResponse {
    pub email: String,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct VerifyEmailResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct MessageResponse {
    #[serde(default, alias = "detail")]
    pub message: Option<String>,
}

/// Non-2xx body. `detail` is a string for handled errors and a list of
/// `{loc, msg, type}` objects for request validation failures.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Value,
}

impl ErrorBody {
    /// Flatten `detail` into one displayable line.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        match &self.detail {
            Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
            Value::Array(items) => {
                let parts: Vec<&str> = items
                    .iter()
                    .filter_map(|item| item.get("msg").and_then(Value::as_str).or_else(|| item.as_str()))
                    .collect();
                (!parts.is_empty()).then(|| parts.join("; "))
            }
            _ => None,
        }
    }

    /// Decode a raw response body, tolerating non-JSON text.
    #[must_use]
    pub fn from_body(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }
}

// =============================================================================
// SESSION
// =============================================================================

/// Profile of the signed-in user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
}

/// Signed-in user plus the bearer token for subsequent requests.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user: SessionUser,
    pub token: String,
}

impl From<AuthResponse> for Session {
    fn from(resp: AuthResponse) -> Self {
        Self {
            user: SessionUser {
                id: resp.user_id,
                email: resp.email,
                first_name: resp.first_name,
                last_name: resp.last_name,
                username: resp.username,
            },
            token: resp.access_token,
        }
    }
}

impl Session {
    /// Name used in the header greeting.
    #[must_use]
    pub fn display_name(&self) -> &str {
        [&self.user.first_name, &self.user.username, &self.user.email]
            .into_iter()
            .find(|s| !s.trim().is_empty())
            .map_or("", String::as_str)
    }
}

// =============================================================================
// ERRORS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    /// The API's `detail`, when the body carried one.
    #[error("unauthorized: {}", .0.as_deref().unwrap_or("no detail"))]
    Unauthorized(Option<String>),
    #[error("HTTP {status}: {}", .detail.as_deref().unwrap_or("no detail"))]
    Status { status: u16, detail: Option<String> },
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Build from a non-2xx status and raw body text.
    #[must_use]
    pub fn from_status(status: u16, body: &str) -> Self {
        let detail = ErrorBody::from_body(body).message();
        if status == 401 {
            Self::Unauthorized(detail)
        } else {
            Self::Status { status, detail }
        }
    }

    /// True when the bearer token was rejected and the session should end.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized(_))
    }

    /// Message the API sent in its error body, if any.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Unauthorized(detail) | Self::Status { detail, .. } => detail.as_deref(),
            Self::Network(_) | Self::Decode(_) => None,
        }
    }

    /// String shown to the user.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(_) => NETWORK_ERROR_MESSAGE.to_owned(),
            Self::Unauthorized(None) => "Session expired, please sign in again".to_owned(),
            Self::Status { status, detail: None } => format!("Request failed with status {status}"),
            Self::Unauthorized(Some(detail)) | Self::Status { detail: Some(detail), .. } => detail.clone(),
            Self::Decode(_) => "Unexpected response from server".to_owned(),
        }
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error as _;
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        _ => Err(D::Error::custom("expected string or numeric id")),
    }
}
