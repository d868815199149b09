//! REST calls against the external risk API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is mapped into [`ApiError`] and logged once here. Callers
//! only decide what to show and whether a 401 ends the session.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use assessments::api::{
    self, LoginRequest, MessageResponse, ResendVerificationRequest, SignupRequest, SignupResponse,
    VerifyEmailResponse,
};
use assessments::{ApiError, Assessment, AuthResponse, Measurements};
#[cfg(feature = "hydrate")]
use serde::de::DeserializeOwned;
use serde_json::Value;

#[cfg(any(test, feature = "hydrate"))]
fn describe(method: &str, path: &str) -> String {
    format!("{method} {}", path.split('?').next().unwrap_or(path))
}

#[cfg(not(feature = "hydrate"))]
fn unavailable() -> ApiError {
    ApiError::Network("not available on server".to_owned())
}

#[cfg(feature = "hydrate")]
fn with_token(builder: gloo_net::http::RequestBuilder, token: Option<&str>) -> gloo_net::http::RequestBuilder {
    match token {
        Some(token) => builder.header("Authorization", &api::bearer(token)),
        None => builder,
    }
}

/// Send a prepared request and decode a JSON body.
#[cfg(feature = "hydrate")]
async fn dispatch<T: DeserializeOwned>(
    label: &str,
    request: Result<gloo_net::http::Request, gloo_net::Error>,
) -> Result<T, ApiError> {
    let result = async {
        let request = request.map_err(|e| ApiError::Decode(e.to_string()))?;
        let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::from_status(status, &body));
        }
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }
    .await;
    if let Err(err) = &result {
        log::error!("{label} failed: {err}");
    }
    result
}

#[cfg(feature = "hydrate")]
fn url(path: &str) -> String {
    api::endpoint(&crate::util::config::api_base(), path)
}

/// Exchange credentials for a session via `POST /auth/login`.
///
/// # Errors
///
/// Returns [`ApiError::Unauthorized`] for rejected credentials and
/// [`ApiError::Network`] when the API is unreachable.
pub async fn login(email: &str, password: &str) -> Result<AuthResponse, ApiError> {
    let payload = LoginRequest { email: email.trim().to_owned(), password: password.to_owned() };
    #[cfg(feature = "hydrate")]
    {
        let request = gloo_net::http::Request::post(&url(api::LOGIN_PATH)).json(&payload);
        dispatch(&describe("POST", api::LOGIN_PATH), request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err(unavailable())
    }
}

/// Register a new account via `POST /auth/signup`.
///
/// # Errors
///
/// Returns the API's validation detail on rejection.
pub async fn signup(payload: &SignupRequest) -> Result<SignupResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = gloo_net::http::Request::post(&url(api::SIGNUP_PATH)).json(payload);
        dispatch(&describe("POST", api::SIGNUP_PATH), request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err(unavailable())
    }
}

/// Confirm an email address via `GET /auth/verify-email?token=`.
///
/// # Errors
///
/// Returns the API detail for invalid or expired tokens.
pub async fn verify_email(token: &str) -> Result<VerifyEmailResponse, ApiError> {
    let path = api::verify_email_path(token);
    #[cfg(feature = "hydrate")]
    {
        let request = gloo_net::http::Request::get(&url(&path)).build();
        dispatch(&describe("GET", &path), request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(unavailable())
    }
}

/// Ask the API to send a new verification email.
///
/// # Errors
///
/// Returns the API detail, e.g. for already verified accounts.
pub async fn resend_verification(email: &str) -> Result<MessageResponse, ApiError> {
    let payload = ResendVerificationRequest { email: email.to_owned() };
    #[cfg(feature = "hydrate")]
    {
        let request = gloo_net::http::Request::post(&url(api::RESEND_VERIFICATION_PATH)).json(&payload);
        dispatch(&describe("POST", api::RESEND_VERIFICATION_PATH), request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err(unavailable())
    }
}

/// Fetch every record owned by the session user.
///
/// # Errors
///
/// Returns [`ApiError::Unauthorized`] when the token has expired.
pub async fn fetch_records(token: &str) -> Result<Vec<Assessment>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = with_token(gloo_net::http::Request::get(&url(api::MY_RECORDS_PATH)), Some(token)).build();
        dispatch(&describe("GET", api::MY_RECORDS_PATH), request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(unavailable())
    }
}

/// Submit one set of measurements for scoring.
///
/// # Errors
///
/// Returns the API detail when the record is rejected.
pub async fn create_record(token: &str, measurements: &Measurements) -> Result<Assessment, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request =
            with_token(gloo_net::http::Request::post(&url(api::RECORDS_PATH)), Some(token)).json(measurements);
        dispatch(&describe("POST", api::RECORDS_PATH), request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, measurements);
        Err(unavailable())
    }
}

/// Submit many records in one all-or-nothing request.
///
/// # Errors
///
/// Returns the API detail when any record is rejected.
pub async fn create_records_bulk(token: &str, records: Vec<Measurements>) -> Result<Value, ApiError> {
    let payload = api::BulkRecordsRequest { records };
    #[cfg(feature = "hydrate")]
    {
        let request =
            with_token(gloo_net::http::Request::post(&url(api::BULK_RECORDS_PATH)), Some(token)).json(&payload);
        dispatch(&describe("POST", api::BULK_RECORDS_PATH), request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, payload);
        Err(unavailable())
    }
}

/// Replace the measurements of record `id`; the API re-scores it.
///
/// # Errors
///
/// Returns the API detail, e.g. 404 for unknown ids.
pub async fn update_record(token: &str, id: &str, measurements: &Measurements) -> Result<Assessment, ApiError> {
    let path = api::record_path(id);
    #[cfg(feature = "hydrate")]
    {
        let request = with_token(gloo_net::http::Request::put(&url(&path)), Some(token)).json(measurements);
        dispatch(&describe("PUT", &path), request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, path, measurements);
        Err(unavailable())
    }
}

/// Delete record `id`.
///
/// # Errors
///
/// Returns the API detail, e.g. 404 for unknown ids.
pub async fn delete_record(token: &str, id: &str) -> Result<MessageResponse, ApiError> {
    let path = api::record_path(id);
    #[cfg(feature = "hydrate")]
    {
        let request = with_token(gloo_net::http::Request::delete(&url(&path)), Some(token)).build();
        dispatch(&describe("DELETE", &path), request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, path);
        Err(unavailable())
    }
}
