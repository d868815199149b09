//! `reqwest` transport for the risk API contract.
//!
//! Mirrors the browser client call-for-call; paths, payloads and error
//! decoding all come from `assessments::api`.

use std::time::Duration;

use assessments::api::{
    self, BulkRecordsRequest, LoginRequest, MessageResponse, ResendVerificationRequest, SignupRequest,
    SignupResponse, VerifyEmailResponse,
};
use assessments::{ApiError, Assessment, AuthResponse, Measurements};
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::Value;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] if the HTTP client cannot be built.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Ok(Self { http, base_url: base_url.trim_end_matches('/').to_owned() })
    }

    fn request(&self, method: Method, path: &str, token: Option<&str>) -> RequestBuilder {
        let request = self.http.request(method, api::endpoint(&self.base_url, path));
        match token {
            Some(token) => request.header(reqwest::header::AUTHORIZATION, api::bearer(token)),
            None => request,
        }
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status();
        let body = response.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
        if !status.is_success() {
            return Err(ApiError::from_status(status.as_u16(), &body));
        }
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        let payload = LoginRequest { email: email.trim().to_owned(), password: password.to_owned() };
        self.send(self.request(Method::POST, api::LOGIN_PATH, None).json(&payload)).await
    }

    pub async fn signup(&self, payload: &SignupRequest) -> Result<SignupResponse, ApiError> {
        self.send(self.request(Method::POST, api::SIGNUP_PATH, None).json(payload)).await
    }

    pub async fn verify_email(&self, token: &str) -> Result<VerifyEmailResponse, ApiError> {
        self.send(self.request(Method::GET, &api::verify_email_path(token), None)).await
    }

    pub async fn resend_verification(&self, email: &str) -> Result<MessageResponse, ApiError> {
        let payload = ResendVerificationRequest { email: email.to_owned() };
        self.send(self.request(Method::POST, api::RESEND_VERIFICATION_PATH, None).json(&payload))
            .await
    }

    pub async fn fetch_records(&self, token: &str) -> Result<Vec<Assessment>, ApiError> {
        self.send(self.request(Method::GET, api::MY_RECORDS_PATH, Some(token))).await
    }

    pub async fn create_record(&self, token: &str, measurements: &Measurements) -> Result<Assessment, ApiError> {
        self.send(self.request(Method::POST, api::RECORDS_PATH, Some(token)).json(measurements))
            .await
    }

    pub async fn create_records_bulk(&self, token: &str, records: Vec<Measurements>) -> Result<Value, ApiError> {
        let payload = BulkRecordsRequest { records };
        self.send(self.request(Method::POST, api::BULK_RECORDS_PATH, Some(token)).json(&payload))
            .await
    }

    pub async fn update_record(
        &self,
        token: &str,
        id: &str,
        measurements: &Measurements,
    ) -> Result<Assessment, ApiError> {
        self.send(self.request(Method::PUT, &api::record_path(id), Some(token)).json(measurements))
            .await
    }

    pub async fn delete_record(&self, token: &str, id: &str) -> Result<MessageResponse, ApiError> {
        self.send(self.request(Method::DELETE, &api::record_path(id), Some(token))).await
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;
