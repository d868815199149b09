use std::collections::HashMap;

use axum::extract::{Path, Query};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use tokio::net::TcpListener;

use super::*;

const TOKEN: &str = "tok-123";

async fn spawn(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}/")
}

fn authorized(headers: &HeaderMap) -> bool {
    headers.get("authorization").and_then(|v| v.to_str().ok()) == Some("Bearer tok-123")
}

fn unauthorized() -> (StatusCode, Json<Value>) {
    (StatusCode::UNAUTHORIZED, Json(json!({ "detail": "Could not validate credentials" })))
}

async fn login(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    if body["password"] == "Secret1!" {
        (
            StatusCode::OK,
            Json(json!({
                "user_id": 7,
                "email": body["email"],
                "first_name": "Ada",
                "access_token": TOKEN,
                "token_type": "bearer"
            })),
        )
    } else {
        (StatusCode::UNAUTHORIZED, Json(json!({ "detail": "Incorrect email or password" })))
    }
}

async fn verify_email(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    let token = params.get("token").cloned().unwrap_or_default();
    Json(json!({ "message": format!("verified {token}"), "email": "ada@example.com" }))
}

async fn my_records(headers: HeaderMap) -> (StatusCode, Json<Value>) {
    if !authorized(&headers) {
        return unauthorized();
    }
    (
        StatusCode::OK,
        Json(json!([{
            "record_id": 1,
            "created_at": "2024-03-10T09:00:00",
            "pregnancies": 2,
            "glucose": 120,
            "blood_pressure": 80,
            "insulin": 0,
            "bmi": 25.5,
            "diabetic_family": 1,
            "age": 35,
            "outcome_xgboost": "Medium Risk",
            "prediction_prob_xgboost": 48.2
        }])),
    )
}

async fn create_record(headers: HeaderMap, Json(mut body): Json<Value>) -> (StatusCode, Json<Value>) {
    if !authorized(&headers) {
        return unauthorized();
    }
    body["record_id"] = json!("9");
    body["outcome_xgboost"] = json!("Low Risk");
    body["prediction_prob_xgboost"] = json!(12.5);
    (StatusCode::OK, Json(body))
}

async fn bulk(headers: HeaderMap, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    if !authorized(&headers) {
        return unauthorized();
    }
    let created = body["records"].as_array().map_or(0, Vec::len);
    (StatusCode::OK, Json(json!({ "created": created })))
}

async fn delete_record(headers: HeaderMap, Path(id): Path<String>) -> (StatusCode, Json<Value>) {
    if !authorized(&headers) {
        return unauthorized();
    }
    if id == "1" {
        (StatusCode::OK, Json(json!({ "message": "Record deleted successfully" })))
    } else {
        (StatusCode::NOT_FOUND, Json(json!({ "detail": "Record not found" })))
    }
}

async fn stub() -> ApiClient {
    let router = Router::new()
        .route("/auth/login", post(login))
        .route("/auth/verify-email", get(verify_email))
        .route("/records", post(create_record))
        .route("/records/my-records", get(my_records))
        .route("/records/bulk", post(bulk))
        .route("/records/{id}", delete(delete_record));
    ApiClient::new(&spawn(router).await).unwrap()
}

fn measurements() -> Measurements {
    Measurements {
        pregnancies: 1,
        glucose: 100,
        blood_pressure: 70,
        insulin: 0,
        bmi: 24.0,
        diabetic_family: false,
        age: 40,
    }
}

#[tokio::test]
async fn login_returns_token_and_profile() {
    let client = stub().await;
    let resp = client.login(" ada@example.com ", "Secret1!").await.unwrap();
    assert_eq!(resp.user_id, "7");
    assert_eq!(resp.email, "ada@example.com");
    assert_eq!(resp.access_token, TOKEN);
}

#[tokio::test]
async fn bad_password_is_unauthorized_with_server_detail() {
    let client = stub().await;
    let err = client.login("ada@example.com", "nope").await.unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(err.user_message(), "Incorrect email or password");
}

#[tokio::test]
async fn verify_email_token_survives_query_encoding() {
    let client = stub().await;
    let resp = client.verify_email("a+b/c").await.unwrap();
    assert_eq!(resp.message, "verified a+b/c");
}

#[tokio::test]
async fn records_are_fetched_with_bearer_token() {
    let client = stub().await;
    let records = client.fetch_records(TOKEN).await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, "1");
    assert!(records[0].measurements.diabetic_family);
    let prediction = records[0].prediction(assessments::ModelKey::Xgboost).unwrap();
    assert_eq!(prediction.level, assessments::RiskLevel::Moderate);
}

#[tokio::test]
async fn stale_token_is_unauthorized() {
    let client = stub().await;
    let err = client.fetch_records("expired").await.unwrap_err();
    assert!(err.is_unauthorized());
}

#[tokio::test]
async fn created_record_comes_back_scored() {
    let client = stub().await;
    let record = client.create_record(TOKEN, &measurements()).await.unwrap();
    assert_eq!(record.id, "9");
    assert_eq!(record.measurements, measurements());
    assert!(record.prediction(assessments::ModelKey::Xgboost).is_some());
}

#[tokio::test]
async fn bulk_upload_wraps_rows() {
    let client = stub().await;
    let result = client.create_records_bulk(TOKEN, vec![measurements(), measurements()]).await.unwrap();
    assert_eq!(result["created"], 2);
}

#[tokio::test]
async fn deleting_unknown_record_keeps_status_and_detail() {
    let client = stub().await;
    let ok = client.delete_record(TOKEN, "1").await.unwrap();
    assert_eq!(ok.message.as_deref(), Some("Record deleted successfully"));

    let err = client.delete_record(TOKEN, "404").await.unwrap_err();
    assert_eq!(err, ApiError::Status { status: 404, detail: Some("Record not found".to_owned()) });
}

#[tokio::test]
async fn unreachable_server_is_a_network_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ApiClient::new(&format!("http://{addr}")).unwrap();
    let err = client.login("ada@example.com", "Secret1!").await.unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
}
