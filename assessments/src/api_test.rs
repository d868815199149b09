use super::*;
use serde_json::json;

#[test]
fn endpoint_trims_trailing_slash() {
    assert_eq!(endpoint("http://api.test/", LOGIN_PATH), "http://api.test/auth/login");
    assert_eq!(endpoint("http://api.test", MY_RECORDS_PATH), "http://api.test/records/my-records");
}

#[test]
fn record_path_encodes_id() {
    assert_eq!(record_path("42"), "/records/42");
    assert_eq!(record_path("a/b c"), "/records/a%2Fb%20c");
}

#[test]
fn verify_email_path_encodes_token() {
    assert_eq!(verify_email_path("abc+/="), "/auth/verify-email?token=abc%2B%2F%3D");
}

#[test]
fn auth_response_maps_into_session() {
    let resp: AuthResponse = serde_json::from_value(json!({
        "user_id": "u-1",
        "email": "ada@example.com",
        "first_name": "Ada",
        "last_name": "Lovelace",
        "username": "ada",
        "access_token": "tok",
        "token_type": "bearer"
    }))
    .unwrap();
    let session = Session::from(resp);
    assert_eq!(session.token, "tok");
    assert_eq!(session.user.first_name, "Ada");
    assert_eq!(session.display_name(), "Ada");
}

#[test]
fn auth_response_accepts_numeric_user_id() {
    let resp: AuthResponse = serde_json::from_value(json!({
        "user_id": 7, "email": "a@b.co", "access_token": "t"
    }))
    .unwrap();
    assert_eq!(resp.user_id, "7");
    assert_eq!(Session::from(resp).display_name(), "a@b.co");
}

#[test]
fn error_body_string_detail() {
    let body = ErrorBody::from_body(r#"{"detail":"Invalid credentials"}"#);
    assert_eq!(body.message().as_deref(), Some("Invalid credentials"));
}

#[test]
fn error_body_validation_list_detail() {
    let body = ErrorBody::from_body(
        r#"{"detail":[{"loc":["body","email"],"msg":"value is not a valid email address","type":"value_error"},{"msg":"field required"}]}"#,
    );
    assert_eq!(body.message().as_deref(), Some("value is not a valid email address; field required"));
}

#[test]
fn error_body_tolerates_plain_text() {
    assert_eq!(ErrorBody::from_body("Internal Server Error").message(), None);
}

#[test]
fn unauthorized_status_maps_to_unauthorized_with_detail() {
    let err = ApiError::from_status(401, r#"{"detail":"Incorrect email or password"}"#);
    assert!(err.is_unauthorized());
    assert_eq!(err.user_message(), "Incorrect email or password");
}

#[test]
fn other_status_keeps_code_and_marks_missing_detail() {
    let err = ApiError::from_status(500, "");
    assert_eq!(err, ApiError::Status { status: 500, detail: None });
    assert_eq!(err.detail(), None);
    assert_eq!(err.user_message(), "Request failed with status 500");
}

#[test]
fn detail_that_looks_like_a_fallback_is_still_a_detail() {
    let err = ApiError::from_status(400, r#"{"detail":"request failed with status 400"}"#);
    assert_eq!(err.detail(), Some("request failed with status 400"));
}

#[test]
fn unauthorized_without_body_has_no_detail() {
    let err = ApiError::from_status(401, "Unauthorized");
    assert_eq!(err, ApiError::Unauthorized(None));
    assert!(err.is_unauthorized());
}

#[test]
fn network_errors_use_generic_message() {
    assert_eq!(ApiError::Network("dns".to_owned()).user_message(), NETWORK_ERROR_MESSAGE);
}

#[test]
fn bulk_request_wraps_records() {
    let req = BulkRecordsRequest {
        records: vec![Measurements {
            pregnancies: 1,
            glucose: 100,
            blood_pressure: 70,
            insulin: 0,
            bmi: 24.0,
            diabetic_family: false,
            age: 40,
        }],
    };
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(value["records"][0]["diabetic_family"], json!(0));
}

#[test]
fn message_response_accepts_detail_alias() {
    let resp: MessageResponse = serde_json::from_str(r#"{"detail":"Record deleted successfully"}"#).unwrap();
    assert_eq!(resp.message.as_deref(), Some("Record deleted successfully"));
}
