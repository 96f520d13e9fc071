//! The uniform response envelope.
//!
//! Every non-204 response body is a `ServiceResponse`:
//! `{ success, message, responseObject, statusCode }`. Services return it
//! instead of raising, and handlers hand it straight to axum.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::validation::ValidationError;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceResponse<T> {
    pub success: bool,
    pub message: String,
    pub response_object: Option<T>,
    #[serde(with = "status_code")]
    pub status_code: StatusCode,
}

impl<T> ServiceResponse<T> {
    pub fn success(message: impl Into<String>, payload: Option<T>, status_code: StatusCode) -> Self {
        Self {
            success: true,
            message: message.into(),
            response_object: payload,
            status_code,
        }
    }

    pub fn failure(message: impl Into<String>, payload: Option<T>, status_code: StatusCode) -> Self {
        Self {
            success: false,
            message: message.into(),
            response_object: payload,
            status_code,
        }
    }
}

impl<T: Serialize> IntoResponse for ServiceResponse<T> {
    fn into_response(self) -> Response {
        if self.status_code == StatusCode::NO_CONTENT {
            return StatusCode::NO_CONTENT.into_response();
        }
        (self.status_code, Json(self)).into_response()
    }
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        ServiceResponse::<()>::failure(self.message(), None, StatusCode::BAD_REQUEST).into_response()
    }
}

/// Serializes `StatusCode` as its numeric value.
mod status_code {
    use axum::http::StatusCode;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(status: &StatusCode, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u16(status.as_u16())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<StatusCode, D::Error> {
        let code = u16::deserialize(deserializer)?;
        StatusCode::from_u16(code).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use http_body_util::BodyExt;

    use super::*;

    #[test]
    fn envelope_serializes_camel_case_with_numeric_status() {
        let envelope = ServiceResponse::success("ok", Some(vec![1, 2]), StatusCode::OK);
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "ok");
        assert_eq!(json["responseObject"], serde_json::json!([1, 2]));
        assert_eq!(json["statusCode"], 200);
    }

    #[test]
    fn failure_serializes_null_payload() {
        let envelope = ServiceResponse::<()>::failure("gone", None, StatusCode::NOT_FOUND);
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["success"], false);
        assert!(json["responseObject"].is_null());
        assert_eq!(json["statusCode"], 404);
    }

    #[test]
    fn envelope_rejects_out_of_range_status() {
        let raw = r#"{"success":true,"message":"m","responseObject":null,"statusCode":42}"#;
        assert!(serde_json::from_str::<ServiceResponse<()>>(raw).is_err());
    }

    #[tokio::test]
    async fn no_content_drops_the_body() {
        let envelope = ServiceResponse::<()>::success("deleted", None, StatusCode::NO_CONTENT);
        let response = envelope.into_response();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn validation_error_renders_bad_request_envelope() {
        let err = ValidationError::body("boom");
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let envelope: ServiceResponse<()> = serde_json::from_slice(&body).unwrap();
        assert!(!envelope.success);
        assert_eq!(envelope.message, "Invalid input: boom");
        assert_eq!(envelope.status_code, StatusCode::BAD_REQUEST);
    }
}
