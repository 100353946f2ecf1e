//! Response types for the allowance engine API.
//!
//! This module defines the error response structures and error handling
//! for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::SpecialAssistItem;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// A 400 response.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::RecordNotFound { entity, id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "RECORD_NOT_FOUND",
                    message,
                    format!("No {} has the identifier '{}'", entity, id),
                ),
            },
            EngineError::DuplicateRecord { .. } => {
                ApiErrorResponse::bad_request(ApiError::new("DUPLICATE_RECORD", message))
            }
            EngineError::InvalidRecord { .. } => {
                ApiErrorResponse::bad_request(ApiError::new("INVALID_RECORD", message))
            }
        }
    }
}

/// A special-assistance item as listed, with `people × months × rate`.
#[derive(Debug, Clone, Serialize)]
pub struct SpecialAssistItemRow {
    /// The stored item.
    #[serde(flatten)]
    pub item: SpecialAssistItem,
    /// The item's total.
    pub total: Decimal,
}

impl From<SpecialAssistItem> for SpecialAssistItemRow {
    fn from(item: SpecialAssistItem) -> Self {
        let total = item.total();
        Self { item, total }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details"));
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let api_error: ApiErrorResponse = EngineError::not_found("employee", "e9").into();
        assert_eq!(api_error.status, StatusCode::NOT_FOUND);
        assert_eq!(api_error.error.code, "RECORD_NOT_FOUND");
        assert_eq!(api_error.error.message, "employee not found: e9");
    }

    #[test]
    fn test_duplicate_and_invalid_map_to_400() {
        let duplicate: ApiErrorResponse = EngineError::DuplicateRecord {
            entity: "holiday".to_string(),
            id: "h1".to_string(),
        }
        .into();
        assert_eq!(duplicate.status, StatusCode::BAD_REQUEST);
        assert_eq!(duplicate.error.code, "DUPLICATE_RECORD");

        let invalid: ApiErrorResponse = EngineError::invalid("employee", "name", "empty").into();
        assert_eq!(invalid.status, StatusCode::BAD_REQUEST);
        assert_eq!(invalid.error.code, "INVALID_RECORD");
    }

    #[test]
    fn test_config_errors_map_to_500() {
        let api_error: ApiErrorResponse = EngineError::ConfigNotFound {
            path: "rates.yaml".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "CONFIG_ERROR");
    }

    #[test]
    fn test_special_assist_row_flattens_item_and_total() {
        let item: SpecialAssistItem = serde_json::from_str(
            r#"{"id": "s1", "year": 2568, "people": 2, "months": 3, "rate": "500"}"#,
        )
        .unwrap();
        let json = serde_json::to_value(SpecialAssistItemRow::from(item)).unwrap();
        assert_eq!(json["id"], "s1");
        assert_eq!(json["months"], 3);
        assert_eq!(json["total"], "3000");
    }
}
