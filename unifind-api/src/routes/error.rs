use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::domain::ValidationError;

/// Error payload of a failed request: every problem found, not just the
/// first. `error_values` echoes the offending input keyed by parameter.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    #[serde(skip)]
    status: StatusCode,
    errors: Vec<ErrorEntry>,
}

#[derive(Debug, Serialize)]
struct ErrorEntry {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_values: Option<BTreeMap<String, String>>,
}

impl ErrorResponse {
    pub fn bad_request(errors: Vec<ValidationError>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            errors: errors
                .into_iter()
                .map(|error| ErrorEntry {
                    error: error.to_string(),
                    error_values: Some(error.error_values()),
                })
                .collect(),
        }
    }

    /// Downstream and unexpected failures all surface as the same opaque
    /// entry; details stay in the logs.
    pub fn internal() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            errors: vec![ErrorEntry {
                error: "internal server error".to_string(),
                error_values: None,
            }],
        }
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        let body = Json(&self);
        (self.status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn validation_errors_serialize_with_their_values() {
        let response = ErrorResponse::bad_request(vec![
            ValidationError::EmptySearchTerm,
            ValidationError::NegativeLimit {
                limit: "-5".to_string(),
            },
        ]);

        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "errors": [
                    {"error": "empty search term", "error_values": {"q": ""}},
                    {
                        "error": "limit cannot be a negative value",
                        "error_values": {"limit": "-5"}
                    },
                ]
            })
        );
    }

    #[test]
    fn internal_error_is_a_single_generic_entry() {
        let response = ErrorResponse::internal();
        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"errors": [{"error": "internal server error"}]})
        );
    }
}
