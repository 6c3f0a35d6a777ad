use crate::calculator::CalculatorError;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Errors returned by the JSON endpoints
#[derive(Debug, Error)]
pub enum ApiError {
    /// The body was refused by the extractor (bad JSON, unknown unit, wrong content type)
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },

    /// The body parsed but describes an invalid scenario
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] CalculatorError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Rejected { status, .. } => *status,
            ApiError::InvalidInput(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_status() {
        let err = ApiError::from(CalculatorError::InvalidMachineCount);
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            err.to_string(),
            "Invalid input: Number of machines must be at least 1"
        );
    }

    #[test]
    fn test_rejected_keeps_status() {
        let err = ApiError::Rejected {
            status: StatusCode::BAD_REQUEST,
            message: "Failed to parse the request body as JSON".to_string(),
        };
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
