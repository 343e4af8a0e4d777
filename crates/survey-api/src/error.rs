use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use survey_core::policy::PolicyError;
use survey_storage::error::StorageError;

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Unauthorized,
    Forbidden(String),
    NotFound(String),
    /// Required questions left unanswered; the body carries their ids.
    MissingAnswers(Vec<String>),
    /// A store write returned no result; the message names the operation.
    Persistence(String),
    /// Anything unexpected. The body keeps the underlying detail.
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
    #[serde(rename = "missingQuestions", skip_serializing_if = "Option::is_none")]
    missing_questions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl ErrorBody {
    fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            missing_questions: None,
            error: None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::BadRequest(msg) => {
                tracing::warn!(message = %msg, "request rejected");
                (StatusCode::BAD_REQUEST, ErrorBody::message(msg))
            }
            ApiError::Unauthorized => {
                tracing::warn!("unauthorized request - no user ID found");
                (StatusCode::UNAUTHORIZED, ErrorBody::message("Unauthorized"))
            }
            ApiError::Forbidden(msg) => {
                tracing::warn!(message = %msg, "permission denied");
                (StatusCode::FORBIDDEN, ErrorBody::message(msg))
            }
            ApiError::NotFound(msg) => {
                tracing::warn!(message = %msg, "not found");
                (StatusCode::NOT_FOUND, ErrorBody::message(msg))
            }
            ApiError::MissingAnswers(ids) => {
                tracing::warn!(missing = ?ids, "required questions unanswered");
                (
                    StatusCode::BAD_REQUEST,
                    ErrorBody {
                        message: "Some required questions are not answered".to_string(),
                        missing_questions: Some(ids),
                        error: None,
                    },
                )
            }
            ApiError::Persistence(msg) => {
                tracing::error!(message = %msg, "persistence failure");
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorBody::message(msg))
            }
            ApiError::Internal(detail) => {
                tracing::error!(error = %detail, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        message: "Internal server error".to_string(),
                        missing_questions: None,
                        error: Some(detail),
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<PolicyError> for ApiError {
    fn from(e: PolicyError) -> Self {
        match e {
            PolicyError::MissingFields | PolicyError::SurveyInactive => {
                ApiError::BadRequest(e.to_string())
            }
            PolicyError::SurveyNotFound => ApiError::NotFound(e.to_string()),
            PolicyError::UpdateForbidden
            | PolicyError::ReadForbidden
            | PolicyError::ResultsForbidden => ApiError::Forbidden(e.to_string()),
            PolicyError::MissingAnswers(ids) => ApiError::MissingAnswers(ids),
        }
    }
}

impl From<StorageError> for ApiError {
    fn from(e: StorageError) -> Self {
        ApiError::Internal(e.to_string())
    }
}
