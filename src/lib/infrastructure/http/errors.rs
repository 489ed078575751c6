//! API error-handling module

use std::fmt;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::reservations::SubmitReservationError;

use super::state::Environment;

/// Returned for a reservation with missing required fields
pub const MISSING_FIELDS_MESSAGE: &str = "Missing required fields";

/// Returned when a validated reservation could not be sent
pub const SEND_FAILED_MESSAGE: &str = "Failed to send reservation request";

/// Detail shown outside development instead of the internal error
pub const RETRY_LATER_MESSAGE: &str = "Please try again later";

/// An error response
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// The error message
    #[schema(example = "Missing required fields")]
    pub error: String,

    /// Additional detail, present for send failures
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "Please try again later")]
    pub message: Option<String>,
}

/// An error raised in the API
#[derive(Debug)]
pub struct ApiError {
    /// The status code
    pub status: StatusCode,

    /// The error message
    pub message: String,

    /// Additional detail for the client
    pub detail: Option<String>,
}

impl ApiError {
    /// Create a new API error
    pub fn new(status: StatusCode, message: &str) -> Self {
        Self {
            status,
            message: message.to_string(),
            detail: None,
        }
    }

    /// Create a new bad request error
    pub fn new_400(message: &str) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Create new internal server error
    pub fn new_500(message: &str) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    /// Attach a detail message
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Converts a failed submission, showing the internal detail only when
    /// `environment` allows it.
    pub fn from_submission(err: &SubmitReservationError, environment: Environment) -> Self {
        match err {
            SubmitReservationError::Validation(_) => ApiError::new_400(MISSING_FIELDS_MESSAGE),
            SubmitReservationError::Render(_) | SubmitReservationError::Transport(_) => {
                let detail = if environment.discloses_errors() {
                    err.to_string()
                } else {
                    RETRY_LATER_MESSAGE.to_string()
                };

                ApiError::new_500(SEND_FAILED_MESSAGE).with_detail(detail)
            }
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorResponse {
                error: self.message,
                message: self.detail,
            }),
        )
            .into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::new(rejection.status(), &rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use axum::{body::to_bytes, http::StatusCode, response::IntoResponse};
    use testresult::TestResult;

    use crate::domain::{
        communication::mailer::MailerError,
        reservations::{SubmitReservationError, ValidationError},
    };

    use super::*;

    fn send_failure() -> SubmitReservationError {
        SubmitReservationError::Transport(MailerError::SendError("535 bad credentials".to_string()))
    }

    #[tokio::test]
    async fn test_error_response() -> TestResult {
        let error = ApiError::new_400(MISSING_FIELDS_MESSAGE);

        let response = error.into_response();
        let body = to_bytes(response.into_body(), usize::MAX).await?;

        assert_eq!(body, r#"{"error":"Missing required fields"}"#);

        Ok(())
    }

    #[tokio::test]
    async fn test_error_response_with_detail() -> TestResult {
        let error = ApiError::new_500(SEND_FAILED_MESSAGE).with_detail(RETRY_LATER_MESSAGE);

        let response = error.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(response.into_body(), usize::MAX).await?;

        assert_eq!(
            body,
            r#"{"error":"Failed to send reservation request","message":"Please try again later"}"#
        );

        Ok(())
    }

    #[test]
    fn test_validation_error_is_bad_request() {
        let err = SubmitReservationError::Validation(ValidationError::MissingRequiredFields(
            vec!["phone"],
        ));

        let api_error = ApiError::from_submission(&err, Environment::Development);

        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.message, MISSING_FIELDS_MESSAGE);
        assert_eq!(api_error.detail, None);
    }

    #[test]
    fn test_send_failure_detail_in_development() {
        let api_error = ApiError::from_submission(&send_failure(), Environment::Development);

        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.message, SEND_FAILED_MESSAGE);
        assert_eq!(
            api_error.detail.as_deref(),
            Some("failed to send email: 535 bad credentials")
        );
    }

    #[test]
    fn test_send_failure_detail_hidden_in_production() {
        let api_error = ApiError::from_submission(&send_failure(), Environment::Production);

        assert_eq!(api_error.detail.as_deref(), Some(RETRY_LATER_MESSAGE));
    }
}
