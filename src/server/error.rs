//! HTTP error responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::roster::RosterError;

/// Errors a handler can return. Rendered as `{"detail": "..."}`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A roster operation was rejected.
    #[error(transparent)]
    Roster(#[from] RosterError),

    /// Query string or path could not be decoded into the handler's input.
    #[error("{0}")]
    InvalidRequest(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Roster(RosterError::NotFound { .. }) => StatusCode::NOT_FOUND,
            ApiError::Roster(RosterError::AlreadyEnrolled { .. })
            | ApiError::Roster(RosterError::NotEnrolled { .. }) => StatusCode::BAD_REQUEST,
            ApiError::Roster(RosterError::Internal(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::InvalidRequest(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    fn detail(&self) -> String {
        match self {
            ApiError::Roster(RosterError::Internal(_)) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            _ if status.is_server_error() => tracing::error!("Request failed: {}", self),
            ApiError::Roster(err) => tracing::warn!(
                activity = err.activity().unwrap_or_default(),
                "Request rejected ({}): {}",
                status.as_u16(),
                err
            ),
            ApiError::InvalidRequest(reason) => {
                tracing::warn!("Invalid request ({}): {}", status.as_u16(), reason)
            }
        }
        (status, Json(serde_json::json!({ "detail": self.detail() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn render(err: ApiError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), 1024)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_roster_errors_map_to_status_and_detail() {
        let (status, json) = render(
            RosterError::NotFound {
                activity: "Fencing".into(),
            }
            .into(),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["detail"], "Activity not found");

        let (status, json) = render(
            RosterError::AlreadyEnrolled {
                activity: "Chess Club".into(),
                participant: "a@mergington.edu".into(),
            }
            .into(),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["detail"], "Student already signed up for this activity");

        let (status, json) = render(
            RosterError::NotEnrolled {
                activity: "Chess Club".into(),
                participant: "a@mergington.edu".into(),
            }
            .into(),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["detail"], "Student not registered for this activity");
    }

    #[tokio::test]
    async fn test_internal_error_hides_cause() {
        let (status, json) = render(RosterError::Internal("lock state corrupt".into()).into()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["detail"], "Internal server error");
    }

    #[tokio::test]
    async fn test_invalid_request_is_unprocessable() {
        let (status, json) =
            render(ApiError::InvalidRequest("missing field `email`".into())).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json["detail"], "missing field `email`");
    }
}
