// HTTP response utilities for layout endpoints
use crate::domain::error::LayoutError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Status code a layout failure is reported with
pub fn layout_error_status(err: &LayoutError) -> StatusCode {
    match err {
        LayoutError::IndexOutOfRange { .. } => StatusCode::BAD_REQUEST,
        LayoutError::Disposed => StatusCode::SERVICE_UNAVAILABLE,
        LayoutError::DuplicateSection(_)
        | LayoutError::CorruptState { .. }
        | LayoutError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Layout failure rendered as `{ "error": message }`
#[derive(Debug)]
pub struct ApiError(pub LayoutError);

impl From<LayoutError> for ApiError {
    fn from(err: LayoutError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = layout_error_status(&self.0);
        if status.is_server_error() {
            tracing::error!(error = %self.0, "layout request failed");
        } else {
            tracing::debug!(error = %self.0, "layout request rejected");
        }

        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_is_bad_request() {
        let err = LayoutError::IndexOutOfRange { index: 7, len: 6 };
        assert_eq!(layout_error_status(&err), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_disposed_is_unavailable() {
        assert_eq!(
            layout_error_status(&LayoutError::Disposed),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn test_storage_is_internal_error() {
        let err = LayoutError::Storage(anyhow::anyhow!("disk full"));
        let response = ApiError(err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
