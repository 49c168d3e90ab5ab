use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// Client errors serialize to the flat `{"error": "<message>"}` bodies the
/// endpoint contract fixes.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("No file part in the request")]
    MissingFilePart,

    #[error("No file selected")]
    EmptyFilename,

    #[error("Invalid file format. Only PDF allowed.")]
    InvalidFormat,

    #[error("Unable to extract or clean resume text")]
    UnreadableResume,

    #[error("Malformed multipart request: {0}")]
    Multipart(#[from] MultipartError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::MissingFilePart
            | AppError::EmptyFilename
            | AppError::InvalidFormat
            | AppError::UnreadableResume => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::Multipart(e) => (
                StatusCode::BAD_REQUEST,
                format!("Malformed multipart request: {}", e.body_text()),
            ),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({ "error": message }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_keep_contract_messages() {
        assert_eq!(
            AppError::MissingFilePart.to_string(),
            "No file part in the request"
        );
        assert_eq!(AppError::EmptyFilename.to_string(), "No file selected");
        assert_eq!(
            AppError::InvalidFormat.to_string(),
            "Invalid file format. Only PDF allowed."
        );
        assert_eq!(
            AppError::UnreadableResume.to_string(),
            "Unable to extract or clean resume text"
        );
    }

    #[test]
    fn internal_errors_map_to_500() {
        let response = AppError::Internal(anyhow::anyhow!("boom")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
