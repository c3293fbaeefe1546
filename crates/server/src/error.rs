use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use depot_service::DocumentError;

/// Errors surfaced through the HTTP API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request was malformed (missing or unreadable upload field).
    #[error("malformed request: {0}")]
    Malformed(String),

    /// The requested path names no document.
    ///
    /// Used when the id segment is not even a well-formed UUID: such an id
    /// can never have been issued, so it is indistinguishable from an
    /// unknown one.
    #[error("document not found")]
    NotFound,

    /// A document service error.
    #[error(transparent)]
    Document(#[from] DocumentError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::Malformed(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            Self::NotFound | Self::Document(DocumentError::NotFound(_)) => {
                (StatusCode::NOT_FOUND, "document not found".to_owned())
            }
            // Storage failures get a deliberately generic client message;
            // the detail is logged server-side only.
            Self::Document(e) => {
                tracing::error!(error = %e, "storage failure while handling request");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal storage error".to_owned(),
                )
            }
        };

        (status, axum::Json(serde_json::json!({ "error": message }))).into_response()
    }
}
