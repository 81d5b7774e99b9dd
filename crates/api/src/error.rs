use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use vidrental_core::error::CoreError;
use vidrental_db::store::StoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce JSON error bodies. Each kind of
/// failure uses its own body key, which clients of the video routes match on:
///
/// | Failure                   | Status | Key       |
/// |---------------------------|--------|-----------|
/// | non-integer path id       | 400    | `Error`   |
/// | missing payload key(s)    | 400    | `details` |
/// | unstorable payload value  | 400    | `details` |
/// | malformed JSON body       | 400    | `details` |
/// | unknown video             | 404    | `message` |
/// | anything unrecovered      | 500    | `error`   |
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `vidrental_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A persistence failure from the store.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

const INTERNAL_MESSAGE: &str = "An internal error occurred";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, key, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { .. } => (StatusCode::NOT_FOUND, "message", core.to_string()),
                CoreError::InvalidId(_) => (StatusCode::BAD_REQUEST, "Error", core.to_string()),
                CoreError::MissingField(_)
                | CoreError::MissingFields
                | CoreError::InvalidValue { .. } => {
                    (StatusCode::BAD_REQUEST, "details", core.to_string())
                }
            },

            // --- Store errors ---
            AppError::Store(err) => {
                tracing::error!(error = %err, "Store error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "error",
                    INTERNAL_MESSAGE.to_string(),
                )
            }

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "details", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "error",
                    INTERNAL_MESSAGE.to_string(),
                )
            }
        };

        let body = json!({ key: message });

        (status, axum::Json(body)).into_response()
    }
}
