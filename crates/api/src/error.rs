use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use photoshare_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce the two client-visible error
/// bodies this API exposes: `{"error": "Invalid user ID"}` (400) and
/// `{"error": "Server error"}` (500).
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `photoshare_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The supplied user identifier could not be honoured, for whatever
    /// reason. The terminal state of [`collapse_to_invalid_user_id`].
    ///
    /// [`collapse_to_invalid_user_id`]: AppError::collapse_to_invalid_user_id
    #[error("Invalid user ID")]
    InvalidUserId,
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Collapse any failure into the client-visible invalid-user-ID error.
    ///
    /// The photo and comment endpoints report every failure, including ones
    /// unrelated to the identifier, as the same 400 response. Identifier
    /// errors pass through silently; anything else is logged first so the
    /// real cause is not lost.
    pub fn collapse_to_invalid_user_id(self, operation: &'static str) -> Self {
        match self {
            Self::InvalidUserId
            | Self::Core(CoreError::NotFound { .. } | CoreError::InvalidId(_)) => {
                Self::InvalidUserId
            }
            other => {
                tracing::error!(error = %other, operation, "Request failed");
                Self::InvalidUserId
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::InvalidUserId => (StatusCode::BAD_REQUEST, "Invalid user ID"),

            AppError::Core(core) => match core {
                CoreError::NotFound { .. } | CoreError::InvalidId(_) => {
                    (StatusCode::BAD_REQUEST, "Invalid user ID")
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (StatusCode::INTERNAL_SERVER_ERROR, "Server error")
                }
            },

            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Server error")
            }
        };

        let body = json!({ "error": message });

        (status, axum::Json(body)).into_response()
    }
}
