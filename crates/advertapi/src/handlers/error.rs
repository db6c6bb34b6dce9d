use advertapi_core::storage::{repository_error_to_status_code, RepositoryError};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Handler error type that wraps `anyhow::Error`.
///
/// Repository errors keep their mapped status code; anything else becomes a
/// 500. Server errors are logged in full but answered with the status reason
/// only, so backend details never reach the client.
pub struct AppError(pub anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = if let Some(repo_error) = self.0.downcast_ref::<RepositoryError>() {
            let code = repository_error_to_status_code(repo_error);
            StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        if status_code.is_server_error() {
            tracing::error!(error = %self.0, status = %status_code, "Request failed");
            let reason = status_code.canonical_reason().unwrap_or("Server error");
            return (status_code, reason).into_response();
        }

        tracing::warn!(error = %self.0, status = %status_code, "Request rejected");
        (status_code, self.0.to_string()).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
