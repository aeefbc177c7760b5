use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

/// Failures of the data access layer.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("not found")]
    NotFound,
    #[error("already exists")]
    Conflict,
    #[error("password hashing failed: {0}")]
    Hash(String),
    #[error(transparent)]
    Db(#[from] sqlx::Error),
}

impl RepoError {
    /// Turns a unique-constraint violation into `Conflict`, leaves everything else as `Db`.
    pub fn from_insert(e: sqlx::Error) -> Self {
        match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => RepoError::Conflict,
            _ => RepoError::Db(e),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            RepoError::NotFound => StatusCode::NOT_FOUND,
            RepoError::Conflict => StatusCode::BAD_REQUEST,
            RepoError::Hash(_) | RepoError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Status plus a plain-text reason. Server-side details are logged, not returned.
    pub fn into_http(self) -> (StatusCode, String) {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "request failed");
            (status, "internal error".to_string())
        } else {
            (status, self.to_string())
        }
    }
}

impl IntoResponse for RepoError {
    fn into_response(self) -> Response {
        self.into_http().into_response()
    }
}
