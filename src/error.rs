//! Error types for the store and the HTTP layer.
//!
//! [`StoreError`] and [`InitError`] cover startup failures, which are
//! fatal. [`AppError`] is what handlers produce; JSON routes return it
//! directly, HTML routes hand it to [`Templates::respond`] so it renders
//! as a page.
//!
//! [`Templates::respond`]: crate::templates::Templates::respond

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::DbErr;
use serde::Serialize;

/// Failures while bringing the store up.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The connection could not be opened or the schema could not be created.
    #[error("store unavailable: {0}")]
    Unavailable(#[source] DbErr),

    /// The seed transaction failed and was rolled back.
    #[error("seeding failed: {0}")]
    Seed(#[source] DbErr),
}

/// Failures while building the application state.
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("template error: {0}")]
    Templates(#[from] minijinja::Error),
}

/// Request-time errors.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    /// A row references another row that does not exist.
    #[error("Integrity error: {0}")]
    Integrity(String),

    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),
}

/// JSON error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl AppError {
    /// Status, error code and client-visible details. Server-side causes
    /// are logged here and never returned.
    pub(crate) fn parts(&self) -> (StatusCode, &'static str, Option<String>) {
        match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", Some(msg.clone())),
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                (StatusCode::INTERNAL_SERVER_ERROR, "database_error", None)
            }
            AppError::Integrity(msg) => {
                tracing::error!(error = %msg, "Integrity error");
                (StatusCode::INTERNAL_SERVER_ERROR, "integrity_error", None)
            }
            AppError::Template(err) => {
                tracing::error!(error = %err, "Template error");
                (StatusCode::INTERNAL_SERVER_ERROR, "template_error", None)
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = self.parts();

        let body = ErrorResponse {
            error: error.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for JSON handlers
pub type Result<T> = std::result::Result<T, AppError>;
