use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Caller-visible failures. Causes are logged where they occur and never
/// echoed to the client.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("Manifest not found")]
    ManifestNotFound,

    #[error("Manifest generation failed")]
    ManifestGeneration,

    #[error("Account association failed")]
    AssociationFailed,

    #[error("Webhook processing failed")]
    WebhookProcessing,

    #[error("Internal server error")]
    Internal,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::ManifestNotFound => StatusCode::NOT_FOUND,
            AppError::ManifestGeneration
            | AppError::AssociationFailed
            | AppError::WebhookProcessing
            | AppError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
