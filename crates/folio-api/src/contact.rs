use axum::{
    Form,
    extract::{State, rejection::FormRejection},
    http::{StatusCode, header},
    response::IntoResponse,
};
use serde::Deserialize;
use tracing::{debug, error, info};

use crate::error::AppError;
use crate::state::AppState;

/// Raw contact form. Fields are optional here so a missing one can be
/// reported by name instead of as a generic extractor rejection.
#[derive(Debug, Deserialize)]
pub struct ContactForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

fn required(value: Option<String>, field: &'static str) -> Result<String, AppError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(AppError::Validation(format!("Missing required field: {}", field))),
    }
}

/// POST /contact
pub async fn submit_contact(
    State(state): State<AppState>,
    form: Result<Form<ContactForm>, FormRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Form(form) = form.map_err(|rejection| {
        debug!("Contact form rejected: {}", rejection.body_text());
        AppError::Validation("Invalid contact form".to_string())
    })?;

    let name = required(form.name, "name")?;
    let email = required(form.email, "email")?;
    let message = required(form.message, "message")?;

    // Run blocking DB insert off the async runtime
    let db = state.clone();
    let id = tokio::task::spawn_blocking(move || db.db.insert_message(&name, &email, &message))
        .await
        .map_err(|e| {
            error!("spawn_blocking join error: {}", e);
            AppError::Internal
        })?
        .map_err(|e| {
            error!("Failed to store contact message: {}", e);
            AppError::Internal
        })?;

    info!("Stored contact message {}", id);

    Ok((StatusCode::FOUND, [(header::LOCATION, "/")]))
}
