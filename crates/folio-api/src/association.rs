use axum::{Json, extract::State};
use tracing::error;

use folio_types::manifest::AccountAssociation;

use crate::error::AppError;
use crate::state::{AppState, AppStateInner};

/// Sign a new association for this deployment at the current wall-clock time.
pub fn fresh_association(state: &AppStateInner) -> anyhow::Result<AccountAssociation> {
    let now = chrono::Utc::now().timestamp();
    folio_crypto::association::generate(&state.base_url, &state.mini_app_secret, now)
}

/// GET /api/account-association
pub async fn account_association(
    State(state): State<AppState>,
) -> Result<Json<AccountAssociation>, AppError> {
    let association = fresh_association(&state).map_err(|e| {
        error!("Account association error: {}", e);
        AppError::AssociationFailed
    })?;

    Ok(Json(association))
}
