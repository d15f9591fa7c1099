use axum::{
    Json, Router,
    routing::{get, post},
};
use serde_json::{Value, json};
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::state::AppState;
use crate::{association, contact, manifest, pages, webhook};

/// Assemble every route the site serves.
pub fn router(state: AppState) -> Router {
    // The host asks for three differently named images; all are the same file.
    let image = ServeFile::new(&state.image_path);

    Router::new()
        .route("/", get(pages::home))
        .route("/projects", get(pages::projects))
        .route("/contact", get(pages::contact_form).post(contact::submit_contact))
        .route("/test", get(status))
        .route("/api/account-association", get(association::account_association))
        .route("/.well-known/farcaster.json", get(manifest::get_manifest))
        .route("/api/webhook", post(webhook::handle_webhook))
        .route_service("/icon.png", image.clone())
        .route_service("/image.png", image.clone())
        .route_service("/splash.png", image)
        .nest_service("/static", ServeDir::new(&state.static_dir))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /test
pub async fn status() -> Json<Value> {
    Json(json!({ "status": "ok", "message": "Folio app is working" }))
}
