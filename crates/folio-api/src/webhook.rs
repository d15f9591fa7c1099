use std::borrow::Cow;

use axum::{Json, body::Bytes, extract::State};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, error, info};

use folio_types::frame::{FrameButton, FrameResponse, UntrustedData};

use crate::error::AppError;
use crate::state::{AppState, AppStateInner};

/// Longest prefix of a webhook body written to the log.
const LOGGED_BODY_LIMIT: usize = 1024;

/// What the host user pressed, as far as the response is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    /// No interaction, or a button this app does not know about.
    None,
    ViewProjects,
    ContactMe,
}

/// Classify a raw webhook body.
///
/// Bodies that are empty, not JSON, or carry no `untrustedData` are treated as
/// a fresh frame load. A present but malformed `untrustedData` is an error.
pub fn classify(body: &[u8]) -> Result<Interaction, serde_json::Error> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Interaction::None);
    }

    let value: Value = match serde_json::from_slice(body) {
        Ok(value) => value,
        Err(e) => {
            debug!("Webhook body is not JSON: {}", e);
            return Ok(Interaction::None);
        }
    };

    let Some(raw) = value.get("untrustedData") else {
        return Ok(Interaction::None);
    };

    let data = UntrustedData::deserialize(raw)?;
    Ok(match data.button_index {
        1 => Interaction::ViewProjects,
        2 => Interaction::ContactMe,
        _ => Interaction::None,
    })
}

/// Loggable form of a raw body, cut to `LOGGED_BODY_LIMIT` bytes.
pub fn log_preview(body: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(&body[..body.len().min(LOGGED_BODY_LIMIT)])
}

/// Frame returned for a classified interaction.
pub fn respond(interaction: Interaction, state: &AppStateInner) -> FrameResponse {
    let image = state.url("/image.png");
    match interaction {
        // TODO: link button 2 to /contact once the intended target is confirmed.
        Interaction::ViewProjects | Interaction::ContactMe => {
            FrameResponse::new(image, vec![FrameButton::link("Back to Home", &state.base_url)])
        }
        Interaction::None => FrameResponse::new(
            image,
            vec![
                FrameButton::link("View Projects", state.url("/projects")),
                FrameButton::link("Contact Me", state.url("/contact")),
            ],
        ),
    }
}

/// POST /api/webhook
pub async fn handle_webhook(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<FrameResponse>, AppError> {
    info!(payload = %log_preview(&body), bytes = body.len(), "Webhook received");

    let interaction = classify(&body).map_err(|e| {
        error!("Webhook error: {}", e);
        AppError::WebhookProcessing
    })?;

    Ok(Json(respond(interaction, &state)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_garbage_bodies_are_plain_loads() {
        assert_eq!(classify(b"").unwrap(), Interaction::None);
        assert_eq!(classify(b"  \n").unwrap(), Interaction::None);
        assert_eq!(classify(b"{not json").unwrap(), Interaction::None);
        assert_eq!(classify(b"[1, 2]").unwrap(), Interaction::None);
        assert_eq!(classify(b"null").unwrap(), Interaction::None);
        assert_eq!(classify(br#"{"trustedData": {}}"#).unwrap(), Interaction::None);
    }

    #[test]
    fn button_indices() {
        let press = |body: &str| classify(body.as_bytes()).unwrap();
        assert_eq!(press(r#"{"untrustedData":{"buttonIndex":1}}"#), Interaction::ViewProjects);
        assert_eq!(press(r#"{"untrustedData":{"buttonIndex":2}}"#), Interaction::ContactMe);
        assert_eq!(press(r#"{"untrustedData":{"buttonIndex":3}}"#), Interaction::None);
        assert_eq!(press(r#"{"untrustedData":{"buttonIndex":0}}"#), Interaction::None);
        assert_eq!(press(r#"{"untrustedData":{}}"#), Interaction::ViewProjects);
    }

    #[test]
    fn log_preview_is_capped() {
        assert_eq!(log_preview(br#"{"a":1}"#), r#"{"a":1}"#);

        let large = vec![b'x'; LOGGED_BODY_LIMIT * 4];
        assert_eq!(log_preview(&large).len(), LOGGED_BODY_LIMIT);
    }

    #[test]
    fn malformed_untrusted_data_is_an_error() {
        assert!(classify(br#"{"untrustedData":"oops"}"#).is_err());
        assert!(classify(br#"{"untrustedData":null}"#).is_err());
        assert!(classify(br#"{"untrustedData":{"buttonIndex":"1"}}"#).is_err());
    }
}
