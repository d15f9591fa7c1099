use serde::{Deserialize, Serialize};

// -- Inbound interaction --

/// Body the host posts to the webhook. Only the button index is consulted.
#[derive(Debug, Deserialize)]
pub struct UntrustedData {
    #[serde(rename = "buttonIndex", default = "default_button_index")]
    pub button_index: i64,
}

/// The host omits `buttonIndex` for the primary button.
fn default_button_index() -> i64 {
    1
}

// -- Outbound frame --

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonAction {
    Link,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrameButton {
    pub label: String,
    pub action: ButtonAction,
    pub target: String,
}

impl FrameButton {
    pub fn link(label: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            action: ButtonAction::Link,
            target: target.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrameResponse {
    #[serde(rename = "type")]
    pub kind: String,
    pub image: String,
    pub buttons: Vec<FrameButton>,
}

impl FrameResponse {
    pub fn new(image: impl Into<String>, buttons: Vec<FrameButton>) -> Self {
        Self {
            kind: "frame".to_string(),
            image: image.into(),
            buttons,
        }
    }
}
