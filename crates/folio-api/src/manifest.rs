use std::io::ErrorKind;

use axum::{Json, extract::State};
use serde_json::{Map, Value};
use tracing::{error, warn};

use folio_types::manifest::{ACCOUNT_ASSOCIATION_KEY, AccountAssociation, FRAME_KEY};

use crate::association::fresh_association;
use crate::error::AppError;
use crate::state::AppState;

/// Merge a signed association into the raw manifest document.
///
/// The document is kept as-is apart from `accountAssociation`, which is
/// always replaced. It must be a JSON object with a `frame` object.
pub fn attach_association(
    raw: &[u8],
    association: &AccountAssociation,
) -> anyhow::Result<Map<String, Value>> {
    let mut document: Map<String, Value> = serde_json::from_slice(raw)?;

    if !document.get(FRAME_KEY).is_some_and(Value::is_object) {
        anyhow::bail!("manifest document has no `{}` object", FRAME_KEY);
    }

    document.insert(ACCOUNT_ASSOCIATION_KEY.to_string(), serde_json::to_value(association)?);
    Ok(document)
}

/// GET /.well-known/farcaster.json
///
/// Static metadata comes from the manifest document on disk so it can be
/// edited without a rebuild. The account association is always regenerated.
pub async fn get_manifest(
    State(state): State<AppState>,
) -> Result<Json<Map<String, Value>>, AppError> {
    let raw = match tokio::fs::read(&state.manifest_path).await {
        Ok(raw) => raw,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!("Manifest file missing at {}", state.manifest_path.display());
            return Err(AppError::ManifestNotFound);
        }
        Err(e) => {
            error!("Manifest read error ({}): {}", state.manifest_path.display(), e);
            return Err(AppError::ManifestGeneration);
        }
    };

    let association = fresh_association(&state).map_err(|e| {
        error!("Manifest error: {}", e);
        AppError::ManifestGeneration
    })?;

    let document = attach_association(&raw, &association).map_err(|e| {
        error!("Manifest parse error: {}", e);
        AppError::ManifestGeneration
    })?;

    Ok(Json(document))
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_types::manifest::ACCOUNT_ASSOCIATION_HEADER;

    fn association() -> AccountAssociation {
        AccountAssociation {
            header: ACCOUNT_ASSOCIATION_HEADER.to_string(),
            payload: "cGF5bG9hZA==".to_string(),
            signature: "0xab".to_string(),
        }
    }

    #[test]
    fn stale_association_is_replaced() {
        let raw = br#"{"frame":{"name":"portfolio"},"accountAssociation":{"payload":"stale"}}"#;
        let doc = attach_association(raw, &association()).unwrap();

        assert_eq!(doc["accountAssociation"]["payload"], "cGF5bG9hZA==");
        assert_eq!(doc["accountAssociation"]["signature"], "0xab");
        assert_eq!(doc["accountAssociation"]["header"], ACCOUNT_ASSOCIATION_HEADER);
    }

    #[test]
    fn unknown_keys_are_kept() {
        let raw = br#"{"frame":{"name":"portfolio","tags":["rust"]},"baseBuilder":{"allowedAddresses":[]}}"#;
        let doc = attach_association(raw, &association()).unwrap();

        assert_eq!(doc["frame"]["tags"][0], "rust");
        assert!(doc["baseBuilder"].is_object());
    }

    #[test]
    fn frame_must_be_an_object() {
        assert!(attach_association(br#"{"name":"portfolio"}"#, &association()).is_err());
        assert!(attach_association(br#"{"frame":"portfolio"}"#, &association()).is_err());
        assert!(attach_association(b"[1, 2]", &association()).is_err());
        assert!(attach_association(b"{ broken", &association()).is_err());
    }
}
