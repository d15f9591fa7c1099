use serde::{Deserialize, Serialize};

/// Header name the host platform expects alongside the signed payload.
pub const ACCOUNT_ASSOCIATION_HEADER: &str = "X-Farcaster-Account-Association";

/// Key under which the signed block sits in the manifest document.
pub const ACCOUNT_ASSOCIATION_KEY: &str = "accountAssociation";

/// Key of the static metadata object in the manifest document.
pub const FRAME_KEY: &str = "frame";

/// Decoded form of the association payload. Travels base64-encoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssociationPayload {
    pub url: String,
    pub timestamp: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountAssociation {
    pub header: String,
    pub payload: String,
    pub signature: String,
}
