use anyhow::{Result, anyhow};
use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use hmac::{Hmac, Mac};
use sha2::Sha256;

use folio_types::manifest::{ACCOUNT_ASSOCIATION_HEADER, AccountAssociation, AssociationPayload};

type HmacSha256 = Hmac<Sha256>;

const SIGNATURE_PREFIX: &str = "0x";

/// Encode `{url, timestamp}` as base64 JSON. Pure given `now`.
pub fn build_payload(url: &str, now: i64) -> Result<String> {
    let payload = AssociationPayload {
        url: url.to_string(),
        timestamp: now,
    };
    let json = serde_json::to_vec(&payload)?;
    Ok(BASE64.encode(json))
}

pub fn decode_payload(encoded: &str) -> Result<AssociationPayload> {
    let bytes = BASE64.decode(encoded)?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// `"0x"` followed by the hex HMAC-SHA256 of the encoded payload.
pub fn sign(payload: &str, secret: &str) -> Result<String> {
    let mut mac = new_mac(secret)?;
    mac.update(payload.as_bytes());
    Ok(format!("{}{}", SIGNATURE_PREFIX, hex::encode(mac.finalize().into_bytes())))
}

/// Check a signature produced by `sign`. Comparison is constant-time.
pub fn verify(payload: &str, signature: &str, secret: &str) -> bool {
    let Some(digest) = signature.strip_prefix(SIGNATURE_PREFIX) else {
        return false;
    };
    let Ok(expected) = hex::decode(digest) else {
        return false;
    };
    let Ok(mut mac) = new_mac(secret) else {
        return false;
    };
    mac.update(payload.as_bytes());
    mac.verify_slice(&expected).is_ok()
}

/// Build the full association block for `url` at time `now`.
pub fn generate(url: &str, secret: &str, now: i64) -> Result<AccountAssociation> {
    let payload = build_payload(url, now)?;
    let signature = sign(&payload, secret)?;

    Ok(AccountAssociation {
        header: ACCOUNT_ASSOCIATION_HEADER.to_string(),
        payload,
        signature,
    })
}

fn new_mac(secret: &str) -> Result<HmacSha256> {
    HmacSha256::new_from_slice(secret.as_bytes()).map_err(|e| anyhow!("Invalid HMAC key: {}", e))
}
