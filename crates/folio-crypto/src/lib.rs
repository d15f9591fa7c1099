/// Folio Crypto Library
///
/// Account association for the mini-app host: a base64 payload naming the
/// deployment URL and a timestamp, signed with HMAC-SHA256 under a shared
/// secret. A fresh association is generated for every request; the timestamp
/// is the host's freshness proof, so results must never be cached.

pub mod association;
