//! HMAC-SHA256 signed bearer tokens (JWT-compatible encoding).

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

/// Payload carried inside a bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Issued-at, seconds since the epoch.
    pub iat: i64,
    /// Expiry, seconds since the epoch.
    pub exp: i64,
}

const HEADER: &str = r#"{"alg":"HS256","typ":"JWT"}"#;

pub(crate) fn sign(secret: &[u8], claims: &TokenClaims) -> Result<String, serde_json::Error> {
    let header = URL_SAFE_NO_PAD.encode(HEADER);
    let payload = URL_SAFE_NO_PAD.encode(serde_json::to_vec(claims)?);
    let signature = URL_SAFE_NO_PAD.encode(mac_bytes(secret, &header, &payload));
    Ok(format!("{header}.{payload}.{signature}"))
}

/// Decode and verify a token: signature first (constant time), then
/// expiry against `now` (seconds since the epoch).
pub(crate) fn verify(secret: &[u8], token: &str, now: i64) -> Result<TokenClaims, &'static str> {
    let mut parts = token.split('.');
    let (header, payload, signature) = match (parts.next(), parts.next(), parts.next(), parts.next())
    {
        (Some(h), Some(p), Some(s), None) => (h, p, s),
        _ => return Err("malformed token"),
    };

    let expected = mac_bytes(secret, header, payload);
    let provided = URL_SAFE_NO_PAD.decode(signature).map_err(|_| "malformed signature")?;
    let matches: bool = expected.as_slice().ct_eq(&provided).into();
    if !matches {
        return Err("signature mismatch");
    }

    let payload_bytes = URL_SAFE_NO_PAD.decode(payload).map_err(|_| "malformed payload")?;
    let claims: TokenClaims =
        serde_json::from_slice(&payload_bytes).map_err(|_| "malformed payload")?;
    if claims.exp <= now {
        return Err("token expired");
    }
    Ok(claims)
}

fn mac_bytes(secret: &[u8], header: &str, payload: &str) -> [u8; 32] {
    let mut mac = HmacSha256::new_from_slice(secret).expect("HMAC accepts any key length");
    mac.update(header.as_bytes());
    mac.update(b".");
    mac.update(payload.as_bytes());
    mac.finalize().into_bytes().into()
}
