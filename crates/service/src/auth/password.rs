//! Salted, iterated password hashing.
//!
//! PBKDF2-HMAC-SHA256 with a single 32-byte output block, encoded as a
//! PHC-style string carrying the iteration count and salt. Verification
//! compares digests in constant time.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use hmac::{Hmac, Mac};
use rand::RngCore;
use sha2::Sha256;
use subtle::ConstantTimeEq;

use persona_chat_core::PASSWORD_HASH_ITERATIONS;

type HmacSha256 = Hmac<Sha256>;

const SALT_LEN: usize = 16;
const SCHEME: &str = "pbkdf2-sha256";

/// Hash a password with a fresh random salt.
pub(crate) fn hash_password(password: &str) -> String {
    let mut salt = [0u8; SALT_LEN];
    rand::rngs::OsRng.fill_bytes(&mut salt);
    let digest = derive(password.as_bytes(), &salt, PASSWORD_HASH_ITERATIONS);
    format!(
        "${SCHEME}$i={PASSWORD_HASH_ITERATIONS}${}${}",
        URL_SAFE_NO_PAD.encode(salt),
        URL_SAFE_NO_PAD.encode(digest)
    )
}

/// Check a password against an encoded hash. Malformed hashes verify
/// as `false`, never as an error — login must not leak storage details.
pub(crate) fn verify_password(password: &str, encoded: &str) -> bool {
    let Some((iterations, salt, expected)) = decode(encoded) else {
        return false;
    };
    let digest = derive(password.as_bytes(), &salt, iterations);
    digest.as_slice().ct_eq(&expected).into()
}

fn decode(encoded: &str) -> Option<(u32, Vec<u8>, Vec<u8>)> {
    let mut parts = encoded.split('$');
    if !parts.next()?.is_empty() || parts.next()? != SCHEME {
        return None;
    }
    let iterations = parts.next()?.strip_prefix("i=")?.parse().ok()?;
    let salt = URL_SAFE_NO_PAD.decode(parts.next()?).ok()?;
    let digest = URL_SAFE_NO_PAD.decode(parts.next()?).ok()?;
    if digest.len() != 32 || parts.next().is_some() {
        return None;
    }
    Some((iterations, salt, digest))
}

/// PBKDF2 F-function for one output block.
fn derive(password: &[u8], salt: &[u8], iterations: u32) -> [u8; 32] {
    let mut mac = HmacSha256::new_from_slice(password).expect("HMAC accepts any key length");
    mac.update(salt);
    mac.update(&1u32.to_be_bytes());
    let mut u: [u8; 32] = mac.finalize().into_bytes().into();
    let mut out = u;
    for _ in 1..iterations {
        let mut mac = HmacSha256::new_from_slice(password).expect("HMAC accepts any key length");
        mac.update(&u);
        u = mac.finalize().into_bytes().into();
        for (o, b) in out.iter_mut().zip(u.iter()) {
            *o ^= b;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let encoded = hash_password("hunter2!");
        assert!(verify_password("hunter2!", &encoded));
    }

    #[test]
    fn test_wrong_password_rejected() {
        let encoded = hash_password("hunter2!");
        assert!(!verify_password("hunter3!", &encoded));
    }

    #[test]
    fn test_salts_differ_between_hashes() {
        let a = hash_password("same password");
        let b = hash_password("same password");
        assert_ne!(a, b);
        assert!(verify_password("same password", &a));
        assert!(verify_password("same password", &b));
    }

    #[test]
    fn test_malformed_hash_verifies_false() {
        assert!(!verify_password("anything", "not-a-hash"));
        assert!(!verify_password("anything", "$pbkdf2-sha256$i=10$short"));
        assert!(!verify_password("anything", ""));
    }
}
