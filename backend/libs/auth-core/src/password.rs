//! Password credential derivation and verification.
//!
//! A credential is the HMAC-SHA-512 of the UTF-8 password bytes, keyed by a
//! fresh 64-byte random salt generated at registration. Verification
//! recomputes the MAC under the stored salt and compares in constant time.

use hmac::{Hmac, Mac};
use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use sha2::Sha512;

type HmacSha512 = Hmac<Sha512>;

/// Salt length in bytes (512 bits, matching the MAC output width).
pub const SALT_BYTES: usize = 64;

/// Stored password credential: the keyed-hash output plus the per-user salt
/// that keyed it. Immutable once persisted; replaced wholesale on password
/// change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    pub hash: Vec<u8>,
    pub salt: Vec<u8>,
}

/// Derive a fresh credential from a plaintext password.
///
/// Every call generates a new random salt, so identical passwords produce
/// unrelated credentials across users. Empty passwords are accepted here;
/// strength policy belongs to the caller.
pub fn derive_credential(password: &str) -> Credential {
    let mut salt = [0u8; SALT_BYTES];
    OsRng.fill_bytes(&mut salt);

    // HMAC-SHA-512 accepts keys of any length, so this cannot fail.
    let mut mac = HmacSha512::new_from_slice(&salt).expect("HMAC accepts any key length");
    mac.update(password.as_bytes());

    Credential {
        hash: mac.finalize().into_bytes().to_vec(),
        salt: salt.to_vec(),
    }
}

/// Verify a plaintext password against a stored credential.
///
/// Recomputes the MAC under `credential.salt` and compares it to
/// `credential.hash` with a constant-time equality check, so execution time
/// does not depend on where the bytes first diverge. Returns `false` on any
/// mismatch, including a hash of the wrong length; never panics.
pub fn verify_credential(password: &str, credential: &Credential) -> bool {
    let Ok(mut mac) = HmacSha512::new_from_slice(&credential.salt) else {
        return false;
    };
    mac.update(password.as_bytes());
    mac.verify_slice(&credential.hash).is_ok()
}
