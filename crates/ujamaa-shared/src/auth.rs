//! Password credential hashing and verification.
//!
//! Credentials are stored as `"salt_hex:digest_hex"` where the digest is
//! BLAKE3 over `salt || password`.  The salt is 16 random bytes per
//! credential, so equal passwords never produce equal stored hashes.

use rand::RngCore;

use crate::error::AuthError;

const SALT_LEN: usize = 16;

/// Hash a plaintext password with a fresh random salt.
pub fn hash_password(password: &str) -> String {
    let mut salt = [0u8; SALT_LEN];
    rand::rngs::OsRng.fill_bytes(&mut salt);

    let digest = digest_with_salt(&salt, password);
    format!("{}:{}", hex::encode(salt), hex::encode(digest))
}

/// Verify a plaintext password against a stored `"salt:digest"` hash.
///
/// Returns `Ok(false)` on a clean mismatch and an error only when the
/// stored hash itself is malformed.
pub fn verify_password(password: &str, stored: &str) -> Result<bool, AuthError> {
    let (salt_hex, digest_hex) = stored
        .split_once(':')
        .ok_or(AuthError::MalformedHash)?;

    let salt = hex::decode(salt_hex)?;
    let expected = hex::decode(digest_hex)?;
    if expected.len() != blake3::OUT_LEN {
        return Err(AuthError::MalformedHash);
    }

    let digest = digest_with_salt(&salt, password);
    Ok(digest.as_slice() == expected.as_slice())
}

fn digest_with_salt(salt: &[u8], password: &str) -> [u8; blake3::OUT_LEN] {
    let mut hasher = blake3::Hasher::new();
    hasher.update(salt);
    hasher.update(password.as_bytes());
    *hasher.finalize().as_bytes()
}
