//! Salted password hashing and verification.
//!
//! Hashes are stored as `sha256$<iterations>$<salt>$<digest>` with the salt
//! and digest base64-encoded, so the scheme and cost are recoverable from
//! the stored value alone.
use base64::engine::general_purpose::STANDARD_NO_PAD;
use base64::Engine as _;
use rand::RngCore as _;
use sha2::{Digest as _, Sha256};

/// Scheme tag written into stored hashes.
const SCHEME: &str = "sha256";
/// Iteration count for newly created hashes.
const ITERATIONS: u32 = 100_000;
/// Salt length in bytes.
const SALT_LEN: usize = 16;

/// Hash a password with a fresh random salt.
#[must_use]
pub fn hash_password(password: &str) -> String {
    let mut salt = [0_u8; SALT_LEN];
    rand::thread_rng().fill_bytes(&mut salt);
    let digest = stretch(password.as_bytes(), &salt, ITERATIONS);
    format!(
        "{SCHEME}${ITERATIONS}${}${}",
        STANDARD_NO_PAD.encode(salt),
        STANDARD_NO_PAD.encode(digest)
    )
}

/// Check a password against a stored hash.
///
/// Unparseable hashes verify as false rather than erroring, so a corrupt
/// row behaves like a wrong password.
#[must_use]
pub fn verify_password(stored: &str, password: &str) -> bool {
    let mut parts = stored.split('$');
    let (Some(scheme), Some(iterations), Some(salt), Some(digest), None) = (
        parts.next(),
        parts.next(),
        parts.next(),
        parts.next(),
        parts.next(),
    ) else {
        return false;
    };
    if scheme != SCHEME {
        return false;
    }
    let Ok(iterations) = iterations.parse::<u32>() else {
        return false;
    };
    let (Ok(salt), Ok(expected)) = (
        STANDARD_NO_PAD.decode(salt),
        STANDARD_NO_PAD.decode(digest),
    ) else {
        return false;
    };
    let actual = stretch(password.as_bytes(), &salt, iterations);
    // Fixed-time comparison over the full digest.
    actual.len() == expected.len()
        && actual
            .iter()
            .zip(expected.iter())
            .fold(0_u8, |acc, (lhs, rhs)| acc | (lhs ^ rhs))
            == 0
}

/// Iterated, salted SHA-256.
fn stretch(password: &[u8], salt: &[u8], iterations: u32) -> Vec<u8> {
    let mut digest = {
        let mut hasher = Sha256::new();
        hasher.update(salt);
        hasher.update(password);
        hasher.finalize()
    };
    for _ in 1..iterations {
        let mut hasher = Sha256::new();
        hasher.update(digest);
        digest = hasher.finalize();
    }
    digest.to_vec()
}
