/**
 * Password Hashing
 *
 * Thin wrappers around bcrypt. Hashing embeds a random salt, so two calls
 * with the same plaintext never produce the same digest; verification
 * recomputes with the salt embedded in the digest and compares in constant
 * time.
 *
 * Both operations are deliberately expensive and CPU-bound. Handlers run
 * them under `tokio::task::spawn_blocking` so the async workers are not
 * stalled for the duration of a bcrypt round.
 */

use crate::error::ApiError;

/// bcrypt cost factor (2^10 rounds)
const BCRYPT_COST: u32 = 10;

/// Hash a plaintext password with a fresh random salt
pub fn hash(plaintext: &str) -> Result<String, ApiError> {
    bcrypt::hash(plaintext, BCRYPT_COST).map_err(|e| {
        tracing::error!("Failed to hash password: {:?}", e);
        ApiError::internal("Error creating user")
    })
}

/// Verify a plaintext password against a stored digest
///
/// Returns `false` on mismatch and on a malformed digest; verification
/// never surfaces an error to the caller.
pub fn verify(plaintext: &str, digest: &str) -> bool {
    bcrypt::verify(plaintext, digest).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_password_hashes_differently() {
        let a = hash("secret1").unwrap();
        let b = hash("secret1").unwrap();
        assert_ne!(a, b);
        assert!(verify("secret1", &a));
        assert!(verify("secret1", &b));
    }

    #[test]
    fn test_verify_rejects_wrong_password() {
        let digest = hash("correct horse").unwrap();
        assert!(!verify("battery staple", &digest));
    }

    #[test]
    fn test_verify_rejects_malformed_digest() {
        assert!(!verify("anything", "not-a-bcrypt-digest"));
        assert!(!verify("anything", ""));
    }
}
