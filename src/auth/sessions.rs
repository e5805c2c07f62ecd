/**
 * Session Tokens
 *
 * Stateless JWT issuance and verification. A token embeds the subject user
 * id, an issued-at instant, and an expiry 24 hours later, signed with the
 * server secret (HS256). Verification is a pure function of the token and
 * the secret; no store is consulted and nothing is persisted.
 *
 * The keys are built once at startup from configuration and carried in
 * application state; there is no ambient secret lookup at call time.
 */

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;
use uuid::Uuid;

/// Token lifetime: 24 hours from issuance
const TOKEN_TTL_SECS: u64 = 24 * 60 * 60;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: user ID
    pub sub: String,
    /// Issued at (Unix timestamp)
    pub iat: u64,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
}

/// Reason a presented token was rejected
///
/// Surfaced to clients as a 401 authentication failure; the distinction
/// only matters for logging.
#[derive(Debug, Error)]
pub enum InvalidTokenError {
    /// Bad signature, malformed structure, or elapsed expiry
    #[error("token rejected: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),
    /// Signature verified but the subject is not a UUID
    #[error("malformed token subject: {0}")]
    Subject(#[from] uuid::Error),
}

/// HMAC signing and verification keys derived from the server secret
#[derive(Clone)]
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenKeys {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Issue a signed token for a user
    ///
    /// The token expires 24 hours after issuance.
    pub fn issue(&self, user_id: Uuid) -> Result<String, jsonwebtoken::errors::Error> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs();

        let claims = Claims {
            sub: user_id.to_string(),
            iat: now,
            exp: now + TOKEN_TTL_SECS,
        };

        encode(&Header::default(), &claims, &self.encoding)
    }

    /// Verify a token and return its subject user id
    ///
    /// Fails if the signature does not match, the structure is malformed,
    /// or the expiry instant has passed.
    pub fn verify(&self, token: &str) -> Result<Uuid, InvalidTokenError> {
        let mut validation = Validation::default();
        validation.leeway = 0;

        let token_data = decode::<Claims>(token, &self.decoding, &validation)?;
        let user_id = Uuid::parse_str(&token_data.claims.sub)?;
        Ok(user_id)
    }
}
