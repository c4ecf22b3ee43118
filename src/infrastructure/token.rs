//! Bearer token issuance and validation.
//!
//! Tokens are HMAC-signed (HS256) JWTs embedding the user's email as the
//! subject plus issued-at and expiry timestamps. Validation returns a typed
//! failure instead of bubbling an error into the caller's control flow; the
//! authentication gate decides how to react to each failure kind.
//!
//! There is no revocation list. A token is invalidated only by its expiry,
//! which is a fixed duration configured at startup.

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Claims embedded in every issued token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user's email.
    pub sub: String,
    /// Expiry as a Unix timestamp.
    pub exp: i64,
    /// Issued-at as a Unix timestamp.
    pub iat: i64,
}

/// Reasons a token failed validation.
///
/// The kinds are distinguished so the gate can log them separately; all of
/// them simply fail to establish an identity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// The token's expiry timestamp is in the past.
    #[error("token expired")]
    Expired,
    /// The signature does not match the configured secret.
    #[error("token signature invalid")]
    InvalidSignature,
    /// The token is not a structurally valid JWT.
    #[error("token malformed")]
    Malformed,
    /// Signing failed; only possible with a pathological key setup.
    #[error("token could not be issued")]
    Issuance,
}

/// Issues and validates signed, expiring bearer tokens.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    lifetime: Duration,
    masked_secret: String,
}

impl TokenService {
    /// Creates a service signing with `secret` and issuing tokens valid for
    /// `lifetime_secs` seconds.
    #[must_use]
    pub fn new(secret: &str, lifetime_secs: u64) -> Self {
        let prefix: String = secret.chars().take(8).collect();
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            lifetime: Duration::seconds(i64::try_from(lifetime_secs).unwrap_or(i64::MAX)),
            masked_secret: format!("{prefix}******"),
        }
    }

    /// Issues a token for `subject`, expiring after the configured lifetime.
    ///
    /// # Errors
    ///
    /// Returns `TokenError::Issuance` if signing fails.
    pub fn issue(&self, subject: &str) -> Result<String, TokenError> {
        let now = Utc::now();
        let claims = Claims {
            sub: subject.to_string(),
            exp: (now + self.lifetime).timestamp(),
            iat: now.timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(|_| TokenError::Issuance)
    }

    /// Verifies signature and expiry, returning the embedded subject.
    ///
    /// # Errors
    ///
    /// Returns the specific [`TokenError`] kind on failure; never panics or
    /// logs the secret.
    pub fn validate(&self, token: &str) -> Result<String, TokenError> {
        decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map(|data| data.claims.sub)
            .map_err(|error| match error.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                _ => TokenError::Malformed,
            })
    }

    /// Returns the bounded secret prefix used in diagnostics.
    #[must_use]
    pub fn masked_secret(&self) -> &str {
        &self.masked_secret
    }
}

// Keys must never leak through Debug output.
impl std::fmt::Debug for TokenService {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("TokenService")
            .field("secret", &self.masked_secret)
            .field("lifetime", &self.lifetime)
            .finish()
    }
}
