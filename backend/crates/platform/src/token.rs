//! Signed Session Tokens
//!
//! Stateless credential asserting `{user_id, role, exp}`, transported in an
//! HTTP-only cookie (or a bearer header). Format:
//! `base64url(json payload) . base64url(hmac-sha256(payload))`.
//!
//! The token carries no session state; revocation before expiry is not
//! supported.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use thiserror::Error;
use uuid::Uuid;

type HmacSha256 = Hmac<Sha256>;

/// Token verification errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("Malformed token")]
    Malformed,

    #[error("Invalid token signature")]
    BadSignature,

    #[error("Token expired")]
    Expired,
}

/// Claims carried by a signed token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject user id
    pub user_id: Uuid,
    /// Role code ("student", "landowner", "admin")
    pub role: String,
    /// Expiry, unix milliseconds
    pub expires_at_ms: i64,
}

impl TokenClaims {
    pub fn new(user_id: Uuid, role: impl Into<String>, ttl: std::time::Duration) -> Self {
        Self {
            user_id,
            role: role.into(),
            expires_at_ms: chrono::Utc::now().timestamp_millis() + ttl.as_millis() as i64,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.expires_at_ms <= chrono::Utc::now().timestamp_millis()
    }
}

/// Signs and verifies session tokens with a process-wide secret
#[derive(Clone)]
pub struct TokenSigner {
    secret: [u8; 32],
}

impl TokenSigner {
    pub fn new(secret: [u8; 32]) -> Self {
        Self { secret }
    }

    /// Create a signer with a random secret (for development; tokens do not
    /// survive restarts)
    pub fn with_random_secret() -> Self {
        use rand::RngCore;
        let mut secret = [0u8; 32];
        rand::rngs::OsRng.fill_bytes(&mut secret);
        Self::new(secret)
    }

    /// Sign claims into a transportable token string
    pub fn sign(&self, claims: &TokenClaims) -> String {
        let payload = serde_json::to_vec(claims).expect("claims serialize to JSON");
        let encoded_payload = URL_SAFE_NO_PAD.encode(&payload);

        let mut mac =
            HmacSha256::new_from_slice(&self.secret).expect("HMAC can take key of any size");
        mac.update(encoded_payload.as_bytes());
        let signature = mac.finalize().into_bytes();

        format!("{}.{}", encoded_payload, URL_SAFE_NO_PAD.encode(signature))
    }

    /// Verify signature and expiry, returning the claims
    pub fn verify(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let (encoded_payload, encoded_signature) =
            token.split_once('.').ok_or(TokenError::Malformed)?;

        let signature = URL_SAFE_NO_PAD
            .decode(encoded_signature)
            .map_err(|_| TokenError::Malformed)?;

        // verify_slice is constant-time
        let mut mac =
            HmacSha256::new_from_slice(&self.secret).expect("HMAC can take key of any size");
        mac.update(encoded_payload.as_bytes());
        mac.verify_slice(&signature)
            .map_err(|_| TokenError::BadSignature)?;

        let payload = URL_SAFE_NO_PAD
            .decode(encoded_payload)
            .map_err(|_| TokenError::Malformed)?;
        let claims: TokenClaims =
            serde_json::from_slice(&payload).map_err(|_| TokenError::Malformed)?;

        if claims.is_expired() {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }
}

impl std::fmt::Debug for TokenSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenSigner")
            .field("secret", &"[SECRET]")
            .finish()
    }
}
