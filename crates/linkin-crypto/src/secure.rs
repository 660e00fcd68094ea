use anyhow::Result;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use linkin_types::models::SessionToken;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Signed counterpart of [`SessionToken`]. Times are in seconds, as JWT expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecureClaims {
    pub username: String,
    pub iat: usize,
    pub exp: usize,
}

impl From<&SessionToken> for SecureClaims {
    fn from(token: &SessionToken) -> Self {
        Self {
            username: token.username.clone(),
            iat: (token.timestamp / 1000).max(0) as usize,
            exp: (token.expires / 1000).max(0) as usize,
        }
    }
}

pub fn create_secure_token(claims: &SecureClaims, secret: &str) -> Result<String> {
    let token = encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?;
    Ok(token)
}

/// `None` for a bad signature, a malformed token or an expired one.
pub fn parse_secure_token(token: &str, secret: &str) -> Option<SecureClaims> {
    match decode::<SecureClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    ) {
        Ok(data) => Some(data.claims),
        Err(e) => {
            warn!("Token verification failed: {}", e);
            None
        }
    }
}
