use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use linkin_types::models::SessionToken;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token is not valid base64: {0}")]
    Encoding(#[from] base64::DecodeError),

    #[error("token payload is not a session: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Serialize to JSON, then base64. Browsers read it back with
/// `JSON.parse(atob(token))`.
///
/// Not a signature: the output can be decoded, edited and re-encoded by anyone.
pub fn encode(token: &SessionToken) -> Result<String, TokenError> {
    let json = serde_json::to_vec(token)?;
    Ok(BASE64.encode(json))
}

pub fn decode(token: &str) -> Result<SessionToken, TokenError> {
    let json = BASE64.decode(token)?;
    Ok(serde_json::from_slice(&json)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_decode_roundtrip() {
        let token = SessionToken::issue("kuunity", 1_718_000_000_123);
        let encoded = encode(&token).unwrap();
        assert_eq!(decode(&encoded).unwrap(), token);
    }

    #[test]
    fn encoding_is_plain_base64_json() {
        let token = SessionToken {
            username: "a".into(),
            timestamp: 1,
            expires: 2,
        };
        let encoded = encode(&token).unwrap();
        let raw = BASE64.decode(&encoded).unwrap();
        assert_eq!(
            String::from_utf8(raw).unwrap(),
            r#"{"username":"a","timestamp":1,"expires":2}"#
        );
    }

    #[test]
    fn forged_token_decodes() {
        // Anyone can mint a token; decoding proves shape, never origin.
        let forged = BASE64.encode(r#"{"username":"root","timestamp":0,"expires":99999999999999}"#);
        let token = decode(&forged).unwrap();
        assert_eq!(token.username, "root");
        assert!(token.is_valid_at(1_800_000_000_000));
    }

    #[test]
    fn malformed_tokens_fail() {
        assert!(matches!(decode("not base64!!"), Err(TokenError::Encoding(_))));
        assert!(matches!(decode(&BASE64.encode("[1,2,3]")), Err(TokenError::Payload(_))));
        assert!(matches!(decode(&BASE64.encode(r#"{"username":"a"}"#)), Err(TokenError::Payload(_))));
        assert!(decode("").is_err());
    }
}
