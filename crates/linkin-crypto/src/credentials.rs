use anyhow::{Result, anyhow};
use argon2::{
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
    password_hash::{SaltString, rand_core::OsRng},
};
use sha2::{Digest, Sha256};

/// Legacy form: hex(sha256(password || salt)).
pub fn hash_password(password: &str, salt: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hasher.update(salt.as_bytes());
    hex::encode(hasher.finalize())
}

/// Argon2id PHC string with a random salt.
pub fn hash_password_argon2(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow!("Password hashing failed: {}", e))?
        .to_string();
    Ok(hash)
}

/// Check `password` against a stored hash of either form.
///
/// `$argon2` prefixes are verified with Argon2; anything else is treated as a
/// legacy SHA-256 hex digest salted with `salt`.
pub fn verify_password(password: &str, salt: &str, stored: &str) -> bool {
    if stored.starts_with("$argon2") {
        return match PasswordHash::new(stored) {
            Ok(parsed) => Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok(),
            Err(_) => false,
        };
    }

    let Ok(expected) = hex::decode(stored) else {
        return false;
    };
    let actual = Sha256::new()
        .chain_update(password.as_bytes())
        .chain_update(salt.as_bytes())
        .finalize();
    constant_time_eq(&actual, &expected)
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_hash_is_salted_sha256_hex() {
        // sha256("abc") with an empty salt
        assert_eq!(
            hash_password("abc", ""),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
        assert_ne!(hash_password("abc", "1234"), hash_password("abc", "4321"));
    }

    #[test]
    fn verify_legacy_hash() {
        let stored = hash_password("secret", "1234");
        assert!(verify_password("secret", "1234", &stored));
        assert!(!verify_password("secret", "9999", &stored));
        assert!(!verify_password("Secret", "1234", &stored));
        assert!(!verify_password("secret", "1234", "not-hex"));
        assert!(!verify_password("secret", "1234", "abcd"));
    }

    #[test]
    fn verify_argon2_hash() {
        let stored = hash_password_argon2("secret").unwrap();
        assert!(stored.starts_with("$argon2"));
        assert!(verify_password("secret", "ignored", &stored));
        assert!(!verify_password("wrong", "ignored", &stored));
        assert!(!verify_password("secret", "ignored", "$argon2id$garbage"));
    }
}
