//! Password value object - salted key derivation and verification.
//!
//! Stored form is the composite `"<derivedKeyHex>.<saltHex>"`. The key is a
//! 64-byte scrypt output (N=2^14, r=8, p=1) over the password, salted with
//! the hex salt string's bytes.

use rand::{rngs::OsRng, RngCore};
use scrypt::Params;
use subtle::ConstantTimeEq;

use crate::config::{
    PASSWORD_COMPOSITE_SEPARATOR, PASSWORD_KEY_BYTES, PASSWORD_SALT_BYTES, SCRYPT_LOG_N,
    SCRYPT_P, SCRYPT_R,
};
use crate::errors::{AppError, AppResult};

/// Password value object that handles hashing and verification.
#[derive(Clone)]
pub struct Password {
    hash: String,
}

// Don't expose hash in debug output (security)
impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("hash", &"[REDACTED]")
            .finish()
    }
}

impl Password {
    /// Create a new password by hashing the plain text with a fresh salt.
    ///
    /// # Errors
    /// Only fails if the key derivation itself fails, which the fixed
    /// parameters rule out for any input length the HTTP layer accepts.
    pub fn new(plain_text: &str) -> AppResult<Self> {
        let hash = hash_password(plain_text)?;
        Ok(Self { hash })
    }

    /// Create a Password from an existing composite (from database).
    pub fn from_hash(hash: String) -> Self {
        Self { hash }
    }

    /// Get the composite string for storage.
    pub fn as_str(&self) -> &str {
        &self.hash
    }

    /// Consume and return the composite string.
    pub fn into_string(self) -> String {
        self.hash
    }

    /// Verify a plain text password against this composite.
    pub fn verify(&self, plain_text: &str) -> bool {
        verify_password(plain_text, &self.hash)
    }
}

/// Hash a password into a `"<keyHex>.<saltHex>"` composite.
pub fn hash_password(plain_text: &str) -> AppResult<String> {
    let mut salt = [0u8; PASSWORD_SALT_BYTES];
    OsRng.fill_bytes(&mut salt);
    let salt_hex = hex::encode(salt);

    let key = derive_key(plain_text, &salt_hex)?;
    Ok(format!(
        "{}{}{}",
        hex::encode(key),
        PASSWORD_COMPOSITE_SEPARATOR,
        salt_hex
    ))
}

/// Check a supplied password against a stored composite.
///
/// Malformed composites and key-length mismatches are `false`, never errors.
pub fn verify_password(supplied: &str, stored: &str) -> bool {
    let Some((key_hex, salt_hex)) = stored.split_once(PASSWORD_COMPOSITE_SEPARATOR) else {
        return false;
    };
    let Ok(stored_key) = hex::decode(key_hex) else {
        return false;
    };
    let Ok(derived) = derive_key(supplied, salt_hex) else {
        return false;
    };

    if stored_key.len() != derived.len() {
        return false;
    }
    stored_key.ct_eq(&derived).into()
}

fn derive_key(plain_text: &str, salt: &str) -> AppResult<[u8; PASSWORD_KEY_BYTES]> {
    let params = Params::new(SCRYPT_LOG_N, SCRYPT_R, SCRYPT_P, PASSWORD_KEY_BYTES)
        .map_err(|e| AppError::internal(format!("Invalid scrypt parameters: {}", e)))?;

    let mut key = [0u8; PASSWORD_KEY_BYTES];
    scrypt::scrypt(plain_text.as_bytes(), salt.as_bytes(), &params, &mut key)
        .map_err(|e| AppError::internal(format!("Password hash failed: {}", e)))?;
    Ok(key)
}

impl From<Password> for String {
    fn from(password: Password) -> Self {
        password.hash
    }
}
