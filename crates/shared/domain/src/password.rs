//! Password value object - Domain layer password handling.
//!
//! Passwords are stored as the bytes of an Argon2id PHC string, so the salt
//! and work factor travel with the hash.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};

use crate::constants::{DEFAULT_HASH_ITERATIONS, DEFAULT_HASH_MEMORY_KIB, DEFAULT_HASH_PARALLELISM};
use crate::error::{DomainError, DomainResult};

/// Argon2id work factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordCost {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Default for PasswordCost {
    fn default() -> Self {
        Self {
            memory_kib: DEFAULT_HASH_MEMORY_KIB,
            iterations: DEFAULT_HASH_ITERATIONS,
            parallelism: DEFAULT_HASH_PARALLELISM,
        }
    }
}

impl PasswordCost {
    fn argon2(&self) -> DomainResult<Argon2<'static>> {
        let params = Params::new(self.memory_kib, self.iterations, self.parallelism, None)
            .map_err(|e| DomainError::password(format!("Invalid hash parameters: {}", e)))?;
        Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
    }
}

/// Password value object that handles hashing and verification.
#[derive(Clone, PartialEq, Eq)]
pub struct Password {
    hash: Vec<u8>,
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
    /// Hash the plain text with a fresh salt and the given work factor.
    ///
    /// # Errors
    /// Returns a password error if the cost parameters are rejected by Argon2
    /// or hashing fails.
    pub fn hash_with(plain_text: &str, cost: PasswordCost) -> DomainResult<Self> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = cost
            .argon2()?
            .hash_password(plain_text.as_bytes(), &salt)
            .map_err(|e| DomainError::password(format!("Password hash failed: {}", e)))?;
        Ok(Self {
            hash: hash.to_string().into_bytes(),
        })
    }

    /// Create a Password from an existing hash (from database).
    pub fn from_hash(hash: Vec<u8>) -> Self {
        Self { hash }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.hash
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.hash
    }

    /// Verify a plain text password against this hash.
    ///
    /// A malformed stored hash never verifies.
    pub fn verify(&self, plain_text: &str) -> bool {
        Self::verify_hash(plain_text, &self.hash).unwrap_or(false)
    }

    fn verify_hash(plain_text: &str, hash: &[u8]) -> DomainResult<bool> {
        let encoded = std::str::from_utf8(hash)
            .map_err(|e| DomainError::password(format!("Invalid hash encoding: {}", e)))?;
        let parsed = PasswordHash::new(encoded)
            .map_err(|e| DomainError::password(format!("Invalid hash format: {}", e)))?;
        // Parameters are read back from the PHC string, not from the current config.
        Ok(Argon2::default()
            .verify_password(plain_text.as_bytes(), &parsed)
            .is_ok())
    }
}

impl From<Password> for Vec<u8> {
    fn from(password: Password) -> Self {
        password.hash
    }
}
