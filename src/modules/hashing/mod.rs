//! Password hashing behind a swappable interface.

mod argon2_hasher;

pub use argon2_hasher::Argon2Hasher;

use thiserror::Error;

#[derive(Debug, Error)]
#[error("Password hashing failed: {0}")]
pub struct HashingError(pub String);

/// One-way password hashing scheme
pub trait PasswordHasher: Send + Sync {
    /// Hash `plaintext` into a self-describing digest
    fn hash(&self, plaintext: &str) -> Result<String, HashingError>;

    /// `true` iff `plaintext` hashes to `digest` under this scheme.
    /// Malformed digests verify as `false`.
    fn verify(&self, plaintext: &str, digest: &str) -> bool;
}
