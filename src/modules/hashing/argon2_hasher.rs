use argon2::password_hash::{
    rand_core::OsRng, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString,
};
use argon2::{Algorithm, Argon2, Params, Version};

use crate::core::config::HashingConfig;
use crate::modules::hashing::{HashingError, PasswordHasher};

/// Argon2id with a random salt per hash, producing PHC strings
/// (`$argon2id$v=19$m=...,t=...,p=...$salt$hash`).
#[derive(Debug, Clone)]
pub struct Argon2Hasher {
    params: Params,
}

impl Argon2Hasher {
    pub fn new(config: &HashingConfig) -> Result<Self, HashingError> {
        let params = Params::new(
            config.memory_kib,
            config.iterations,
            config.parallelism,
            None,
        )
        .map_err(|e| HashingError(format!("Invalid Argon2 parameters: {}", e)))?;

        Ok(Self { params })
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }
}

impl PasswordHasher for Argon2Hasher {
    fn hash(&self, plaintext: &str) -> Result<String, HashingError> {
        let salt = SaltString::generate(&mut OsRng);
        self.argon2()
            .hash_password(plaintext.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| HashingError(e.to_string()))
    }

    fn verify(&self, plaintext: &str, digest: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(digest) else {
            return false;
        };
        // Cost parameters come from the digest itself
        self.argon2()
            .verify_password(plaintext.as_bytes(), &parsed)
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hasher() -> Argon2Hasher {
        Argon2Hasher::new(&HashingConfig::low_cost()).unwrap()
    }

    #[test]
    fn test_hash_is_not_plaintext_and_verifies() {
        let hasher = hasher();
        let digest = hasher.hash("SecurePassword123!").unwrap();

        assert_ne!(digest, "SecurePassword123!");
        assert!(digest.starts_with("$argon2id$"));
        assert!(hasher.verify("SecurePassword123!", &digest));
        assert!(!hasher.verify("securepassword123!", &digest));
    }

    #[test]
    fn test_same_password_gets_distinct_salts() {
        let hasher = hasher();
        let first = hasher.hash("password").unwrap();
        let second = hasher.hash("password").unwrap();

        assert_ne!(first, second);
        assert!(hasher.verify("password", &first));
        assert!(hasher.verify("password", &second));
    }

    #[test]
    fn test_malformed_digest_does_not_verify() {
        let hasher = hasher();
        assert!(!hasher.verify("password", ""));
        assert!(!hasher.verify("password", "password"));
        assert!(!hasher.verify("password", "$argon2id$garbage"));
    }

    #[test]
    fn test_digest_from_other_params_still_verifies() {
        let digest = hasher().hash("password").unwrap();
        let stronger = Argon2Hasher::new(&HashingConfig {
            memory_kib: 64,
            iterations: 2,
            parallelism: 1,
        })
        .unwrap();

        assert!(stronger.verify("password", &digest));
    }

    #[test]
    fn test_rejects_invalid_params() {
        let result = Argon2Hasher::new(&HashingConfig {
            memory_kib: 1,
            iterations: 0,
            parallelism: 1,
        });
        assert!(result.is_err());
    }
}
