use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::Error as PhcError;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Algorithm;
use argon2::Argon2;
use argon2::Params;
use argon2::Version;

use super::errors::PasswordError;
use super::params::HashingParams;

/// Password hashing implementation.
///
/// Produces salted Argon2id digests in PHC string format. The PHC string
/// embeds algorithm, version, cost and salt, so verification does not depend
/// on the parameters this hasher was built with.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    params: Params,
}

impl PasswordHasher {
    /// Create a new password hasher with default cost parameters.
    pub fn new() -> Self {
        Self {
            params: Params::default(),
        }
    }

    /// Create a password hasher with explicit cost parameters.
    ///
    /// # Errors
    /// * `InvalidParams` - Parameters are outside the ranges Argon2 accepts
    pub fn with_params(params: &HashingParams) -> Result<Self, PasswordError> {
        let params = Params::new(
            params.memory_kib,
            params.iterations,
            params.parallelism,
            None,
        )
        .map_err(|e| PasswordError::InvalidParams(e.to_string()))?;

        Ok(Self { params })
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }

    /// Hash a plaintext password with a fresh random salt.
    ///
    /// # Returns
    /// PHC string format hash
    ///
    /// # Errors
    /// * `HashingFailed` - Password hashing operation failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a password against a stored hash.
    ///
    /// # Returns
    /// True if password matches, false otherwise
    ///
    /// # Errors
    /// * `VerificationFailed` - Stored hash is malformed or cannot be checked
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordError> {
        let parsed_hash = PasswordHash::new(hash).map_err(|e| {
            PasswordError::VerificationFailed(format!("Invalid password hash: {}", e))
        })?;

        match self
            .argon2()
            .verify_password(password.as_bytes(), &parsed_hash)
        {
            Ok(()) => Ok(true),
            Err(PhcError::Password) => Ok(false),
            Err(e) => Err(PasswordError::VerificationFailed(e.to_string())),
        }
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}
