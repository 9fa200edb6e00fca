use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::user::ports::PasswordHasher;
use crate::user::errors::HashingError;

/// Argon2id adapter over the shared `auth` hasher.
///
/// Hashing is CPU bound, so each call runs on tokio's blocking pool instead
/// of stalling the request executor.
#[derive(Clone)]
pub struct Argon2PasswordHasher {
    inner: Arc<auth::PasswordHasher>,
}

impl Argon2PasswordHasher {
    pub fn new(inner: auth::PasswordHasher) -> Self {
        Self {
            inner: Arc::new(inner),
        }
    }
}

#[async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    async fn hash(&self, password: &str) -> Result<String, HashingError> {
        let inner = Arc::clone(&self.inner);
        let password = password.to_owned();

        tokio::task::spawn_blocking(move || inner.hash(&password))
            .await
            .map_err(|e| HashingError::HashingFailed(e.to_string()))?
            .map_err(HashingError::from)
    }

    async fn verify(&self, password: &str, hash: &str) -> Result<bool, HashingError> {
        let inner = Arc::clone(&self.inner);
        let password = password.to_owned();
        let hash = hash.to_owned();

        tokio::task::spawn_blocking(move || inner.verify(&password, &hash))
            .await
            .map_err(|e| HashingError::VerificationFailed(e.to_string()))?
            .map_err(HashingError::from)
    }
}
