use async_trait::async_trait;

use crate::domain::user::models::Credentials;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::User;
use crate::domain::user::models::UserResponse;
use crate::user::errors::HashingError;
use crate::user::errors::RepositoryError;
use crate::user::errors::UserError;

/// Port for credential operations.
#[async_trait]
pub trait CredentialServicePort: Send + Sync + 'static {
    /// Register a new user.
    ///
    /// # Arguments
    /// * `credentials` - Raw username and plaintext password, validated by the service
    ///
    /// # Returns
    /// Created user, or a field error for short input or a taken username
    ///
    /// # Errors
    /// * `Hashing` - Password hashing failed
    /// * `Repository` - Storage failed for a reason other than a taken username
    async fn register(&self, credentials: Credentials) -> Result<UserResponse, UserError>;

    /// Check credentials of an existing user.
    ///
    /// # Arguments
    /// * `credentials` - Username and plaintext password
    ///
    /// # Returns
    /// Matching user, or a field error for an unknown username or a wrong password
    ///
    /// # Errors
    /// * `Hashing` - Stored hash could not be verified
    /// * `Repository` - Lookup failed
    async fn login(&self, credentials: Credentials) -> Result<UserResponse, UserError>;
}

/// Persistence operations for user aggregate.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Insert a new user.
    ///
    /// The store's uniqueness constraint decides whether the username is free.
    ///
    /// # Returns
    /// Created user with storage-assigned id and timestamps
    ///
    /// # Errors
    /// * `UsernameTaken` - Username is already taken
    /// * `Database` - Database operation failed
    async fn create(&self, user: NewUser) -> Result<User, RepositoryError>;

    /// Retrieve user by exact username.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `Database` - Database operation failed
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError>;
}

/// One-way password hashing.
#[async_trait]
pub trait PasswordHasher: Send + Sync + 'static {
    /// Compute a salted digest of `password`.
    async fn hash(&self, password: &str) -> Result<String, HashingError>;

    /// Check `password` against a digest produced by [`PasswordHasher::hash`].
    async fn verify(&self, password: &str, hash: &str) -> Result<bool, HashingError>;
}
