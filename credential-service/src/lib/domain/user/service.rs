use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::user::models::Credentials;
use crate::domain::user::models::FieldError;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::UserResponse;
use crate::user::errors::RepositoryError;
use crate::user::errors::UserError;
use crate::user::ports::CredentialServicePort;
use crate::user::ports::PasswordHasher;
use crate::user::ports::UserRepository;

/// Domain service implementation for registration and login.
///
/// Stateless apart from its injected collaborators.
pub struct CredentialService<UR, PH>
where
    UR: UserRepository,
    PH: PasswordHasher,
{
    repository: Arc<UR>,
    password_hasher: Arc<PH>,
}

impl<UR, PH> CredentialService<UR, PH>
where
    UR: UserRepository,
    PH: PasswordHasher,
{
    /// Create a new credential service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `password_hasher` - One-way hashing implementation
    pub fn new(repository: Arc<UR>, password_hasher: Arc<PH>) -> Self {
        Self {
            repository,
            password_hasher,
        }
    }
}

#[async_trait]
impl<UR, PH> CredentialServicePort for CredentialService<UR, PH>
where
    UR: UserRepository,
    PH: PasswordHasher,
{
    async fn register(&self, credentials: Credentials) -> Result<UserResponse, UserError> {
        let command = match RegisterUserCommand::new(credentials.username, credentials.password)
        {
            Ok(command) => command,
            Err(field_error) => {
                tracing::debug!(
                    field = %field_error.field,
                    "Registration rejected by validation"
                );
                return Ok(field_error.into());
            }
        };

        let password_hash = self
            .password_hasher
            .hash(command.password.as_str())
            .await?;

        let new_user = NewUser {
            username: command.username,
            password_hash,
        };

        // No existence check up front: the unique constraint settles races
        match self.repository.create(new_user).await {
            Ok(user) => {
                tracing::info!(user_id = %user.id, username = %user.username, "User registered");
                Ok(UserResponse::User(user))
            }
            Err(RepositoryError::UsernameTaken(username)) => {
                tracing::debug!(username = %username, "Registration rejected, username taken");
                Ok(FieldError::username(FieldError::USERNAME_TAKEN).into())
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to persist new user");
                Err(e.into())
            }
        }
    }

    async fn login(&self, credentials: Credentials) -> Result<UserResponse, UserError> {
        let Some(user) = self
            .repository
            .find_by_username(&credentials.username)
            .await?
        else {
            tracing::debug!(username = %credentials.username, "Login rejected, unknown username");
            return Ok(FieldError::username(FieldError::USERNAME_NOT_FOUND).into());
        };

        let valid = self
            .password_hasher
            .verify(&credentials.password, &user.password_hash)
            .await?;

        if !valid {
            tracing::debug!(user_id = %user.id, "Login rejected, password mismatch");
            return Ok(FieldError::password(FieldError::PASSWORD_MISMATCH).into());
        }

        tracing::info!(user_id = %user.id, username = %user.username, "User logged in");
        Ok(UserResponse::User(user))
    }
}
