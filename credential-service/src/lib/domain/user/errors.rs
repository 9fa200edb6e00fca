use thiserror::Error;

/// Error for Username validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UsernameError {
    #[error("Username too short: minimum {min} characters, got {actual}")]
    TooShort { min: usize, actual: usize },
}

/// Error for plaintext password validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordError {
    #[error("Password too short: minimum {min} characters, got {actual}")]
    TooShort { min: usize, actual: usize },
}

/// Error raised by the password hashing port
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HashingError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Password verification failed: {0}")]
    VerificationFailed(String),
}

/// Error raised by the user repository port.
///
/// A uniqueness violation is reported as its own variant so the service never
/// has to inspect vendor error codes.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Username already exists: {0}")]
    UsernameTaken(String),

    #[error("Database error: {0}")]
    Database(String),
}

/// Faults the credential service cannot turn into a field error
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserError {
    #[error("Hashing error: {0}")]
    Hashing(#[from] HashingError),

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

impl From<auth::PasswordError> for HashingError {
    fn from(err: auth::PasswordError) -> Self {
        match err {
            auth::PasswordError::VerificationFailed(msg) => HashingError::VerificationFailed(msg),
            auth::PasswordError::HashingFailed(msg) | auth::PasswordError::InvalidParams(msg) => {
                HashingError::HashingFailed(msg)
            }
        }
    }
}
