use std::fmt;

use chrono::DateTime;
use chrono::Utc;

use crate::user::errors::PasswordError;
use crate::user::errors::UsernameError;

/// User aggregate entity.
///
/// Represents a registered user. `password_hash` only ever holds a one-way
/// Argon2id digest in PHC format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub username: Username,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Storage-assigned user identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Username value type
///
/// Ensures username has at least 3 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Username(String);

impl Username {
    const MIN_LENGTH: usize = 3;

    /// Create a new valid username.
    ///
    /// Length is counted in UTF-16 code units, so a character outside the
    /// Basic Multilingual Plane counts twice.
    ///
    /// # Errors
    /// * `TooShort` - Username shorter than 3 characters
    pub fn new(username: String) -> Result<Self, UsernameError> {
        let length = username.encode_utf16().count();
        if length < Self::MIN_LENGTH {
            return Err(UsernameError::TooShort {
                min: Self::MIN_LENGTH,
                actual: length,
            });
        }
        Ok(Self(username))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Plaintext password accepted at registration.
///
/// Never printed: `Debug` is redacted.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    const MIN_LENGTH: usize = 3;

    /// Length is counted in UTF-16 code units, like [`Username::new`].
    ///
    /// # Errors
    /// * `TooShort` - Password shorter than 3 characters
    pub fn new(password: String) -> Result<Self, PasswordError> {
        let length = password.encode_utf16().count();
        if length < Self::MIN_LENGTH {
            return Err(PasswordError::TooShort {
                min: Self::MIN_LENGTH,
                actual: length,
            });
        }
        Ok(Self(password))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(**redacted**)")
    }
}

/// User record ready to be inserted. Identifier and timestamps come from storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: Username,
    pub password_hash: String,
}

/// Command to register a new user with validated fields
#[derive(Debug)]
pub struct RegisterUserCommand {
    pub username: Username,
    pub password: Password,
}

impl RegisterUserCommand {
    /// Validate raw registration input.
    ///
    /// Username is checked before password and the first failure wins.
    ///
    /// # Errors
    /// Field error for the first offending input
    pub fn new(username: String, password: String) -> Result<Self, FieldError> {
        let username = Username::new(username)?;
        let password = Password::new(password)?;
        Ok(Self { username, password })
    }
}

/// Raw username/password pair as received from a caller.
///
/// Not validated: registration validates it, login matches it exactly.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: String, password: String) -> Self {
        Self { username, password }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"**redacted**")
            .finish()
    }
}

/// A failure tagged with the offending input field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub const USERNAME_TOO_SHORT: &'static str = "Username must contain at least 3 characters";
    pub const PASSWORD_TOO_SHORT: &'static str = "Password must contain at least 2 characters";
    pub const USERNAME_TAKEN: &'static str = "Username has already been taken";
    pub const USERNAME_NOT_FOUND: &'static str = "Oups... Could not find that username";
    pub const PASSWORD_MISMATCH: &'static str = "Incorrect Password ! Make sure password match";

    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn username(message: impl Into<String>) -> Self {
        Self::new("username", message)
    }

    pub fn password(message: impl Into<String>) -> Self {
        Self::new("password", message)
    }
}

impl From<UsernameError> for FieldError {
    fn from(err: UsernameError) -> Self {
        match err {
            UsernameError::TooShort { .. } => FieldError::username(Self::USERNAME_TOO_SHORT),
        }
    }
}

impl From<PasswordError> for FieldError {
    fn from(err: PasswordError) -> Self {
        match err {
            PasswordError::TooShort { .. } => FieldError::password(Self::PASSWORD_TOO_SHORT),
        }
    }
}

/// Outcome of a register or login call.
///
/// Either a non-empty list of field errors or the user the call resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserResponse {
    Errors(Vec<FieldError>),
    User(User),
}

impl UserResponse {
    pub fn error(error: FieldError) -> Self {
        Self::Errors(vec![error])
    }

    pub fn errors(&self) -> &[FieldError] {
        match self {
            Self::Errors(errors) => errors,
            Self::User(_) => &[],
        }
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Errors(_) => None,
            Self::User(user) => Some(user),
        }
    }
}

impl From<FieldError> for UserResponse {
    fn from(error: FieldError) -> Self {
        Self::error(error)
    }
}
