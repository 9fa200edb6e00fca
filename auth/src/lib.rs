//! Password hashing library
//!
//! Provides the credential primitives shared by services:
//! - Salted Argon2id hashing into PHC strings
//! - Verification of a plaintext against a stored PHC string
//! - Tunable cost parameters
//!
//! Each service defines its own hashing port and adapts this implementation.
//!
//! # Examples
//!
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash).unwrap());
//! assert!(!hasher.verify("not_my_password", &hash).unwrap());
//! ```
//!
//! ## Custom cost
//! ```
//! use auth::{HashingParams, PasswordHasher};
//!
//! let params = HashingParams {
//!     memory_kib: 8192,
//!     iterations: 1,
//!     parallelism: 1,
//! };
//! let hasher = PasswordHasher::with_params(&params).unwrap();
//! let hash = hasher.hash("password123").unwrap();
//! assert!(hash.starts_with("$argon2id$"));
//! ```

pub mod password;

pub use password::HashingParams;
pub use password::PasswordError;
pub use password::PasswordHasher;
