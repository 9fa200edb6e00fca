pub mod argon2;
pub mod errors;
pub mod params;

pub use argon2::PasswordHasher;
pub use errors::PasswordError;
pub use params::HashingParams;
