//! `storefront-auth` — authentication primitives.
//!
//! This crate is intentionally decoupled from HTTP and storage: token
//! transport (cookies) and account persistence live elsewhere.

pub mod claims;
pub mod password;
pub mod token;
pub mod user;

pub use claims::{JwtClaims, TokenValidationError, validate_claims};
pub use password::PasswordHash;
pub use token::{Hs256TokenCodec, TokenCodecError};
pub use user::UserAccount;
