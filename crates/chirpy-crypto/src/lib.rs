//! Credential and token primitives for Chirpy.
//!
//! Provides bcrypt password hashing and verification, HS256-signed bearer
//! tokens with access/refresh scopes, and an in-process revocation list.
//!
//! All crypto operations wrap established libraries; there is no custom cryptography.

pub mod password;
pub mod revocation;
pub mod token;

pub use password::{PasswordError, PasswordHasher};
pub use revocation::RevocationList;
pub use token::{Claims, TokenError, TokenScope, TokenService};
