//! # Auth Module
//!
//! Tokens are issued by the external auth provider; this module only
//! validates them:
//! - `AuthedUser` extractor for protected routes (HS256 JWT, dev mode bypass)
//! - `GET /api/auth/me`

pub mod extractors;
pub mod handlers;
pub mod models;
pub mod routes;

#[cfg(test)]
mod tests;

pub use extractors::AuthedUser;
pub use routes::auth_routes;
