//! Session guard extractors.
//!
//! - [`auth::AuthUser`] -- Requires a valid bearer token (401 otherwise).
//! - [`rbac::RequireAdmin`] -- Additionally requires the stored profile role to be `admin` (403 otherwise).

pub mod auth;
pub mod rbac;
