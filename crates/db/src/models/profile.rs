//! Profile entity model and DTOs.

use findit_core::roles::home_path_for_role;
use findit_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Full profile row from the `profiles` table.
///
/// Contains the password hash -- NEVER serialize this to API responses directly.
/// Use [`ProfileResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct Profile {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Safe profile representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub role: String,
    /// Route the client should land on (`/admin` or `/dashboard`).
    pub home: &'static str,
    pub created_at: Timestamp,
}

impl From<Profile> for ProfileResponse {
    fn from(p: Profile) -> Self {
        Self {
            home: home_path_for_role(&p.role),
            id: p.id,
            name: p.name,
            email: p.email,
            role: p.role,
            created_at: p.created_at,
        }
    }
}

/// DTO for creating a new profile. The password is already hashed.
#[derive(Debug)]
pub struct CreateProfile {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
}
