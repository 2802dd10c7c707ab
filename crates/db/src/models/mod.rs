//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row (joined columns included)
//! - A `Deserialize` create DTO for inserts
//! - Any update DTOs the API accepts

pub mod claim;
pub mod item;
pub mod profile;
pub mod session;
