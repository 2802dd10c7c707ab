//! Domain types, constants and pure rules shared by the database and API
//! layers. Nothing in this crate touches I/O.

pub mod claim;
pub mod error;
pub mod item;
pub mod moderation;
pub mod roles;
pub mod search;
pub mod types;
pub mod validation;
