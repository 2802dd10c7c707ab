//! Request handlers, one module per resource.

pub mod admin;
pub mod auth;
pub mod claims;
pub mod items;
pub mod me;
pub mod search;
