//! Well-known role names and role-derived routing.
//!
//! These must match the `ck_profiles_role` constraint in the profiles migration.

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_USER: &str = "user";

/// Landing route for administrators.
pub const HOME_ADMIN: &str = "/admin";
/// Landing route for everyone else.
pub const HOME_DASHBOARD: &str = "/dashboard";

/// Whether `role` grants access to moderation endpoints.
pub fn is_admin(role: &str) -> bool {
    role == ROLE_ADMIN
}

/// The route a client should land on after sign-in.
///
/// Admins are sent straight to the moderation view; any other role,
/// including unknown ones, lands on the regular dashboard.
pub fn home_path_for_role(role: &str) -> &'static str {
    if is_admin(role) {
        HOME_ADMIN
    } else {
        HOME_DASHBOARD
    }
}
