pub mod admin;
pub mod auth;
pub mod claims;
pub mod health;
pub mod items;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/signup                        sign up (public)
/// /auth/login                         login (public)
/// /auth/refresh                       refresh (public)
/// /auth/logout                        logout (requires auth)
///
/// /me                                 current profile (requires auth)
///
/// /search?q=                          both kinds, filtered (public)
/// /items/{kind}?q=                    list active (public), report (auth)
///
/// /claims                             submit (auth)
/// /claims/mine                        caller's claims (auth)
///
/// /admin/overview                     stats, claims, all items (admin only)
/// /admin/claims                       all claims (admin only)
/// /admin/claims/{id}/status           approve / reject (admin only)
/// /admin/items/{kind}/{id}            delete (admin only)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication routes (signup, login, refresh, logout).
        .nest("/auth", auth::router())
        .route("/me", get(handlers::me::get_me))
        // Catalog: listing and search are public, reporting needs a session.
        .merge(items::router())
        .nest("/claims", claims::router())
        // Moderation.
        .nest("/admin", admin::router())
}
