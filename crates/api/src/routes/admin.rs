//! Route definitions for the `/admin` resource.

use axum::routing::{delete, get, put};
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// All routes require the `admin` role (enforced by handler extractors).
///
/// ```text
/// GET    /overview             -> overview
/// GET    /claims               -> list_claims
/// PUT    /claims/{id}/status   -> update_claim_status
/// DELETE /items/{kind}/{id}    -> delete_item
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/overview", get(admin::overview))
        .route("/claims", get(admin::list_claims))
        .route("/claims/{id}/status", put(admin::update_claim_status))
        .route("/items/{kind}/{id}", delete(admin::delete_item))
}
