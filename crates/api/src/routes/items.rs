//! Route definitions for lost/found items and catalog search.

use axum::routing::get;
use axum::Router;

use crate::handlers::{items, search};
use crate::state::AppState;

/// Catalog routes, merged at the `/api/v1` root.
///
/// `{kind}` is `lost` or `found`.
///
/// ```text
/// GET  /search?q=       -> search
/// GET  /items/{kind}?q= -> list_items
/// POST /items/{kind}    -> create_item (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/search", get(search::search))
        .route(
            "/items/{kind}",
            get(items::list_items).post(items::create_item),
        )
}
