use axum::routing::{get, post};
use axum::Router;

use crate::handlers::claims;
use crate::state::AppState;

/// Routes mounted at `/claims`. All require auth.
///
/// ```text
/// POST /      -> create_claim
/// GET  /mine  -> list_my_claims
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(claims::create_claim))
        .route("/mine", get(claims::list_my_claims))
}
