//! Catalog search across both item kinds.

use axum::extract::State;
use axum::Json;
use findit_core::item::ItemKind;
use findit_core::search::filter_items;
use findit_db::models::item::Item;
use findit_db::repositories::ItemRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::extract::AppQuery;
use crate::query::SearchParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Matches split by kind.
#[derive(Debug, Serialize)]
pub struct SearchResults {
    pub lost: Vec<Item>,
    pub found: Vec<Item>,
}

/// GET /api/v1/search?q=
///
/// Fetches every active item of both kinds, then filters in memory.
pub async fn search(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<SearchParams>,
) -> AppResult<Json<DataResponse<SearchResults>>> {
    let (lost, found) = tokio::try_join!(
        ItemRepo::list_active(&state.pool, ItemKind::Lost),
        ItemRepo::list_active(&state.pool, ItemKind::Found),
    )?;

    let query = params.query();
    Ok(Json(DataResponse {
        data: SearchResults {
            lost: filter_items(lost, query),
            found: filter_items(found, query),
        },
    }))
}
