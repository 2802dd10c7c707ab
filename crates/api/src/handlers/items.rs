//! Handlers for lost/found item reports.
//!
//! Listing is public and returns only `active` items; reporting requires a
//! session. Deletion lives in [`super::admin`].

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use findit_core::item::ItemKind;
use findit_core::search::filter_items;
use findit_db::models::item::ItemReport;
use findit_db::repositories::ItemRepo;

use crate::error::AppResult;
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::middleware::auth::AuthUser;
use crate::query::SearchParams;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /items/{kind}
// ---------------------------------------------------------------------------

/// List active items of one kind, newest first, filtered by `?q=`.
pub async fn list_items(
    State(state): State<AppState>,
    AppPath(kind): AppPath<ItemKind>,
    AppQuery(params): AppQuery<SearchParams>,
) -> AppResult<impl IntoResponse> {
    let items = ItemRepo::list_active(&state.pool, kind).await?;
    let items = filter_items(items, params.query());
    Ok(Json(DataResponse { data: items }))
}

// ---------------------------------------------------------------------------
// POST /items/{kind}
// ---------------------------------------------------------------------------

/// Report a lost or found item owned by the caller.
///
/// The date is sent as `date_lost` or `date_found`, matching `{kind}`.
pub async fn create_item(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(kind): AppPath<ItemKind>,
    AppJson(report): AppJson<ItemReport>,
) -> AppResult<impl IntoResponse> {
    let input = report.into_create(kind)?;
    let item = ItemRepo::create(&state.pool, kind, auth.user_id, &input).await?;

    tracing::info!(
        item_id = item.id,
        kind = %kind,
        user_id = auth.user_id,
        "Item reported",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: item })))
}
