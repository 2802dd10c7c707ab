//! Moderation handlers. Every endpoint requires the `admin` role.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use findit_core::claim::validate_transition;
use findit_core::error::CoreError;
use findit_core::item::ItemKind;
use findit_core::moderation::ModerationStats;
use findit_core::types::DbId;
use findit_db::models::claim::{ClaimDetail, UpdateClaimStatus};
use findit_db::models::item::Item;
use findit_db::repositories::{ClaimRepo, ItemRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// Everything the moderation view renders, loaded in one request.
#[derive(Debug, Serialize)]
pub struct AdminOverview {
    pub stats: ModerationStats,
    pub claims: Vec<ClaimDetail>,
    pub lost_items: Vec<Item>,
    pub found_items: Vec<Item>,
}

// ---------------------------------------------------------------------------
// GET /admin/overview
// ---------------------------------------------------------------------------

/// Load all claims and all items of both kinds, with counts computed from
/// the fetched lists.
pub async fn overview(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<AdminOverview>>> {
    let (claims, lost_items, found_items) = tokio::try_join!(
        ClaimRepo::list_all(&state.pool),
        ItemRepo::list_all(&state.pool, ItemKind::Lost),
        ItemRepo::list_all(&state.pool, ItemKind::Found),
    )?;

    let stats = ModerationStats::compute(
        claims.iter().map(|c| c.status.as_str()),
        lost_items.len(),
        found_items.len(),
    );

    Ok(Json(DataResponse {
        data: AdminOverview {
            stats,
            claims,
            lost_items,
            found_items,
        },
    }))
}

// ---------------------------------------------------------------------------
// GET /admin/claims
// ---------------------------------------------------------------------------

/// List every claim with claimant and item details, newest first.
pub async fn list_claims(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let claims = ClaimRepo::list_all(&state.pool).await?;
    Ok(Json(DataResponse { data: claims }))
}

// ---------------------------------------------------------------------------
// PUT /admin/claims/{id}/status
// ---------------------------------------------------------------------------

/// Approve or reject a claim.
///
/// Decided claims may be re-decided unless `CLAIM_TERMINAL_STATES` is on.
pub async fn update_claim_status(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateClaimStatus>,
) -> AppResult<impl IntoResponse> {
    let not_found = || AppError::Core(CoreError::NotFound { entity: "Claim", id });

    let current = ClaimRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(not_found)?;

    let enforce_terminal = state.config.claim_terminal_states;
    validate_transition(&current.status, &input.status, enforce_terminal)?;

    // With terminal states on, the write only lands on a still-pending claim.
    let updated = if enforce_terminal {
        ClaimRepo::decide_pending(&state.pool, id, &input.status)
            .await?
            .ok_or_else(|| {
                AppError::Core(CoreError::Conflict("Claim has already been decided".into()))
            })?
    } else {
        ClaimRepo::update_status(&state.pool, id, &input.status)
            .await?
            .ok_or_else(not_found)?
    };

    tracing::info!(
        claim_id = id,
        item = ?updated.target(),
        from = %current.status,
        to = %updated.status,
        user_id = admin.id,
        "Claim status updated",
    );

    Ok(Json(DataResponse { data: updated }))
}

// ---------------------------------------------------------------------------
// DELETE /admin/items/{kind}/{id}
// ---------------------------------------------------------------------------

/// Hard-delete a lost or found item. Its claims go with it.
pub async fn delete_item(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    AppPath((kind, id)): AppPath<(ItemKind, DbId)>,
) -> AppResult<StatusCode> {
    let deleted = ItemRepo::delete(&state.pool, kind, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: kind.entity_name(),
            id,
        }));
    }

    tracing::info!(item_id = id, kind = %kind, user_id = admin.id, "Item deleted");
    Ok(StatusCode::NO_CONTENT)
}
