//! Handlers for filing and tracking claims.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use findit_core::claim::validate_message;
use findit_core::error::CoreError;
use findit_db::models::claim::CreateClaim;
use findit_db::repositories::{ClaimRepo, ItemRepo};

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// POST /claims
// ---------------------------------------------------------------------------

/// File a claim against one lost or found item. Starts as `pending`.
pub async fn create_claim(
    auth: AuthUser,
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateClaim>,
) -> AppResult<impl IntoResponse> {
    validate_message(&input.message)?;

    let target = input.target;
    ItemRepo::find_by_id(&state.pool, target.item_kind, target.item_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: target.item_kind.entity_name(),
            id: target.item_id,
        }))?;

    let claim = ClaimRepo::create(&state.pool, auth.user_id, &input).await?;

    tracing::info!(
        claim_id = claim.id,
        item_kind = %target.item_kind,
        item_id = target.item_id,
        user_id = auth.user_id,
        "Claim submitted",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: claim })))
}

// ---------------------------------------------------------------------------
// GET /claims/mine
// ---------------------------------------------------------------------------

/// List the caller's claims with the claimed items embedded, newest first.
pub async fn list_my_claims(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let claims = ClaimRepo::list_for_claimant(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse { data: claims }))
}
