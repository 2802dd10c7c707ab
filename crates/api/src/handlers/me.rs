//! Handler for the caller's own profile.

use axum::extract::State;
use axum::Json;
use findit_core::error::CoreError;
use findit_db::models::profile::ProfileResponse;
use findit_db::repositories::ProfileRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/me
///
/// The session's profile plus `home`, the route the client should land on.
pub async fn get_me(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<ProfileResponse>>> {
    let profile = ProfileRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Profile no longer exists".into()))
        })?;

    Ok(Json(DataResponse {
        data: ProfileResponse::from(profile),
    }))
}
