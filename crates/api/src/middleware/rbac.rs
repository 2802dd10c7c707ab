//! Role-based access control extractors.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use findit_core::error::CoreError;
use findit_core::roles::is_admin;
use findit_db::models::profile::Profile;
use findit_db::repositories::ProfileRepo;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires the `admin` role. Rejects with 403 Forbidden otherwise.
///
/// The role is read from the caller's stored profile rather than the token,
/// so a demotion takes effect on the next request.
///
/// ```ignore
/// async fn admin_only(RequireAdmin(admin): RequireAdmin) -> AppResult<Json<()>> {
///     // admin.role == "admin" here
///     Ok(Json(()))
/// }
/// ```
pub struct RequireAdmin(pub Profile);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;

        let profile = ProfileRepo::find_by_id(&state.pool, user.user_id).await?;
        match profile {
            Some(profile) if is_admin(&profile.role) => Ok(RequireAdmin(profile)),
            _ => {
                tracing::debug!(user_id = user.user_id, "Rejected non-admin caller");
                Err(AppError::Core(CoreError::Forbidden(
                    "Admin role required".into(),
                )))
            }
        }
    }
}
