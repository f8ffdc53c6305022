//! Authenticated user's profile.

use axum::{Json, Router, extract::State, routing::get};
use finapi_shared::auth::UserInfo;

use crate::AppState;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;

/// Creates the profile router.
pub fn routes() -> Router<AppState> {
    Router::new().route("/profile", get(show_profile))
}

/// GET /profile - Return the caller's profile.
async fn show_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<UserInfo>, ApiError> {
    let user = state.users.show_profile(auth.user_id()).await?;
    Ok(Json(user.info()))
}
