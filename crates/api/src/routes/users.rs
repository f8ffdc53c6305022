//! User registration.

use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use finapi_shared::auth::{CreateUserRequest, UserInfo};

use crate::AppState;
use crate::error::ApiError;

/// Creates the users router.
pub fn routes() -> Router<AppState> {
    Router::new().route("/users", post(create_user))
}

/// POST /users - Register a new user.
async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserInfo>), ApiError> {
    let user = state.users.create_user(payload).await?;
    Ok((StatusCode::CREATED, Json(user.info())))
}
