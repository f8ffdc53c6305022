//! Session creation (login).

use axum::{Json, Router, extract::State, routing::post};
use finapi_shared::auth::{SessionRequest, SessionResponse};

use crate::AppState;
use crate::error::ApiError;

/// Creates the sessions router.
pub fn routes() -> Router<AppState> {
    Router::new().route("/sessions", post(create_session))
}

/// POST /sessions - Check credentials and issue an access token.
async fn create_session(
    State(state): State<AppState>,
    Json(payload): Json<SessionRequest>,
) -> Result<Json<SessionResponse>, ApiError> {
    let user = state
        .users
        .authenticate(&payload.email, &payload.password)
        .await?;
    let token = state.jwt_service.issue_token(user.id)?;

    Ok(Json(SessionResponse {
        user: user.info(),
        token,
        expires_in: state.jwt_service.access_token_expires_in(),
    }))
}
