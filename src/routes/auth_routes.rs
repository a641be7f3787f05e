use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};

use crate::controllers::auth_controller::AuthController;
use crate::dto::auth_dto::{LoginRequest, SessionResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Ruta pública de login
pub fn login_routes() -> Router<AppState> {
    Router::new().route("/login", post(login))
}

/// Rutas de sesión que exigen login
pub fn session_routes() -> Router<AppState> {
    Router::new()
        .route("/logout", post(logout))
        .route("/me", get(me))
}

async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<SessionResponse>, AppError> {
    let Json(request) = payload?;
    let response = AuthController::new(&state).login(request).await?;
    Ok(Json(response))
}

async fn logout(State(state): State<AppState>) -> Json<SessionResponse> {
    Json(AuthController::new(&state).logout().await)
}

async fn me(State(state): State<AppState>) -> Json<SessionResponse> {
    Json(AuthController::new(&state).me().await)
}
