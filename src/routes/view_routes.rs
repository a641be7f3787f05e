use axum::{
    extract::{rejection::JsonRejection, State},
    routing::get,
    Json, Router,
};

use crate::controllers::view_controller::ViewController;
use crate::dto::view_dto::{NavigateRequest, ViewResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_view_router() -> Router<AppState> {
    Router::new().route("/", get(current_view).post(navigate))
}

async fn current_view(State(state): State<AppState>) -> Json<ViewResponse> {
    Json(ViewController::new(&state).current().await)
}

async fn navigate(
    State(state): State<AppState>,
    payload: Result<Json<NavigateRequest>, JsonRejection>,
) -> Result<Json<ViewResponse>, AppError> {
    let Json(request) = payload?;
    Ok(Json(ViewController::new(&state).navigate(request).await))
}
