use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::controllers::operator_controller::OperatorController;
use crate::dto::api_response::{ApiResponse, DeleteQuery};
use crate::dto::operator_dto::{CreateOperatorRequest, UpdateOperatorRequest};
use crate::models::operator::Operator;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_operator_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_operators).post(create_operator))
        .route(
            "/:id",
            get(get_operator).put(update_operator).delete(delete_operator),
        )
}

async fn list_operators(State(state): State<AppState>) -> Json<Vec<Operator>> {
    Json(OperatorController::new(&state).list().await)
}

async fn get_operator(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Operator>, AppError> {
    let operator = OperatorController::new(&state).get_by_id(id).await?;
    Ok(Json(operator))
}

async fn create_operator(
    State(state): State<AppState>,
    payload: Result<Json<CreateOperatorRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<Operator>>), AppError> {
    let Json(request) = payload?;
    let operator = OperatorController::new(&state).create(request).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success_with_message(operator, "Operador registrado exitosamente")),
    ))
}

async fn update_operator(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    payload: Result<Json<UpdateOperatorRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<Operator>>, AppError> {
    let Json(request) = payload?;
    let operator = OperatorController::new(&state).update(id, request).await?;
    Ok(Json(ApiResponse::success_with_message(operator, "Operador actualizado exitosamente")))
}

async fn delete_operator(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    query: Result<Query<DeleteQuery>, QueryRejection>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let Query(query) = query?;
    OperatorController::new(&state).delete(id, query.confirm).await?;
    Ok(Json(ApiResponse::message("Operador eliminado exitosamente")))
}
