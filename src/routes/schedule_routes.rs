use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use crate::controllers::schedule_controller::ScheduleController;
use crate::dto::api_response::{ApiResponse, DeleteQuery};
use crate::dto::schedule_dto::{
    CreateScheduleRequest, ScheduleFilters, ScheduleFormOptions, ScheduleListResponse,
    UpdateScheduleRequest,
};
use crate::models::schedule::Schedule;
use crate::services::aggregation_service::StatusCounts;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_schedule_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_schedules).post(create_schedule))
        .route("/counts", get(status_counts))
        .route("/form-options", get(form_options))
        .route(
            "/:id",
            get(get_schedule).put(update_schedule).delete(delete_schedule),
        )
        .route("/:id/complete", post(complete_schedule))
}

async fn list_schedules(
    State(state): State<AppState>,
    filters: Result<Query<ScheduleFilters>, QueryRejection>,
) -> Result<Json<ScheduleListResponse>, AppError> {
    let Query(filters) = filters?;
    Ok(Json(ScheduleController::new(&state).list(filters).await))
}

async fn status_counts(State(state): State<AppState>) -> Json<StatusCounts> {
    Json(ScheduleController::new(&state).counts().await)
}

async fn form_options(State(state): State<AppState>) -> Json<ScheduleFormOptions> {
    Json(ScheduleController::new(&state).form_options().await)
}

async fn get_schedule(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Schedule>, AppError> {
    let schedule = ScheduleController::new(&state).get_by_id(id).await?;
    Ok(Json(schedule))
}

async fn create_schedule(
    State(state): State<AppState>,
    payload: Result<Json<CreateScheduleRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<Schedule>>), AppError> {
    let Json(request) = payload?;
    let schedule = ScheduleController::new(&state).create(request).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success_with_message(schedule, "Programación creada exitosamente")),
    ))
}

async fn update_schedule(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    payload: Result<Json<UpdateScheduleRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<Schedule>>, AppError> {
    let Json(request) = payload?;
    let schedule = ScheduleController::new(&state).update(id, request).await?;
    Ok(Json(ApiResponse::success_with_message(
        schedule,
        "Programación actualizada exitosamente",
    )))
}

async fn complete_schedule(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<ApiResponse<Schedule>>, AppError> {
    let schedule = ScheduleController::new(&state).complete(id).await?;
    Ok(Json(ApiResponse::success_with_message(schedule, "Programación concluida")))
}

async fn delete_schedule(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    query: Result<Query<DeleteQuery>, QueryRejection>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let Query(query) = query?;
    ScheduleController::new(&state).delete(id, query.confirm).await?;
    Ok(Json(ApiResponse::message("Programación eliminada exitosamente")))
}
