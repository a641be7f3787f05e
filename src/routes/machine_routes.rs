use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};

use crate::controllers::fuel_controller::FuelController;
use crate::controllers::machine_controller::MachineController;
use crate::controllers::maintenance_controller::MaintenanceController;
use crate::dto::api_response::{ApiResponse, DeleteQuery};
use crate::dto::fuel_dto::{CreateFuelRecordRequest, UpdateFuelRecordRequest};
use crate::dto::machine_dto::{
    CreateMachineRequest, FuelLedgerResponse, MaintenanceLogResponse, UpdateMachineRequest,
};
use crate::dto::maintenance_dto::{
    CompleteMaintenanceRequest, CreateMaintenanceRequest, UpdateMaintenanceRequest,
};
use crate::models::fuel::FuelRecord;
use crate::models::machine::Machine;
use crate::models::maintenance::MaintenanceRecord;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Máquinas con sus manutenciones y abastecimientos anidados
pub fn create_machine_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_machines).post(create_machine))
        .route(
            "/:id",
            get(get_machine).put(update_machine).delete(delete_machine),
        )
        .route("/:id/maintenance", get(list_maintenance).post(create_maintenance))
        .route(
            "/:id/maintenance/:record_id",
            put(update_maintenance).delete(delete_maintenance),
        )
        .route("/:id/maintenance/:record_id/complete", post(complete_maintenance))
        .route("/:id/fuel", get(fuel_ledger).post(create_fuel_record))
        .route(
            "/:id/fuel/:record_id",
            put(update_fuel_record).delete(delete_fuel_record),
        )
}

async fn list_machines(State(state): State<AppState>) -> Json<Vec<Machine>> {
    Json(MachineController::new(&state).list().await)
}

async fn get_machine(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Machine>, AppError> {
    let machine = MachineController::new(&state).get_by_id(id).await?;
    Ok(Json(machine))
}

async fn create_machine(
    State(state): State<AppState>,
    payload: Result<Json<CreateMachineRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<Machine>>), AppError> {
    let Json(request) = payload?;
    let machine = MachineController::new(&state).create(request).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success_with_message(machine, "Máquina registrada exitosamente")),
    ))
}

async fn update_machine(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    payload: Result<Json<UpdateMachineRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<Machine>>, AppError> {
    let Json(request) = payload?;
    let machine = MachineController::new(&state).update(id, request).await?;
    Ok(Json(ApiResponse::success_with_message(machine, "Máquina actualizada exitosamente")))
}

async fn delete_machine(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    query: Result<Query<DeleteQuery>, QueryRejection>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let Query(query) = query?;
    MachineController::new(&state).delete(id, query.confirm).await?;
    Ok(Json(ApiResponse::message("Máquina eliminada exitosamente")))
}

async fn list_maintenance(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<MaintenanceLogResponse>, AppError> {
    let log = MaintenanceController::new(&state).list_for_machine(id).await?;
    Ok(Json(log))
}

async fn create_maintenance(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    payload: Result<Json<CreateMaintenanceRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<MaintenanceRecord>>), AppError> {
    let Json(request) = payload?;
    let record = MaintenanceController::new(&state).create(id, request).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success_with_message(record, "Manutención programada")),
    ))
}

async fn update_maintenance(
    State(state): State<AppState>,
    Path((id, record_id)): Path<(u64, u64)>,
    payload: Result<Json<UpdateMaintenanceRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<MaintenanceRecord>>, AppError> {
    let Json(request) = payload?;
    let record = MaintenanceController::new(&state)
        .update(id, record_id, request)
        .await?;
    Ok(Json(ApiResponse::success_with_message(record, "Manutención actualizada")))
}

/// El body es opcional; sin fecha se usa el día actual.
/// Un body JSON presente pero inválido sigue siendo un 400.
async fn complete_maintenance(
    State(state): State<AppState>,
    Path((id, record_id)): Path<(u64, u64)>,
    payload: Result<Json<CompleteMaintenanceRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<MaintenanceRecord>>, AppError> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(JsonRejection::MissingJsonContentType(_)) => CompleteMaintenanceRequest::default(),
        Err(rejection) => return Err(rejection.into()),
    };
    let record = MaintenanceController::new(&state)
        .complete(id, record_id, request)
        .await?;
    Ok(Json(ApiResponse::success_with_message(record, "Manutención concluida")))
}

async fn delete_maintenance(
    State(state): State<AppState>,
    Path((id, record_id)): Path<(u64, u64)>,
    query: Result<Query<DeleteQuery>, QueryRejection>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let Query(query) = query?;
    MaintenanceController::new(&state)
        .delete(id, record_id, query.confirm)
        .await?;
    Ok(Json(ApiResponse::message("Manutención eliminada exitosamente")))
}

async fn fuel_ledger(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<FuelLedgerResponse>, AppError> {
    let ledger = FuelController::new(&state).ledger(id).await?;
    Ok(Json(ledger))
}

async fn create_fuel_record(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    payload: Result<Json<CreateFuelRecordRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<FuelRecord>>), AppError> {
    let Json(request) = payload?;
    let record = FuelController::new(&state).create(id, request).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success_with_message(record, "Abastecimiento registrado")),
    ))
}

async fn update_fuel_record(
    State(state): State<AppState>,
    Path((id, record_id)): Path<(u64, u64)>,
    payload: Result<Json<UpdateFuelRecordRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<FuelRecord>>, AppError> {
    let Json(request) = payload?;
    let record = FuelController::new(&state)
        .update(id, record_id, request)
        .await?;
    Ok(Json(ApiResponse::success_with_message(record, "Abastecimiento actualizado")))
}

async fn delete_fuel_record(
    State(state): State<AppState>,
    Path((id, record_id)): Path<(u64, u64)>,
    query: Result<Query<DeleteQuery>, QueryRejection>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let Query(query) = query?;
    FuelController::new(&state)
        .delete(id, record_id, query.confirm)
        .await?;
    Ok(Json(ApiResponse::message("Abastecimiento eliminado exitosamente")))
}
