use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};

use crate::controllers::report_controller::ReportController;
use crate::dto::report_dto::{CalendarQuery, CityQuery, MapQuery};
use crate::services::aggregation_service::{CalendarMonth, MapOverview};
use crate::services::city_catalog::CityEntry;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Vistas de sólo lectura: calendario, mapa y catálogo de ciudades
pub fn create_report_router() -> Router<AppState> {
    Router::new()
        .route("/calendar", get(calendar))
        .route("/map", get(map))
        .route("/cities", get(cities))
        .route("/states", get(states))
}

async fn calendar(
    State(state): State<AppState>,
    query: Result<Query<CalendarQuery>, QueryRejection>,
) -> Result<Json<CalendarMonth>, AppError> {
    let Query(query) = query?;
    let month = ReportController::new(&state).calendar(query).await?;
    Ok(Json(month))
}

async fn map(
    State(state): State<AppState>,
    query: Result<Query<MapQuery>, QueryRejection>,
) -> Result<Json<MapOverview>, AppError> {
    let Query(query) = query?;
    Ok(Json(ReportController::new(&state).map(query).await))
}

async fn cities(
    State(state): State<AppState>,
    query: Result<Query<CityQuery>, QueryRejection>,
) -> Result<Json<Vec<CityEntry>>, AppError> {
    let Query(query) = query?;
    Ok(Json(ReportController::new(&state).cities(query)))
}

async fn states(State(state): State<AppState>) -> Json<Vec<&'static str>> {
    Json(ReportController::new(&state).states())
}
