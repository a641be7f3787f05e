use std::sync::Arc;

use chrono::{Datelike, Local};
use tokio::sync::RwLock;

use crate::database::ConsoleStore;
use crate::dto::report_dto::{CalendarQuery, CityQuery, MapQuery};
use crate::services::aggregation_service::{calendar_month, map_overview, CalendarMonth, MapOverview};
use crate::services::city_catalog::{self, CityEntry};
use crate::state::AppState;
use crate::utils::errors::{bad_request_error, validation_error, AppResult};
use crate::utils::formats::ScheduleDate;
use crate::utils::validation::validate_month;

pub struct ReportController {
    store: Arc<RwLock<ConsoleStore>>,
}

impl ReportController {
    pub fn new(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }

    /// Calendario mensual; sin parámetros se usa el mes en curso
    pub async fn calendar(&self, query: CalendarQuery) -> AppResult<CalendarMonth> {
        let today = Local::now().date_naive();
        let year = query.year.unwrap_or_else(|| today.year());
        let month = query.month.unwrap_or_else(|| today.month());
        validate_month(month).map_err(|_| validation_error("month", "Mes debe estar entre 1 y 12"))?;

        let store = self.store.read().await;
        calendar_month(store.schedules.all(), store.maintenance.all(), year, month)
            .ok_or_else(|| bad_request_error("Mes fuera del rango de fechas soportado"))
    }

    pub async fn map(&self, query: MapQuery) -> MapOverview {
        let date = query
            .date
            .unwrap_or_else(|| ScheduleDate::new(Local::now().date_naive()));
        map_overview(self.store.read().await.schedules.all(), date)
    }

    pub fn cities(&self, query: CityQuery) -> Vec<CityEntry> {
        city_catalog::search(query.state.as_deref(), query.q.as_deref())
    }

    /// Siglas para el selector de estado del formulario
    pub fn states(&self) -> Vec<&'static str> {
        city_catalog::states()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EnvironmentConfig;
    use crate::utils::errors::AppError;
    use assert_matches::assert_matches;

    fn controller() -> ReportController {
        ReportController::new(&AppState::from_config(EnvironmentConfig::default()))
    }

    #[tokio::test]
    async fn test_calendar_rejects_month_thirteen() {
        let result = controller()
            .calendar(CalendarQuery {
                year: Some(2025),
                month: Some(13),
            })
            .await;
        assert_matches!(result, Err(AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_calendar_of_sample_month() {
        let month = controller()
            .calendar(CalendarQuery {
                year: Some(2025),
                month: Some(11),
            })
            .await
            .unwrap();
        assert_eq!(month.days.len(), 30);
        // 1/11/2025 es sábado
        assert_eq!(month.leading_empty_days, 6);
        assert_eq!(month.days[23].schedules.len(), 6);
        assert_eq!(month.days[23].maintenance.len(), 3);
    }

    #[tokio::test]
    async fn test_map_of_sample_day() {
        let overview = controller()
            .map(MapQuery {
                date: ScheduleDate::from_ymd(2025, 11, 24),
            })
            .await;
        assert_eq!(overview.total_cities, 6);
        assert_eq!(overview.total_schedules, 6);
        assert_eq!(overview.total_operators, 6);
    }
}
