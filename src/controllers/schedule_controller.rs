use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{info, warn};
use validator::Validate;

use crate::database::ConsoleStore;
use crate::dto::schedule_dto::{
    CreateScheduleRequest, ScheduleFilters, ScheduleFormOptions, ScheduleListResponse,
    UpdateScheduleRequest,
};
use crate::models::schedule::{Schedule, ScheduleStatus};
use crate::services::aggregation_service::{count_by_status, filter_schedules, StatusCounts};
use crate::services::conflict_checker::{find_conflict, ScheduleSlot};
use crate::state::{AppState, ConsoleSession};
use crate::utils::errors::{confirmation_required_error, not_found_error, AppError, AppResult};
use crate::utils::validation::is_confirmed;

pub struct ScheduleController {
    store: Arc<RwLock<ConsoleStore>>,
    session: Arc<RwLock<ConsoleSession>>,
}

fn conflict_error(conflicting: &Schedule) -> AppError {
    let time = conflicting
        .time
        .map(|t| t.to_string())
        .unwrap_or_else(|| "sin horario".to_string());
    AppError::ScheduleConflict(format!(
        "El operador '{}' ya tiene la programación {} el {} ({})",
        conflicting.operator, conflicting.id, conflicting.date, time
    ))
}

impl ScheduleController {
    pub fn new(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
            session: state.session.clone(),
        }
    }

    /// Lista filtrada; los contadores siempre cubren la colección completa
    pub async fn list(&self, filters: ScheduleFilters) -> ScheduleListResponse {
        let store = self.store.read().await;
        let all = store.schedules.all();
        ScheduleListResponse {
            schedules: filter_schedules(all, &filters),
            counts: count_by_status(all),
        }
    }

    pub async fn counts(&self) -> StatusCounts {
        count_by_status(self.store.read().await.schedules.all())
    }

    pub async fn form_options(&self) -> ScheduleFormOptions {
        let store = self.store.read().await;
        ScheduleFormOptions {
            machines: store
                .machines
                .all()
                .iter()
                .filter(|m| m.is_available())
                .cloned()
                .collect(),
            operators: store
                .operators
                .all()
                .iter()
                .filter(|o| o.is_available())
                .cloned()
                .collect(),
        }
    }

    pub async fn get_by_id(&self, id: u64) -> AppResult<Schedule> {
        self.store
            .read()
            .await
            .schedules
            .get(id)
            .cloned()
            .ok_or_else(|| not_found_error("Schedule", id))
    }

    pub async fn create(&self, request: CreateScheduleRequest) -> AppResult<Schedule> {
        request.validate()?;

        let created = {
            let mut store = self.store.write().await;

            // Heredar la placa de la máquina seleccionada
            let plate = if request.plate.trim().is_empty() {
                store
                    .machine_by_name(&request.machine)
                    .map(|m| m.plate.clone())
                    .unwrap_or_default()
            } else {
                request.plate
            };

            let candidate = ScheduleSlot {
                operator: &request.operator,
                date: request.date,
                time: request.time,
                status: ScheduleStatus::Scheduled,
            };
            if let Some(conflicting) = find_conflict(store.schedules.all(), candidate, None) {
                warn!("⚠️ Programación rechazada por conflicto con {}", conflicting.id);
                return Err(conflict_error(conflicting));
            }

            store.schedules.insert_with(|id| Schedule {
                id,
                date: request.date,
                time: request.time,
                machine: request.machine,
                operator: request.operator,
                location: request.location,
                plate,
                status: ScheduleStatus::Scheduled,
                description: request.description,
                attachments: request.attachments,
            })
        };

        self.session.write().await.navigator.back_to_list();
        info!("✅ Programación {} creada para '{}'", created.id, created.operator);
        Ok(created)
    }

    /// Merge parcial; el registro resultante se verifica contra los demás
    pub async fn update(&self, id: u64, request: UpdateScheduleRequest) -> AppResult<Schedule> {
        request.validate()?;

        let updated = {
            let mut store = self.store.write().await;
            let current = store
                .schedules
                .get(id)
                .ok_or_else(|| not_found_error("Schedule", id))?;
            let merged = request.apply_to(current);

            if let Some(conflicting) =
                find_conflict(store.schedules.all(), ScheduleSlot::from(&merged), Some(id))
            {
                warn!("⚠️ Actualización de {} rechazada por conflicto con {}", id, conflicting.id);
                return Err(conflict_error(conflicting));
            }

            store.schedules.replace(merged.clone());
            merged
        };

        self.session.write().await.navigator.back_to_list();
        info!("✅ Programación {} actualizada ({})", id, updated.status.as_str());
        Ok(updated)
    }

    /// Acción "finalizar": fija `completed`
    pub async fn complete(&self, id: u64) -> AppResult<Schedule> {
        let mut store = self.store.write().await;
        let mut schedule = store
            .schedules
            .get(id)
            .cloned()
            .ok_or_else(|| not_found_error("Schedule", id))?;
        schedule.status = ScheduleStatus::Completed;
        store.schedules.replace(schedule.clone());

        info!("✅ Programación {} concluida", id);
        Ok(schedule)
    }

    pub async fn delete(&self, id: u64, confirm: Option<bool>) -> AppResult<()> {
        if !is_confirmed(confirm) {
            return Err(confirmation_required_error("schedule", id));
        }

        self.store
            .write()
            .await
            .schedules
            .remove(id)
            .ok_or_else(|| not_found_error("Schedule", id))?;

        info!("🗑️ Programación {} eliminada", id);
        Ok(())
    }
}
