use std::sync::Arc;

use chrono::Local;
use tokio::sync::RwLock;
use tracing::info;
use validator::Validate;

use crate::database::ConsoleStore;
use crate::dto::machine_dto::MaintenanceLogResponse;
use crate::dto::maintenance_dto::{
    CompleteMaintenanceRequest, CreateMaintenanceRequest, UpdateMaintenanceRequest,
};
use crate::models::maintenance::{MaintenanceRecord, MaintenanceStatus};
use crate::state::AppState;
use crate::utils::errors::{confirmation_required_error, not_found_error, AppResult};
use crate::utils::validation::is_confirmed;

pub struct MaintenanceController {
    store: Arc<RwLock<ConsoleStore>>,
}

impl MaintenanceController {
    pub fn new(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }

    pub async fn list_for_machine(&self, machine_id: u64) -> AppResult<MaintenanceLogResponse> {
        let store = self.store.read().await;
        let machine = store
            .machines
            .get(machine_id)
            .cloned()
            .ok_or_else(|| not_found_error("Machine", machine_id))?;

        Ok(MaintenanceLogResponse {
            records: store.maintenance_for(machine_id),
            machine,
        })
    }

    /// El nombre de la máquina se copia al registro en el momento de crearlo
    pub async fn create(
        &self,
        machine_id: u64,
        request: CreateMaintenanceRequest,
    ) -> AppResult<MaintenanceRecord> {
        request.validate()?;

        let mut store = self.store.write().await;
        let machine_name = store
            .machines
            .get(machine_id)
            .map(|m| m.name.clone())
            .ok_or_else(|| not_found_error("Machine", machine_id))?;

        let record = store.maintenance.insert_with(|id| MaintenanceRecord {
            id,
            machine_id,
            machine_name,
            kind: request.kind,
            description: request.description,
            scheduled_date: request.scheduled_date,
            completed_date: None,
            status: MaintenanceStatus::Scheduled,
            attachments: request.attachments,
        });

        info!("🔧 Manutención {} programada para la máquina {}", record.id, machine_id);
        Ok(record)
    }

    fn owned_record(
        store: &ConsoleStore,
        machine_id: u64,
        record_id: u64,
    ) -> AppResult<MaintenanceRecord> {
        store
            .maintenance
            .get(record_id)
            .filter(|r| r.machine_id == machine_id)
            .cloned()
            .ok_or_else(|| not_found_error("Maintenance record", record_id))
    }

    pub async fn update(
        &self,
        machine_id: u64,
        record_id: u64,
        request: UpdateMaintenanceRequest,
    ) -> AppResult<MaintenanceRecord> {
        request.validate()?;

        let mut store = self.store.write().await;
        let current = Self::owned_record(&store, machine_id, record_id)?;
        let updated = request.apply_to(&current);
        store.maintenance.replace(updated.clone());

        info!("✅ Manutención {} actualizada", record_id);
        Ok(updated)
    }

    pub async fn complete(
        &self,
        machine_id: u64,
        record_id: u64,
        request: CompleteMaintenanceRequest,
    ) -> AppResult<MaintenanceRecord> {
        let mut store = self.store.write().await;
        let mut record = Self::owned_record(&store, machine_id, record_id)?;
        record.complete(
            request
                .completed_date
                .unwrap_or_else(|| Local::now().date_naive()),
        );
        store.maintenance.replace(record.clone());

        info!("✅ Manutención {} concluida", record_id);
        Ok(record)
    }

    pub async fn delete(&self, machine_id: u64, record_id: u64, confirm: Option<bool>) -> AppResult<()> {
        if !is_confirmed(confirm) {
            return Err(confirmation_required_error("maintenance record", record_id));
        }

        let mut store = self.store.write().await;
        store
            .maintenance
            .remove_where(record_id, |r| r.machine_id == machine_id)
            .ok_or_else(|| not_found_error("Maintenance record", record_id))?;

        info!("🗑️ Manutención {} eliminada", record_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EnvironmentConfig;
    use crate::utils::errors::AppError;
    use assert_matches::assert_matches;
    use chrono::NaiveDate;

    fn setup() -> (AppState, MaintenanceController) {
        let state = AppState::from_config(EnvironmentConfig::default());
        let controller = MaintenanceController::new(&state);
        (state, controller)
    }

    fn oil_change() -> CreateMaintenanceRequest {
        serde_json::from_value(serde_json::json!({
            "type": "preventiva",
            "description": "Troca de óleo",
            "scheduled_date": "2025-12-01"
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_create_copies_machine_name_and_starts_scheduled() {
        let (_, controller) = setup();
        let record = controller.create(2, oil_change()).await.unwrap();
        assert_eq!(record.id, 4);
        assert_eq!(record.machine_name, "BG");
        assert_eq!(record.status, MaintenanceStatus::Scheduled);
        assert_eq!(record.completed_date, None);
    }

    #[tokio::test]
    async fn test_create_for_unknown_machine_is_not_found() {
        let (_, controller) = setup();
        assert_matches!(controller.create(42, oil_change()).await, Err(AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_complete_stamps_date() {
        let (_, controller) = setup();
        let record = controller.create(1, oil_change()).await.unwrap();
        let done = controller
            .complete(
                1,
                record.id,
                CompleteMaintenanceRequest {
                    completed_date: NaiveDate::from_ymd_opt(2025, 12, 2),
                },
            )
            .await
            .unwrap();
        assert_eq!(done.status, MaintenanceStatus::Completed);
        assert_eq!(done.completed_date, NaiveDate::from_ymd_opt(2025, 12, 2));
    }

    #[tokio::test]
    async fn test_record_of_other_machine_is_not_reachable() {
        let (state, controller) = setup();
        assert_matches!(
            controller.delete(2, 1, Some(true)).await,
            Err(AppError::NotFound(_))
        );
        assert!(state.store.read().await.maintenance.contains(1));

        let log = controller.list_for_machine(2).await.unwrap();
        assert_eq!(log.records.len(), 1);
        assert_eq!(log.records[0].id, 2);
    }

    #[tokio::test]
    async fn test_update_keeps_machine_and_unspecified_fields() {
        let (_, controller) = setup();
        let before = controller.list_for_machine(1).await.unwrap().records[0].clone();

        let patch: UpdateMaintenanceRequest =
            serde_json::from_value(serde_json::json!({ "scheduled_date": "2025-11-26" })).unwrap();
        let after = controller.update(1, before.id, patch).await.unwrap();

        assert_eq!(
            after,
            MaintenanceRecord {
                scheduled_date: NaiveDate::from_ymd_opt(2025, 11, 26).unwrap(),
                ..before
            }
        );
    }

    #[tokio::test]
    async fn test_update_of_other_machine_record_is_not_found() {
        let (state, controller) = setup();
        let patch: UpdateMaintenanceRequest =
            serde_json::from_value(serde_json::json!({ "description": "Outra" })).unwrap();
        assert_matches!(controller.update(2, 1, patch).await, Err(AppError::NotFound(_)));

        let store = state.store.read().await;
        assert_ne!(store.maintenance.get(1).unwrap().description, "Outra");
    }
}
