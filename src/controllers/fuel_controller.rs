use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::info;
use validator::Validate;

use crate::database::ConsoleStore;
use crate::dto::fuel_dto::{CreateFuelRecordRequest, UpdateFuelRecordRequest};
use crate::dto::machine_dto::FuelLedgerResponse;
use crate::models::fuel::FuelRecord;
use crate::services::aggregation_service::fuel_totals;
use crate::state::AppState;
use crate::utils::errors::{confirmation_required_error, not_found_error, AppResult};
use crate::utils::validation::is_confirmed;

pub struct FuelController {
    store: Arc<RwLock<ConsoleStore>>,
}

impl FuelController {
    pub fn new(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }

    /// Abastecimientos de la máquina con litros y valor totales
    pub async fn ledger(&self, machine_id: u64) -> AppResult<FuelLedgerResponse> {
        let store = self.store.read().await;
        let machine = store
            .machines
            .get(machine_id)
            .cloned()
            .ok_or_else(|| not_found_error("Machine", machine_id))?;

        Ok(FuelLedgerResponse {
            records: store.fuel_for(machine_id),
            totals: fuel_totals(store.fuel.all(), machine_id),
            machine,
        })
    }

    pub async fn create(
        &self,
        machine_id: u64,
        request: CreateFuelRecordRequest,
    ) -> AppResult<FuelRecord> {
        request.validate()?;

        let mut store = self.store.write().await;
        let machine_name = store
            .machines
            .get(machine_id)
            .map(|m| m.name.clone())
            .ok_or_else(|| not_found_error("Machine", machine_id))?;

        let record = store.fuel.insert_with(|id| FuelRecord {
            id,
            machine_id,
            machine_name,
            date: request.date,
            liters: request.liters,
            total_value: request.total_value,
            odometer: request.odometer,
            payment_status: request.payment_status,
            description: request.description,
            attachments: request.attachments,
        });

        info!("⛽ Abastecimiento {} registrado para la máquina {}", record.id, machine_id);
        Ok(record)
    }

    /// Sólo alcanza los abastecimientos de la propia máquina
    pub async fn update(
        &self,
        machine_id: u64,
        record_id: u64,
        request: UpdateFuelRecordRequest,
    ) -> AppResult<FuelRecord> {
        request.validate()?;

        let mut store = self.store.write().await;
        let updated = request.apply_to(
            store
                .fuel
                .get(record_id)
                .filter(|r| r.machine_id == machine_id)
                .ok_or_else(|| not_found_error("Fuel record", record_id))?,
        );
        store.fuel.replace(updated.clone());

        info!("✅ Abastecimiento {} actualizado", record_id);
        Ok(updated)
    }

    pub async fn delete(&self, machine_id: u64, record_id: u64, confirm: Option<bool>) -> AppResult<()> {
        if !is_confirmed(confirm) {
            return Err(confirmation_required_error("fuel record", record_id));
        }

        let mut store = self.store.write().await;
        store
            .fuel
            .remove_where(record_id, |r| r.machine_id == machine_id)
            .ok_or_else(|| not_found_error("Fuel record", record_id))?;

        info!("🗑️ Abastecimiento {} eliminado", record_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EnvironmentConfig;
    use crate::models::fuel::PaymentStatus;
    use crate::utils::errors::AppError;
    use assert_matches::assert_matches;
    use rust_decimal::Decimal;

    #[tokio::test]
    async fn test_totals_include_new_record() {
        let state = AppState::from_config(EnvironmentConfig::default());
        let controller = FuelController::new(&state);

        let request: CreateFuelRecordRequest = serde_json::from_value(serde_json::json!({
            "date": "2025-11-25",
            "liters": 50,
            "total_value": "275.50",
            "payment_status": "reimbursed"
        }))
        .unwrap();
        let record = controller.create(1, request).await.unwrap();
        assert_eq!(record.machine_name, "Prassi");

        let ledger = controller.ledger(1).await.unwrap();
        assert_eq!(ledger.records.len(), 2);
        assert_eq!(ledger.totals.liters, Decimal::from(150));
        assert_eq!(ledger.totals.total_value, Decimal::new(77550, 2));
    }

    #[tokio::test]
    async fn test_update_moves_totals_and_keeps_the_rest() {
        let state = AppState::from_config(EnvironmentConfig::default());
        let controller = FuelController::new(&state);
        let before = controller.ledger(1).await.unwrap().records[0].clone();

        let patch: UpdateFuelRecordRequest =
            serde_json::from_value(serde_json::json!({ "liters": 80 })).unwrap();
        let after = controller.update(1, before.id, patch).await.unwrap();

        assert_eq!(after, FuelRecord { liters: Decimal::from(80), ..before.clone() });
        assert_eq!(controller.ledger(1).await.unwrap().totals.liters, Decimal::from(80));
    }

    #[tokio::test]
    async fn test_record_of_other_machine_is_not_reachable() {
        let state = AppState::from_config(EnvironmentConfig::default());
        let controller = FuelController::new(&state);

        let patch: UpdateFuelRecordRequest =
            serde_json::from_value(serde_json::json!({ "payment_status": "reimbursed" })).unwrap();
        assert_matches!(controller.update(2, 1, patch).await, Err(AppError::NotFound(_)));
        assert_matches!(controller.delete(2, 1, Some(true)).await, Err(AppError::NotFound(_)));

        let store = state.store.read().await;
        assert_ne!(store.fuel.get(1).unwrap().payment_status, PaymentStatus::Reimbursed);
    }
}
