use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::info;
use validator::Validate;

use crate::database::ConsoleStore;
use crate::dto::machine_dto::{CreateMachineRequest, UpdateMachineRequest};
use crate::models::machine::Machine;
use crate::state::AppState;
use crate::utils::errors::{confirmation_required_error, not_found_error, AppResult};
use crate::utils::validation::is_confirmed;

pub struct MachineController {
    store: Arc<RwLock<ConsoleStore>>,
}

impl MachineController {
    pub fn new(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }

    pub async fn list(&self) -> Vec<Machine> {
        self.store.read().await.machines.all().to_vec()
    }

    pub async fn get_by_id(&self, id: u64) -> AppResult<Machine> {
        self.store
            .read()
            .await
            .machines
            .get(id)
            .cloned()
            .ok_or_else(|| not_found_error("Machine", id))
    }

    pub async fn create(&self, request: CreateMachineRequest) -> AppResult<Machine> {
        request.validate()?;

        let machine = self.store.write().await.machines.insert_with(|id| Machine {
            id,
            name: request.name,
            model: request.model,
            plate: request.plate,
            status: request.status,
        });

        info!("✅ Máquina {} '{}' registrada", machine.id, machine.name);
        Ok(machine)
    }

    /// Un cambio de nombre se propaga a los caches de manutención y combustible
    pub async fn update(&self, id: u64, request: UpdateMachineRequest) -> AppResult<Machine> {
        request.validate()?;

        let mut store = self.store.write().await;
        let current = store
            .machines
            .get(id)
            .ok_or_else(|| not_found_error("Machine", id))?;
        let renamed = request.name.as_ref().is_some_and(|name| *name != current.name);
        let updated = request.apply_to(current);
        store.machines.replace(updated.clone());

        if renamed {
            let touched = store.cascade_machine_name(id, &updated.name);
            info!("🔁 Nombre de máquina {} propagado a {} registros", id, touched);
        }

        info!("✅ Máquina {} actualizada", id);
        Ok(updated)
    }

    /// No hay cascada: manutenciones, abastecimientos y programaciones
    /// que referencian la máquina se conservan.
    pub async fn delete(&self, id: u64, confirm: Option<bool>) -> AppResult<()> {
        if !is_confirmed(confirm) {
            return Err(confirmation_required_error("machine", id));
        }

        self.store
            .write()
            .await
            .machines
            .remove(id)
            .ok_or_else(|| not_found_error("Machine", id))?;

        info!("🗑️ Máquina {} eliminada", id);
        Ok(())
    }
}
