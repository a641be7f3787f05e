use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::fuel::FuelRecord;
use crate::models::machine::{Machine, MachineStatus};
use crate::models::maintenance::MaintenanceRecord;
use crate::services::aggregation_service::FuelTotals;
use crate::utils::validation::validate_not_blank;

// Request para registrar una máquina
#[derive(Debug, Deserialize, Validate)]
pub struct CreateMachineRequest {
    #[validate(custom = "validate_not_blank")]
    pub name: String,
    #[validate(custom = "validate_not_blank")]
    pub model: String,
    #[validate(custom = "validate_not_blank")]
    pub plate: String,
    #[serde(default)]
    pub status: MachineStatus,
}

// Request para actualizar una máquina
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateMachineRequest {
    #[validate(custom = "validate_not_blank")]
    pub name: Option<String>,
    #[validate(custom = "validate_not_blank")]
    pub model: Option<String>,
    #[validate(custom = "validate_not_blank")]
    pub plate: Option<String>,
    pub status: Option<MachineStatus>,
}

impl UpdateMachineRequest {
    pub fn apply_to(self, current: &Machine) -> Machine {
        Machine {
            id: current.id,
            name: self.name.unwrap_or_else(|| current.name.clone()),
            model: self.model.unwrap_or_else(|| current.model.clone()),
            plate: self.plate.unwrap_or_else(|| current.plate.clone()),
            status: self.status.unwrap_or(current.status),
        }
    }
}

// Historial de manutenciones de una máquina
#[derive(Debug, Serialize)]
pub struct MaintenanceLogResponse {
    pub machine: Machine,
    pub records: Vec<MaintenanceRecord>,
}

// Abastecimientos de una máquina con sus totales
#[derive(Debug, Serialize)]
pub struct FuelLedgerResponse {
    pub machine: Machine,
    pub records: Vec<FuelRecord>,
    pub totals: FuelTotals,
}
