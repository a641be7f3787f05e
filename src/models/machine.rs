//! Modelo de Machine
//!
//! Máquinas (guindastes, caminhões munck) disponibles para programación.

use serde::{Deserialize, Serialize};

use crate::database::collection::Record;

/// Estado de la máquina
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum MachineStatus {
    #[default]
    Active,
    Maintenance,
    Inactive,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Machine {
    pub id: u64,
    pub name: String,
    pub model: String,
    pub plate: String,
    pub status: MachineStatus,
}

impl Machine {
    /// Sólo las máquinas activas se ofrecen en el formulario de programación
    pub fn is_available(&self) -> bool {
        self.status == MachineStatus::Active
    }
}

impl Record for Machine {
    fn id(&self) -> u64 {
        self.id
    }
}
