//! Modelo de MaintenanceRecord

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::database::collection::Record;

/// Estado de la manutención: `Scheduled -> Completed`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum MaintenanceStatus {
    #[default]
    Scheduled,
    Completed,
}

/// Manutención planificada o realizada sobre una máquina.
///
/// `machine_name` es un cache del nombre de la máquina; se actualiza en
/// cascada cuando la máquina se renombra.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaintenanceRecord {
    pub id: u64,
    pub machine_id: u64,
    pub machine_name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub scheduled_date: NaiveDate,
    pub completed_date: Option<NaiveDate>,
    pub status: MaintenanceStatus,
    pub attachments: Vec<String>,
}

impl MaintenanceRecord {
    pub fn complete(&mut self, on: NaiveDate) {
        self.status = MaintenanceStatus::Completed;
        self.completed_date = Some(on);
    }
}

impl Record for MaintenanceRecord {
    fn id(&self) -> u64 {
        self.id
    }
}
