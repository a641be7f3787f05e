use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use crate::models::maintenance::{MaintenanceRecord, MaintenanceStatus};
use crate::utils::formats::double_option;
use crate::utils::validation::validate_not_blank;

// Request para programar una manutención. El estado inicial es `scheduled`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateMaintenanceRequest {
    #[serde(rename = "type")]
    #[validate(custom = "validate_not_blank")]
    pub kind: String,
    #[validate(custom = "validate_not_blank")]
    pub description: String,
    pub scheduled_date: NaiveDate,
    #[serde(default)]
    pub attachments: Vec<String>,
}

// Body opcional de la acción "concluir"
#[derive(Debug, Default, Deserialize)]
pub struct CompleteMaintenanceRequest {
    pub completed_date: Option<NaiveDate>,
}

// Request de actualización parcial; `completed_date: null` la limpia.
// La máquina dueña del registro no se cambia por aquí.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateMaintenanceRequest {
    #[serde(rename = "type")]
    #[validate(custom = "validate_not_blank")]
    pub kind: Option<String>,
    #[validate(custom = "validate_not_blank")]
    pub description: Option<String>,
    pub scheduled_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "double_option")]
    pub completed_date: Option<Option<NaiveDate>>,
    pub status: Option<MaintenanceStatus>,
    pub attachments: Option<Vec<String>>,
}

impl UpdateMaintenanceRequest {
    pub fn apply_to(self, current: &MaintenanceRecord) -> MaintenanceRecord {
        MaintenanceRecord {
            id: current.id,
            machine_id: current.machine_id,
            machine_name: current.machine_name.clone(),
            kind: self.kind.unwrap_or_else(|| current.kind.clone()),
            description: self.description.unwrap_or_else(|| current.description.clone()),
            scheduled_date: self.scheduled_date.unwrap_or(current.scheduled_date),
            completed_date: self.completed_date.unwrap_or(current.completed_date),
            status: self.status.unwrap_or(current.status),
            attachments: self.attachments.unwrap_or_else(|| current.attachments.clone()),
        }
    }
}
