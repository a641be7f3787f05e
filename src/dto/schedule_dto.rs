use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::machine::Machine;
use crate::models::operator::Operator;
use crate::models::schedule::{Schedule, ScheduleStatus};
use crate::services::aggregation_service::StatusCounts;
use crate::utils::formats::{double_option, ClockTime, ScheduleDate};
use crate::utils::validation::validate_not_blank;

// Request para crear una programación. El estado inicial es siempre `scheduled`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateScheduleRequest {
    pub date: ScheduleDate,
    #[serde(default)]
    pub time: Option<ClockTime>,
    #[validate(custom = "validate_not_blank")]
    pub machine: String,
    #[validate(custom = "validate_not_blank")]
    pub operator: String,
    #[validate(custom = "validate_not_blank")]
    pub location: String,
    // Vacía: se hereda la placa de la máquina
    #[serde(default)]
    pub plate: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub attachments: Vec<String>,
}

// Request de actualización parcial: los campos ausentes se preservan,
// `null` limpia los campos opcionales.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateScheduleRequest {
    pub date: Option<ScheduleDate>,
    #[serde(default, deserialize_with = "double_option")]
    pub time: Option<Option<ClockTime>>,
    #[validate(custom = "validate_not_blank")]
    pub machine: Option<String>,
    #[validate(custom = "validate_not_blank")]
    pub operator: Option<String>,
    #[validate(custom = "validate_not_blank")]
    pub location: Option<String>,
    pub plate: Option<String>,
    pub status: Option<ScheduleStatus>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    pub attachments: Option<Vec<String>>,
}

impl UpdateScheduleRequest {
    /// Merge sobre una copia del registro actual
    pub fn apply_to(self, current: &Schedule) -> Schedule {
        Schedule {
            id: current.id,
            date: self.date.unwrap_or(current.date),
            time: self.time.unwrap_or(current.time),
            machine: self.machine.unwrap_or_else(|| current.machine.clone()),
            operator: self.operator.unwrap_or_else(|| current.operator.clone()),
            location: self.location.unwrap_or_else(|| current.location.clone()),
            plate: self.plate.unwrap_or_else(|| current.plate.clone()),
            status: self.status.unwrap_or(current.status),
            description: self.description.unwrap_or_else(|| current.description.clone()),
            attachments: self.attachments.unwrap_or_else(|| current.attachments.clone()),
        }
    }
}

// Filtros de la lista diaria (pestañas de estado + filtros de columna)
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ScheduleFilters {
    pub status: Option<ScheduleStatus>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub machine: Option<String>,
    pub operator: Option<String>,
    pub location: Option<String>,
    pub plate: Option<String>,
}

// Response de la lista diaria
#[derive(Debug, Serialize)]
pub struct ScheduleListResponse {
    pub schedules: Vec<Schedule>,
    pub counts: StatusCounts,
}

// Opciones del formulario: sólo máquinas y operadores activos
#[derive(Debug, Serialize)]
pub struct ScheduleFormOptions {
    pub machines: Vec<Machine>,
    pub operators: Vec<Operator>,
}
