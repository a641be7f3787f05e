//! Modelo de Schedule
//!
//! Una programación asigna una máquina y un operador a una ubicación en un
//! día (y opcionalmente un horario) determinado.

use serde::{Deserialize, Serialize};

use crate::database::collection::Record;
use crate::utils::formats::{ClockTime, ScheduleDate};

/// Separador entre ciudad y estado en `location` ("Vitória - ES")
pub const LOCATION_SEPARATOR: &str = " - ";

/// Estado de la programación
///
/// El orden sugerido es `Scheduled -> InProgress -> Completed`, pero la
/// edición puede fijar cualquiera de los tres, incluso revertir `Completed`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "kebab-case")]
pub enum ScheduleStatus {
    Scheduled,
    InProgress,
    Completed,
}

impl ScheduleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScheduleStatus::Scheduled => "scheduled",
            ScheduleStatus::InProgress => "in-progress",
            ScheduleStatus::Completed => "completed",
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, ScheduleStatus::Completed)
    }
}

/// Programación de campo
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Schedule {
    pub id: u64,
    pub date: ScheduleDate,
    pub time: Option<ClockTime>,
    pub machine: String,
    pub operator: String,
    pub location: String,
    pub plate: String,
    pub status: ScheduleStatus,
    pub description: Option<String>,
    pub attachments: Vec<String>,
}

impl Schedule {
    /// Ciudad de la ubicación (texto antes de " - ")
    pub fn city(&self) -> &str {
        city_of(&self.location)
    }
}

impl Record for Schedule {
    fn id(&self) -> u64 {
        self.id
    }
}

/// Extraer la ciudad de una ubicación "Ciudad - UF".
///
/// Es una convención textual: sin separador, la ubicación entera es la clave.
pub fn city_of(location: &str) -> &str {
    location
        .split(LOCATION_SEPARATOR)
        .next()
        .unwrap_or(location)
}
