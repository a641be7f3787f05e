//! Verificación de conflictos de agenda
//!
//! Un candidato choca con otra programación no concluida que comparta
//! operador, día y horario. El estado del propio candidato no cuenta. Sólo igualdad exacta: no hay duraciones ni
//! solapamientos. Un horario ausente es una clave más (`None == None`).

use crate::models::schedule::{Schedule, ScheduleStatus};
use crate::utils::formats::{ClockTime, ScheduleDate};

/// Franja candidata a insertar o actualizar. `status` viaja con la franja
/// pero no interviene en la comparación.
#[derive(Debug, Clone, Copy)]
pub struct ScheduleSlot<'a> {
    pub operator: &'a str,
    pub date: ScheduleDate,
    pub time: Option<ClockTime>,
    pub status: ScheduleStatus,
}

impl<'a> From<&'a Schedule> for ScheduleSlot<'a> {
    fn from(schedule: &'a Schedule) -> Self {
        Self {
            operator: &schedule.operator,
            date: schedule.date,
            time: schedule.time,
            status: schedule.status,
        }
    }
}

/// Primera programación que choca con el candidato.
///
/// `exclude_id` es el id del propio registro en una actualización.
pub fn find_conflict<'s>(
    schedules: &'s [Schedule],
    candidate: ScheduleSlot<'_>,
    exclude_id: Option<u64>,
) -> Option<&'s Schedule> {
    schedules.iter().find(|s| {
        Some(s.id) != exclude_id
            && s.operator == candidate.operator
            && s.date == candidate.date
            && s.time == candidate.time
            && !s.status.is_completed()
    })
}

pub fn has_conflict(
    schedules: &[Schedule],
    candidate: ScheduleSlot<'_>,
    exclude_id: Option<u64>,
) -> bool {
    find_conflict(schedules, candidate, exclude_id).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schedule(id: u64, operator: &str, time: Option<(u32, u32)>, status: ScheduleStatus) -> Schedule {
        Schedule {
            id,
            date: "24/11/2025".parse().unwrap(),
            time: time.and_then(|(h, m)| ClockTime::from_hm(h, m)),
            machine: "Prassi".to_string(),
            operator: operator.to_string(),
            location: "Viana - ES".to_string(),
            plate: "ABC-1234".to_string(),
            status,
            description: None,
            attachments: vec![],
        }
    }

    fn slot<'a>(operator: &'a str, time: Option<(u32, u32)>) -> ScheduleSlot<'a> {
        ScheduleSlot {
            operator,
            date: "24/11/2025".parse().unwrap(),
            time: time.and_then(|(h, m)| ClockTime::from_hm(h, m)),
            status: ScheduleStatus::Scheduled,
        }
    }

    #[test]
    fn test_same_operator_date_and_time_conflicts() {
        let existing = vec![schedule(1, "Igor Silva", Some((8, 0)), ScheduleStatus::Scheduled)];
        assert!(has_conflict(&existing, slot("Igor Silva", Some((8, 0))), None));
    }

    #[test]
    fn test_in_progress_schedule_also_blocks() {
        let existing = vec![schedule(1, "Igor Silva", Some((8, 0)), ScheduleStatus::InProgress)];
        assert!(has_conflict(&existing, slot("Igor Silva", Some((8, 0))), None));
    }

    #[test]
    fn test_completed_schedule_never_blocks() {
        let existing = vec![schedule(1, "Igor Silva", Some((8, 0)), ScheduleStatus::Completed)];
        assert!(!has_conflict(&existing, slot("Igor Silva", Some((8, 0))), None));
    }

    #[test]
    fn test_different_operator_or_time_is_free() {
        let existing = vec![schedule(1, "Igor Silva", Some((8, 0)), ScheduleStatus::Scheduled)];
        assert!(!has_conflict(&existing, slot("João Santos", Some((8, 0))), None));
        // sin razonamiento de duración: 08:30 no choca con 08:00
        assert!(!has_conflict(&existing, slot("Igor Silva", Some((8, 30))), None));

        let mut other_day = slot("Igor Silva", Some((8, 0)));
        other_day.date = "25/11/2025".parse().unwrap();
        assert!(!has_conflict(&existing, other_day, None));
    }

    #[test]
    fn test_missing_time_is_an_equality_key() {
        let existing = vec![schedule(1, "Igor Silva", None, ScheduleStatus::Scheduled)];
        assert!(has_conflict(&existing, slot("Igor Silva", None), None));
        assert!(!has_conflict(&existing, slot("Igor Silva", Some((8, 0))), None));
    }

    #[test]
    fn test_update_excludes_own_record() {
        let existing = vec![
            schedule(1, "Igor Silva", Some((8, 0)), ScheduleStatus::Scheduled),
            schedule(2, "Igor Silva", Some((9, 0)), ScheduleStatus::Scheduled),
        ];
        assert!(!has_conflict(&existing, slot("Igor Silva", Some((8, 0))), Some(1)));
        let found = find_conflict(&existing, slot("Igor Silva", Some((9, 0))), Some(1));
        assert_eq!(found.map(|s| s.id), Some(2));
    }

    #[test]
    fn test_marking_candidate_completed_does_not_free_an_occupied_slot() {
        let existing = vec![schedule(1, "Igor Silva", Some((8, 0)), ScheduleStatus::Scheduled)];
        let mut candidate = slot("Igor Silva", Some((8, 0)));
        candidate.status = ScheduleStatus::Completed;
        let found = find_conflict(&existing, candidate, Some(2));
        assert_eq!(found.map(|s| s.id), Some(1));
    }
}
