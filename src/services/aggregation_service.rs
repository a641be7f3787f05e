//! Agregaciones de sólo lectura
//!
//! Contadores por estado, filtros de la tabla, agrupación por ciudad,
//! calendario mensual y totales de combustible. Todas son funciones puras.

use std::collections::{BTreeMap, HashSet};

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::dto::schedule_dto::ScheduleFilters;
use crate::models::fuel::FuelRecord;
use crate::models::maintenance::MaintenanceRecord;
use crate::models::schedule::{Schedule, ScheduleStatus};
use crate::utils::formats::ScheduleDate;

/// Contadores para las pestañas de filtro
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub all: usize,
    pub scheduled: usize,
    pub in_progress: usize,
    pub completed: usize,
}

pub fn count_by_status(schedules: &[Schedule]) -> StatusCounts {
    schedules.iter().fold(StatusCounts::default(), |mut counts, s| {
        counts.all += 1;
        match s.status {
            ScheduleStatus::Scheduled => counts.scheduled += 1,
            ScheduleStatus::InProgress => counts.in_progress += 1,
            ScheduleStatus::Completed => counts.completed += 1,
        }
        counts
    })
}

fn contains_ci(haystack: &str, needle: &Option<String>) -> bool {
    match needle {
        Some(needle) => haystack.to_lowercase().contains(&needle.to_lowercase()),
        None => true,
    }
}

/// Filtro por estado más filtros de columna (subcadena, sin distinguir
/// mayúsculas) sobre fecha, horario, máquina, operador, ubicación y placa.
pub fn filter_schedules(schedules: &[Schedule], filters: &ScheduleFilters) -> Vec<Schedule> {
    schedules
        .iter()
        .filter(|s| filters.status.map_or(true, |status| s.status == status))
        .filter(|s| {
            let time = s.time.map(|t| t.to_string()).unwrap_or_default();
            contains_ci(&s.date.to_string(), &filters.date)
                && contains_ci(&time, &filters.time)
                && contains_ci(&s.machine, &filters.machine)
                && contains_ci(&s.operator, &filters.operator)
                && contains_ci(&s.location, &filters.location)
                && contains_ci(&s.plate, &filters.plate)
        })
        .cloned()
        .collect()
}

pub fn schedules_on(schedules: &[Schedule], date: ScheduleDate) -> Vec<Schedule> {
    schedules.iter().filter(|s| s.date == date).cloned().collect()
}

/// Ordenar por horario; las programaciones sin horario van primero
pub fn sort_by_time(schedules: &mut [Schedule]) {
    schedules.sort_by_key(|s| s.time);
}

/// Particionar por ciudad (texto antes de " - " en `location`)
pub fn group_by_city(schedules: &[Schedule]) -> BTreeMap<String, Vec<Schedule>> {
    let mut groups: BTreeMap<String, Vec<Schedule>> = BTreeMap::new();
    for schedule in schedules {
        groups
            .entry(schedule.city().to_string())
            .or_default()
            .push(schedule.clone());
    }
    groups
}

fn distinct_operators(schedules: &[Schedule]) -> usize {
    schedules
        .iter()
        .map(|s| s.operator.as_str())
        .collect::<HashSet<_>>()
        .len()
}

#[derive(Debug, Clone, Serialize)]
pub struct CityGroup {
    pub city: String,
    pub operator_count: usize,
    /// Programaciones no concluidas
    pub active_count: usize,
    pub schedules: Vec<Schedule>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MapOverview {
    pub date: ScheduleDate,
    pub total_cities: usize,
    pub total_operators: usize,
    pub total_schedules: usize,
    pub by_status: StatusCounts,
    pub cities: Vec<CityGroup>,
}

/// Vista "mapa": programaciones de un día agrupadas por ciudad
pub fn map_overview(schedules: &[Schedule], date: ScheduleDate) -> MapOverview {
    let of_day = schedules_on(schedules, date);
    let cities: Vec<CityGroup> = group_by_city(&of_day)
        .into_iter()
        .map(|(city, mut entries)| {
            sort_by_time(&mut entries);
            CityGroup {
                city,
                operator_count: distinct_operators(&entries),
                active_count: entries.iter().filter(|s| !s.status.is_completed()).count(),
                schedules: entries,
            }
        })
        .collect();

    MapOverview {
        date,
        total_cities: cities.len(),
        total_operators: distinct_operators(&of_day),
        total_schedules: of_day.len(),
        by_status: count_by_status(&of_day),
        cities,
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CalendarDay {
    pub date: ScheduleDate,
    pub schedules: Vec<Schedule>,
    pub maintenance: Vec<MaintenanceRecord>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CalendarMonth {
    pub year: i32,
    pub month: u32,
    /// Celdas vacías antes del día 1 (la semana empieza el domingo)
    pub leading_empty_days: u32,
    pub days: Vec<CalendarDay>,
}

/// Grilla mensual del calendario. `None` si el mes no existe.
pub fn calendar_month(
    schedules: &[Schedule],
    maintenance: &[MaintenanceRecord],
    year: i32,
    month: u32,
) -> Option<CalendarMonth> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let days = first
        .iter_days()
        .take_while(|day| day.month() == month)
        .map(|day| {
            let date = ScheduleDate::new(day);
            let mut of_day = schedules_on(schedules, date);
            sort_by_time(&mut of_day);
            CalendarDay {
                date,
                schedules: of_day,
                maintenance: maintenance
                    .iter()
                    .filter(|m| m.scheduled_date == day)
                    .cloned()
                    .collect(),
            }
        })
        .collect();

    Some(CalendarMonth {
        year,
        month,
        leading_empty_days: first.weekday().num_days_from_sunday(),
        days,
    })
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FuelTotals {
    pub record_count: usize,
    pub liters: Decimal,
    pub total_value: Decimal,
}

/// Litros y valor gastado de una máquina
pub fn fuel_totals(records: &[FuelRecord], machine_id: u64) -> FuelTotals {
    records
        .iter()
        .filter(|r| r.machine_id == machine_id)
        .fold(FuelTotals::default(), |mut totals, r| {
            totals.record_count += 1;
            totals.liters += r.liters;
            totals.total_value += r.total_value;
            totals
        })
}
