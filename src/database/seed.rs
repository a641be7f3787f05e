//! Datos de ejemplo
//!
//! Registros con los que arranca la consola cuando `SEED_SAMPLE_DATA` está
//! activo. Se pierden al reiniciar el proceso.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::database::collection::Collection;
use crate::database::store::ConsoleStore;
use crate::models::fuel::{FuelRecord, PaymentStatus};
use crate::models::machine::{Machine, MachineStatus};
use crate::models::maintenance::{MaintenanceRecord, MaintenanceStatus};
use crate::models::operator::{Operator, OperatorStatus};
use crate::models::schedule::{Schedule, ScheduleStatus};
use crate::utils::formats::{ClockTime, ScheduleDate};

const SAMPLE_PASSWORD: &str = "senha123";

fn sample_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 11, 24).unwrap_or_default()
}

/// Store con los registros de ejemplo
pub fn seeded_store() -> ConsoleStore {
    ConsoleStore {
        schedules: Collection::from_records(sample_schedules()),
        machines: Collection::from_records(sample_machines()),
        operators: Collection::from_records(sample_operators()),
        maintenance: Collection::from_records(sample_maintenance()),
        fuel: Collection::from_records(sample_fuel()),
    }
}

fn schedule(
    id: u64,
    hour: u32,
    machine: &str,
    operator: &str,
    location: &str,
    plate: &str,
    status: ScheduleStatus,
    description: &str,
) -> Schedule {
    Schedule {
        id,
        date: ScheduleDate::new(sample_day()),
        time: ClockTime::from_hm(hour, 0),
        machine: machine.to_string(),
        operator: operator.to_string(),
        location: location.to_string(),
        plate: plate.to_string(),
        status,
        description: Some(description.to_string()),
        attachments: Vec::new(),
    }
}

fn sample_schedules() -> Vec<Schedule> {
    use ScheduleStatus::*;
    vec![
        schedule(1, 8, "Prassi", "Igor Silva", "Viana - ES", "ABC-1234", InProgress, "Manutenção preventiva da máquina"),
        schedule(2, 9, "BG", "João Santos", "Vila Velha - ES", "XYZ-5678", Scheduled, "Instalação de equipamento"),
        schedule(3, 10, "Prassi", "Pedro Costa", "Cariacica - ES", "ABC-1234", Completed, "Serviço de içamento"),
        schedule(4, 14, "Guzzo", "Mateus Oliveira", "Vitória - ES", "GHI-3456", Scheduled, "Transporte de carga"),
        schedule(5, 15, "BG", "Carlos Ferreira", "Serra - ES", "XYZ-5678", InProgress, "Montagem de estrutura"),
        schedule(6, 16, "Prassi", "Lucas Almeida", "Guarapari - ES", "ABC-1234", Scheduled, "Desmontagem de equipamento"),
    ]
}

fn sample_machines() -> Vec<Machine> {
    [
        (1, "Prassi", "2024", "ABC-1234"),
        (2, "BG", "Premium", "XYZ-5678"),
        (3, "Guzzo", "Standard", "GHI-3456"),
    ]
    .into_iter()
    .map(|(id, name, model, plate)| Machine {
        id,
        name: name.to_string(),
        model: model.to_string(),
        plate: plate.to_string(),
        status: MachineStatus::Active,
    })
    .collect()
}

fn sample_operators() -> Vec<Operator> {
    [
        (1, "Igor Silva", "(27) 99999-1111", "igor@email.com"),
        (2, "João Santos", "(27) 99999-2222", "joao@email.com"),
        (3, "Pedro Costa", "(27) 99999-3333", "pedro@email.com"),
        (4, "Mateus Oliveira", "(27) 99999-4444", "mateus@email.com"),
        (5, "Carlos Ferreira", "(27) 99999-5555", "carlos@email.com"),
        (6, "Lucas Almeida", "(27) 99999-6666", "lucas@email.com"),
    ]
    .into_iter()
    .map(|(id, name, phone, email)| Operator {
        id,
        name: name.to_string(),
        phone: phone.to_string(),
        email: email.to_string(),
        password: SAMPLE_PASSWORD.to_string(),
        status: OperatorStatus::Active,
    })
    .collect()
}

fn sample_maintenance() -> Vec<MaintenanceRecord> {
    [
        (1, 1, "Prassi", "preventiva", "Troca de óleo"),
        (2, 2, "BG", "corretiva", "Reparo de motor"),
        (3, 3, "Guzzo", "preventiva", "Limpeza de filtros"),
    ]
    .into_iter()
    .map(|(id, machine_id, machine_name, kind, description)| MaintenanceRecord {
        id,
        machine_id,
        machine_name: machine_name.to_string(),
        kind: kind.to_string(),
        description: description.to_string(),
        scheduled_date: sample_day(),
        completed_date: Some(sample_day()),
        status: MaintenanceStatus::Completed,
        attachments: Vec::new(),
    })
    .collect()
}

fn sample_fuel() -> Vec<FuelRecord> {
    [
        (1, 1, "Prassi", 100, 500, 50_000),
        (2, 2, "BG", 150, 750, 60_000),
        (3, 3, "Guzzo", 120, 600, 55_000),
    ]
    .into_iter()
    .map(|(id, machine_id, machine_name, liters, total, odometer)| FuelRecord {
        id,
        machine_id,
        machine_name: machine_name.to_string(),
        date: sample_day(),
        liters: Decimal::from(liters),
        total_value: Decimal::from(total),
        odometer: Some(Decimal::from(odometer)),
        payment_status: PaymentStatus::Paid,
        description: Some("Abastecimento diário".to_string()),
        attachments: Vec::new(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_sizes() {
        let store = seeded_store();
        assert_eq!(store.schedules.len(), 6);
        assert_eq!(store.machines.len(), 3);
        assert_eq!(store.operators.len(), 6);
        assert_eq!(store.maintenance.len(), 3);
        assert_eq!(store.fuel.len(), 3);
    }

    #[test]
    fn test_seed_has_no_conflicting_slots() {
        let store = seeded_store();
        let schedules = store.schedules.all();
        for (i, a) in schedules.iter().enumerate() {
            for b in &schedules[i + 1..] {
                assert!(!(a.operator == b.operator && a.date == b.date && a.time == b.time));
            }
        }
    }
}
