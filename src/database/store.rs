//! Store de la consola
//!
//! Agrupa las cinco colecciones. Es el único componente que muta registros;
//! vive detrás de un `RwLock` en `AppState`.

use crate::database::collection::Collection;
use crate::models::fuel::FuelRecord;
use crate::models::machine::Machine;
use crate::models::maintenance::MaintenanceRecord;
use crate::models::operator::Operator;
use crate::models::schedule::Schedule;

#[derive(Debug, Clone, Default)]
pub struct ConsoleStore {
    pub schedules: Collection<Schedule>,
    pub machines: Collection<Machine>,
    pub operators: Collection<Operator>,
    pub maintenance: Collection<MaintenanceRecord>,
    pub fuel: Collection<FuelRecord>,
}

impl ConsoleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn machine_by_name(&self, name: &str) -> Option<&Machine> {
        self.machines.all().iter().find(|m| m.name == name)
    }

    pub fn maintenance_for(&self, machine_id: u64) -> Vec<MaintenanceRecord> {
        self.maintenance
            .all()
            .iter()
            .filter(|r| r.machine_id == machine_id)
            .cloned()
            .collect()
    }

    pub fn fuel_for(&self, machine_id: u64) -> Vec<FuelRecord> {
        self.fuel
            .all()
            .iter()
            .filter(|r| r.machine_id == machine_id)
            .cloned()
            .collect()
    }

    /// Propagar el nuevo nombre de una máquina a los caches `machine_name`.
    /// Devuelve cuántos registros se actualizaron.
    pub fn cascade_machine_name(&mut self, machine_id: u64, name: &str) -> usize {
        let mut touched = 0;
        for record in self.maintenance.iter_mut().filter(|r| r.machine_id == machine_id) {
            if record.machine_name != name {
                record.machine_name = name.to_string();
                touched += 1;
            }
        }
        for record in self.fuel.iter_mut().filter(|r| r.machine_id == machine_id) {
            if record.machine_name != name {
                record.machine_name = name.to_string();
                touched += 1;
            }
        }
        touched
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::seed::seeded_store;

    #[test]
    fn test_cascade_only_touches_matching_machine() {
        let mut store = seeded_store();
        let touched = store.cascade_machine_name(1, "Prassi II");
        assert_eq!(touched, 2);
        assert!(store
            .maintenance_for(1)
            .iter()
            .all(|r| r.machine_name == "Prassi II"));
        assert!(store.fuel_for(1).iter().all(|r| r.machine_name == "Prassi II"));
        assert!(store.fuel_for(2).iter().all(|r| r.machine_name == "BG"));
    }

    #[test]
    fn test_machine_by_name() {
        let store = seeded_store();
        assert_eq!(store.machine_by_name("Guzzo").map(|m| m.id), Some(3));
        assert!(store.machine_by_name("guzzo").is_none());
    }
}
