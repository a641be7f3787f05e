//! Router de vistas de la consola
//!
//! Un único valor `current` selecciona la pantalla; a lo sumo uno de
//! `selected_schedule_id` / `selected_machine_id` está definido.

use serde::{Deserialize, Serialize};

use crate::database::ConsoleStore;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    /// Lista diaria de programaciones (vista por defecto)
    #[default]
    Schedule,
    New,
    Machines,
    Operators,
    Details,
    Calendar,
    Map,
    Maintenance,
    Fuel,
}

/// Qué selección necesita una vista para poder mostrarse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    None,
    Schedule,
    Machine,
}

impl View {
    pub fn requires(&self) -> Selection {
        match self {
            View::Details => Selection::Schedule,
            View::Maintenance | View::Fuel => Selection::Machine,
            _ => Selection::None,
        }
    }

    /// Lista a la que se vuelve cuando la selección falta o quedó colgada
    pub fn fallback(&self) -> View {
        match self {
            View::Maintenance | View::Fuel => View::Machines,
            View::Details => View::Schedule,
            other => *other,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Navigator {
    pub current: View,
    pub selected_schedule_id: Option<u64>,
    pub selected_machine_id: Option<u64>,
}

impl Navigator {
    /// Cambiar de vista. Seleccionar una programación limpia la máquina y
    /// viceversa; volver a la lista diaria limpia ambas.
    pub fn navigate(&mut self, view: View, schedule_id: Option<u64>, machine_id: Option<u64>) {
        match view.requires() {
            Selection::Schedule => {
                self.selected_schedule_id = schedule_id.or(self.selected_schedule_id);
                self.selected_machine_id = None;
            }
            Selection::Machine => {
                self.selected_machine_id = machine_id.or(self.selected_machine_id);
                self.selected_schedule_id = None;
            }
            Selection::None if view == View::Schedule => {
                self.selected_schedule_id = None;
                self.selected_machine_id = None;
            }
            Selection::None => {}
        }
        self.current = view;
    }

    pub fn open_schedule(&mut self, id: u64) {
        self.navigate(View::Details, Some(id), None);
    }

    pub fn back_to_list(&mut self) {
        self.navigate(View::Schedule, None, None);
    }

    /// Resolver la vista actual contra el store. Si la vista necesita una
    /// selección ausente o que ya no existe, vuelve en silencio a su lista.
    pub fn resolve(&mut self, store: &ConsoleStore) -> View {
        let resolvable = match self.current.requires() {
            Selection::None => true,
            Selection::Schedule => self
                .selected_schedule_id
                .is_some_and(|id| store.schedules.contains(id)),
            Selection::Machine => self
                .selected_machine_id
                .is_some_and(|id| store.machines.contains(id)),
        };

        if !resolvable {
            match self.current.requires() {
                Selection::Schedule => self.selected_schedule_id = None,
                Selection::Machine => self.selected_machine_id = None,
                Selection::None => {}
            }
            self.current = self.current.fallback();
        }
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::seed::seeded_store;

    #[test]
    fn test_default_view_is_schedule_list() {
        let mut nav = Navigator::default();
        assert_eq!(nav.resolve(&seeded_store()), View::Schedule);
    }

    #[test]
    fn test_details_without_selection_falls_back() {
        let mut nav = Navigator::default();
        nav.navigate(View::Details, None, None);
        assert_eq!(nav.resolve(&seeded_store()), View::Schedule);
        assert_eq!(nav.selected_schedule_id, None);
    }

    #[test]
    fn test_details_with_deleted_schedule_falls_back() {
        let mut store = seeded_store();
        let mut nav = Navigator::default();
        nav.open_schedule(2);
        assert_eq!(nav.resolve(&store), View::Details);

        store.schedules.remove(2);
        assert_eq!(nav.resolve(&store), View::Schedule);
        assert_eq!(nav.selected_schedule_id, None);
    }

    #[test]
    fn test_machine_views_fall_back_to_machine_list() {
        let mut store = seeded_store();
        let mut nav = Navigator::default();
        nav.navigate(View::Fuel, None, Some(3));
        assert_eq!(nav.resolve(&store), View::Fuel);

        store.machines.remove(3);
        assert_eq!(nav.resolve(&store), View::Machines);
        assert_eq!(nav.selected_machine_id, None);
    }

    #[test]
    fn test_only_one_selection_at_a_time() {
        let mut nav = Navigator::default();
        nav.open_schedule(1);
        nav.navigate(View::Maintenance, None, Some(2));
        assert_eq!(nav.selected_schedule_id, None);
        assert_eq!(nav.selected_machine_id, Some(2));

        nav.open_schedule(4);
        assert_eq!(nav.selected_schedule_id, Some(4));
        assert_eq!(nav.selected_machine_id, None);

        nav.back_to_list();
        assert_eq!(nav, Navigator::default());
    }
}
