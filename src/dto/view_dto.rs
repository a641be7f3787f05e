use serde::{Deserialize, Serialize};

use crate::models::view::{Navigator, View};

// Request de navegación entre pantallas
#[derive(Debug, Deserialize)]
pub struct NavigateRequest {
    pub view: View,
    pub schedule_id: Option<u64>,
    pub machine_id: Option<u64>,
}

// Vista resuelta: lo que la consola debe mostrar
#[derive(Debug, Serialize)]
pub struct ViewResponse {
    pub view: View,
    pub selected_schedule_id: Option<u64>,
    pub selected_machine_id: Option<u64>,
}

impl From<&Navigator> for ViewResponse {
    fn from(navigator: &Navigator) -> Self {
        Self {
            view: navigator.current,
            selected_schedule_id: navigator.selected_schedule_id,
            selected_machine_id: navigator.selected_machine_id,
        }
    }
}
