use serde::Deserialize;

use crate::utils::formats::ScheduleDate;

// Query del calendario; sin año/mes se usa el mes actual
#[derive(Debug, Default, Deserialize)]
pub struct CalendarQuery {
    pub year: Option<i32>,
    pub month: Option<u32>,
}

// Query de la vista mapa; sin fecha se usa el día actual
#[derive(Debug, Default, Deserialize)]
pub struct MapQuery {
    pub date: Option<ScheduleDate>,
}

// Query del catálogo de ciudades
#[derive(Debug, Default, Deserialize)]
pub struct CityQuery {
    pub state: Option<String>,
    pub q: Option<String>,
}
