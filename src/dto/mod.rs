//! DTOs de la API
//!
//! Requests y responses de cada pantalla de la consola.

pub mod api_response;
pub mod auth_dto;
pub mod fuel_dto;
pub mod machine_dto;
pub mod maintenance_dto;
pub mod operator_dto;
pub mod report_dto;
pub mod schedule_dto;
pub mod view_dto;
