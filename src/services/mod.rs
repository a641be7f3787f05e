//! Services module
//!
//! Lógica de negocio pura de la consola: verificación de conflictos,
//! agregaciones, autenticación y catálogo de ciudades. Los controllers
//! toman los locks y delegan aquí.

pub mod aggregation_service;
pub mod auth_service;
pub mod city_catalog;
pub mod conflict_checker;
