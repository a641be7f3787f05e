//! Consola de operaciones de campo
//!
//! Backend de la consola: programaciones diarias, máquinas, operadores,
//! manutenciones y abastecimientos, con verificación de conflictos de
//! agenda del operador y agregaciones para calendario y mapa.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

pub use routes::create_app;
pub use state::AppState;
