//! Módulo de almacenamiento
//!
//! Store en memoria de la consola: colecciones, store y datos de ejemplo.

pub mod collection;
pub mod seed;
pub mod store;

pub use store::ConsoleStore;
