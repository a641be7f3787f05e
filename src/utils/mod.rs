//! Utilidades del sistema
//!
//! Este módulo contiene utilidades para manejo de errores, validación
//! y los formatos de fecha/hora de la agenda.

pub mod errors;
pub mod formats;
pub mod validation;
