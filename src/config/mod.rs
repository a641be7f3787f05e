//! Configuración del proyecto
//!
//! Este módulo contiene las variables de entorno de la consola.

pub mod environment;

pub use environment::*;
