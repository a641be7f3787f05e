//! Modelos del sistema
//!
//! Este módulo contiene los registros de la consola y sus estados.

pub mod auth;
pub mod fuel;
pub mod machine;
pub mod maintenance;
pub mod operator;
pub mod schedule;
pub mod view;
