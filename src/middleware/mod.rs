//! Middleware module
//!
//! Este módulo contiene todos los middlewares de la aplicación.

pub mod auth;
pub mod cors;

pub use auth::*;
pub use cors::*;
