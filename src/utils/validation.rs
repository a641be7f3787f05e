//! Utilidades de validación
//!
//! Funciones custom usadas por los derives de `validator` en los DTOs
//! y por los controllers.

use num_traits::Zero;
use serde::Serialize;
use validator::ValidationError;

/// Validar que un string no esté vacío (ni sólo espacios)
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_blank");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar que un valor no sea negativo
pub fn validate_non_negative<T: PartialOrd + Zero + Serialize>(
    value: &T,
) -> Result<(), ValidationError> {
    if *value < T::zero() {
        let mut error = ValidationError::new("non_negative");
        error.add_param("actual".into(), value);
        return Err(error);
    }
    Ok(())
}

/// Validar un mes del calendario (1-12)
pub fn validate_month(month: u32) -> Result<(), ValidationError> {
    if !(1..=12).contains(&month) {
        let mut error = ValidationError::new("month");
        error.add_param("actual".into(), &month);
        error.add_param("range".into(), &"1 to 12".to_string());
        return Err(error);
    }
    Ok(())
}

/// `true` si la confirmación explícita de una acción destructiva está presente
pub fn is_confirmed(confirm: Option<bool>) -> bool {
    confirm.unwrap_or(false)
}
