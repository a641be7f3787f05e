use serde::Deserialize;
use validator::Validate;

use crate::models::operator::{Operator, OperatorStatus};
use crate::utils::validation::validate_not_blank;

// Request para registrar un operador. Email y contraseña son opcionales;
// sin ellos el operador no puede iniciar sesión.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateOperatorRequest {
    #[validate(custom = "validate_not_blank")]
    pub name: String,
    #[validate(custom = "validate_not_blank")]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub status: OperatorStatus,
}

// Request para actualizar un operador
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateOperatorRequest {
    #[validate(custom = "validate_not_blank")]
    pub name: Option<String>,
    #[validate(custom = "validate_not_blank")]
    pub phone: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub status: Option<OperatorStatus>,
}

impl UpdateOperatorRequest {
    pub fn apply_to(self, current: &Operator) -> Operator {
        Operator {
            id: current.id,
            name: self.name.unwrap_or_else(|| current.name.clone()),
            phone: self.phone.unwrap_or_else(|| current.phone.clone()),
            email: self.email.unwrap_or_else(|| current.email.clone()),
            password: self.password.unwrap_or_else(|| current.password.clone()),
            status: self.status.unwrap_or(current.status),
        }
    }
}
