//! Servicio de autenticación
//!
//! Verificación estática de credenciales: el par fijo del super-usuario o
//! igualdad exacta con el email y la contraseña de un operador. No hay
//! hashing ni emisión de tokens.

use tracing::{info, warn};

use crate::config::EnvironmentConfig;
use crate::models::auth::Principal;
use crate::models::operator::Operator;
use crate::utils::errors::{validation_error, AppError, AppResult};

#[derive(Debug, Clone)]
pub struct AuthService {
    admin_email: String,
    admin_password: String,
}

impl AuthService {
    pub fn new(config: &EnvironmentConfig) -> Self {
        Self {
            admin_email: config.admin_email.clone(),
            admin_password: config.admin_password.clone(),
        }
    }

    /// Autenticar contra el super-usuario y luego contra los operadores
    pub fn authenticate(
        &self,
        operators: &[Operator],
        email: &str,
        password: &str,
    ) -> AppResult<Principal> {
        if email.is_empty() {
            return Err(validation_error("email", "Email es requerido"));
        }
        if password.is_empty() {
            return Err(validation_error("password", "Contraseña es requerida"));
        }

        if email == self.admin_email && password == self.admin_password {
            info!("✅ Login de administrador");
            return Ok(Principal::administrator());
        }

        match operators.iter().find(|op| op.matches_credentials(email, password)) {
            Some(operator) => {
                info!("✅ Login de operador '{}'", operator.name);
                Ok(Principal::operator(operator.id, operator.name.clone()))
            }
            None => {
                warn!("❌ Credenciales inválidas para '{}'", email);
                Err(AppError::Unauthorized("Email o contraseña incorrectos".to_string()))
            }
        }
    }
}
