use serde::{Deserialize, Serialize};

/// Nombre con el que se muestra al super-usuario
pub const ADMINISTRATOR_DISPLAY_NAME: &str = "Administrador";

/// Roles de la consola
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Administrator,
    Operator,
}

/// Usuario autenticado en la sesión de la consola
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Principal {
    pub role: UserRole,
    pub name: String,
    /// Sólo para operadores
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operator_id: Option<u64>,
}

impl Principal {
    pub fn administrator() -> Self {
        Self {
            role: UserRole::Administrator,
            name: ADMINISTRATOR_DISPLAY_NAME.to_string(),
            operator_id: None,
        }
    }

    pub fn operator(id: u64, name: impl Into<String>) -> Self {
        Self {
            role: UserRole::Operator,
            name: name.into(),
            operator_id: Some(id),
        }
    }

    pub fn is_administrator(&self) -> bool {
        self.role == UserRole::Administrator
    }
}
