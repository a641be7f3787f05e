//! Modelo de Operator

use serde::{Deserialize, Serialize};

use crate::database::collection::Record;

/// Estado del operador
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum OperatorStatus {
    #[default]
    Active,
    OnLeave,
    Away,
}

/// Operador de máquina. La contraseña se guarda en texto plano y nunca se
/// serializa en las respuestas.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Operator {
    pub id: u64,
    pub name: String,
    pub phone: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub status: OperatorStatus,
}

impl Operator {
    pub fn is_available(&self) -> bool {
        self.status == OperatorStatus::Active
    }

    /// Comparación exacta de email y contraseña
    pub fn matches_credentials(&self, email: &str, password: &str) -> bool {
        self.email == email && self.password == password
    }
}

impl Record for Operator {
    fn id(&self) -> u64 {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn operator() -> Operator {
        Operator {
            id: 1,
            name: "Igor Silva".to_string(),
            phone: "(27) 99999-1111".to_string(),
            email: "igor@email.com".to_string(),
            password: "senha123".to_string(),
            status: OperatorStatus::Active,
        }
    }

    #[test]
    fn test_password_is_never_serialized() {
        let json = serde_json::to_value(operator()).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["status"], "active");
    }

    #[test]
    fn test_credentials_match_exactly() {
        let op = operator();
        assert!(op.matches_credentials("igor@email.com", "senha123"));
        assert!(!op.matches_credentials("IGOR@email.com", "senha123"));
        assert!(!op.matches_credentials("igor@email.com", "senha1234"));
    }
}
