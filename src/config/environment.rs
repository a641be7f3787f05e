//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno. Todas las variables
//! tienen un valor por defecto de desarrollo.

use std::env;
use std::str::FromStr;

const DEFAULT_ADMIN_EMAIL: &str = "admin@admin";
const DEFAULT_ADMIN_PASSWORD: &str = "admin";

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub cors_origins: Vec<String>,
    pub log_level: String,
    pub seed_sample_data: bool,
    // Credencial fija del super-usuario
    pub admin_email: String,
    pub admin_password: String,
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parsed_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|raw| raw.trim().parse().ok())
        .unwrap_or(default)
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            port: 3000,
            host: "0.0.0.0".to_string(),
            cors_origins: Vec::new(),
            log_level: "debug".to_string(),
            seed_sample_data: true,
            admin_email: DEFAULT_ADMIN_EMAIL.to_string(),
            admin_password: DEFAULT_ADMIN_PASSWORD.to_string(),
        }
    }
}

impl EnvironmentConfig {
    /// Leer la configuración desde el entorno (después de `dotenvy::dotenv()`)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            environment: var_or("ENVIRONMENT", &defaults.environment),
            port: parsed_or("PORT", defaults.port),
            host: var_or("HOST", &defaults.host),
            cors_origins: env::var("CORS_ORIGINS")
                .map(|raw| {
                    raw.split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
            log_level: var_or("LOG_LEVEL", &defaults.log_level),
            seed_sample_data: parsed_or("SEED_SAMPLE_DATA", defaults.seed_sample_data),
            admin_email: var_or("ADMIN_EMAIL", &defaults.admin_email),
            admin_password: var_or("ADMIN_PASSWORD", &defaults.admin_password),
        }
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Obtener la dirección del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Nivel de log para el subscriber de tracing
    pub fn tracing_level(&self) -> tracing::Level {
        self.log_level.parse().unwrap_or(tracing::Level::DEBUG)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_development_with_builtin_admin() {
        let config = EnvironmentConfig::default();
        assert!(config.is_development());
        assert!(!config.is_production());
        assert_eq!(config.admin_email, "admin@admin");
        assert_eq!(config.admin_password, "admin");
        assert_eq!(config.server_url(), "0.0.0.0:3000");
    }

    #[test]
    fn test_unknown_log_level_falls_back_to_debug() {
        let config = EnvironmentConfig {
            log_level: "verbose".to_string(),
            ..Default::default()
        };
        assert_eq!(config.tracing_level(), tracing::Level::DEBUG);

        let config = EnvironmentConfig {
            log_level: "warn".to_string(),
            ..Default::default()
        };
        assert_eq!(config.tracing_level(), tracing::Level::WARN);
    }
}
