//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum: el store en memoria y la sesión de la consola.

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::config::environment::EnvironmentConfig;
use crate::database::seed::seeded_store;
use crate::database::ConsoleStore;
use crate::models::auth::Principal;
use crate::models::view::Navigator;
use crate::services::auth_service::AuthService;

/// Sesión única de la consola: usuario actual y pantalla seleccionada
#[derive(Debug, Clone, Default)]
pub struct ConsoleSession {
    pub user: Option<Principal>,
    pub navigator: Navigator,
}

impl ConsoleSession {
    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }
}

/// Orden de locks: siempre `store` antes que `session`.
#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub auth: AuthService,
    pub store: Arc<RwLock<ConsoleStore>>,
    pub session: Arc<RwLock<ConsoleSession>>,
}

impl AppState {
    pub fn new(config: EnvironmentConfig, store: ConsoleStore) -> Self {
        Self {
            auth: AuthService::new(&config),
            config,
            store: Arc::new(RwLock::new(store)),
            session: Arc::new(RwLock::new(ConsoleSession::default())),
        }
    }

    /// Estado inicial según la configuración (con o sin datos de ejemplo)
    pub fn from_config(config: EnvironmentConfig) -> Self {
        let store = if config.seed_sample_data {
            seeded_store()
        } else {
            ConsoleStore::new()
        };
        Self::new(config, store)
    }
}
