use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::info;

use crate::database::ConsoleStore;
use crate::dto::auth_dto::{LoginRequest, SessionResponse};
use crate::services::auth_service::AuthService;
use crate::state::{AppState, ConsoleSession};
use crate::utils::errors::AppResult;

pub struct AuthController {
    auth: AuthService,
    store: Arc<RwLock<ConsoleStore>>,
    session: Arc<RwLock<ConsoleSession>>,
}

impl AuthController {
    pub fn new(state: &AppState) -> Self {
        Self {
            auth: state.auth.clone(),
            store: state.store.clone(),
            session: state.session.clone(),
        }
    }

    /// Login con credenciales fijas o de operador. Un login fallido no
    /// modifica la sesión actual.
    pub async fn login(&self, request: LoginRequest) -> AppResult<SessionResponse> {
        let principal = {
            let store = self.store.read().await;
            self.auth
                .authenticate(store.operators.all(), &request.email, &request.password)?
        };

        let mut session = self.session.write().await;
        session.user = Some(principal.clone());
        session.navigator.back_to_list();

        Ok(SessionResponse {
            logged_in: true,
            user: Some(principal),
        })
    }

    pub async fn logout(&self) -> SessionResponse {
        let mut session = self.session.write().await;
        if let Some(user) = session.user.take() {
            info!("👋 Sesión de '{}' cerrada", user.name);
        }
        session.navigator.back_to_list();

        SessionResponse {
            logged_in: false,
            user: None,
        }
    }

    pub async fn me(&self) -> SessionResponse {
        let session = self.session.read().await;
        SessionResponse {
            logged_in: session.is_logged_in(),
            user: session.user.clone(),
        }
    }
}
