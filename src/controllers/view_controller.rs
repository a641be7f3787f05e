use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;

use crate::database::ConsoleStore;
use crate::dto::view_dto::{NavigateRequest, ViewResponse};
use crate::state::{AppState, ConsoleSession};

pub struct ViewController {
    store: Arc<RwLock<ConsoleStore>>,
    session: Arc<RwLock<ConsoleSession>>,
}

impl ViewController {
    pub fn new(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
            session: state.session.clone(),
        }
    }

    /// Pantalla actual, ya resuelta contra el store
    pub async fn current(&self) -> ViewResponse {
        let store = self.store.read().await;
        let mut session = self.session.write().await;
        session.navigator.resolve(&store);
        ViewResponse::from(&session.navigator)
    }

    pub async fn navigate(&self, request: NavigateRequest) -> ViewResponse {
        let store = self.store.read().await;
        let mut session = self.session.write().await;
        session
            .navigator
            .navigate(request.view, request.schedule_id, request.machine_id);
        let resolved = session.navigator.resolve(&store);

        if resolved != request.view {
            debug!("🔀 Vista {:?} sin selección válida, mostrando {:?}", request.view, resolved);
        }
        ViewResponse::from(&session.navigator)
    }
}
