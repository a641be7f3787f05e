use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::info;
use validator::Validate;

use crate::database::ConsoleStore;
use crate::dto::operator_dto::{CreateOperatorRequest, UpdateOperatorRequest};
use crate::models::operator::Operator;
use crate::state::AppState;
use crate::utils::errors::{confirmation_required_error, not_found_error, AppResult};
use crate::utils::validation::is_confirmed;

pub struct OperatorController {
    store: Arc<RwLock<ConsoleStore>>,
}

impl OperatorController {
    pub fn new(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }

    pub async fn list(&self) -> Vec<Operator> {
        self.store.read().await.operators.all().to_vec()
    }

    pub async fn get_by_id(&self, id: u64) -> AppResult<Operator> {
        self.store
            .read()
            .await
            .operators
            .get(id)
            .cloned()
            .ok_or_else(|| not_found_error("Operator", id))
    }

    pub async fn create(&self, request: CreateOperatorRequest) -> AppResult<Operator> {
        request.validate()?;

        let operator = self.store.write().await.operators.insert_with(|id| Operator {
            id,
            name: request.name,
            phone: request.phone,
            email: request.email,
            password: request.password,
            status: request.status,
        });

        info!("✅ Operador {} '{}' registrado", operator.id, operator.name);
        Ok(operator)
    }

    pub async fn update(&self, id: u64, request: UpdateOperatorRequest) -> AppResult<Operator> {
        request.validate()?;

        let mut store = self.store.write().await;
        let updated = request.apply_to(
            store
                .operators
                .get(id)
                .ok_or_else(|| not_found_error("Operator", id))?,
        );
        store.operators.replace(updated.clone());

        info!("✅ Operador {} actualizado", id);
        Ok(updated)
    }

    pub async fn delete(&self, id: u64, confirm: Option<bool>) -> AppResult<()> {
        if !is_confirmed(confirm) {
            return Err(confirmation_required_error("operator", id));
        }

        self.store
            .write()
            .await
            .operators
            .remove(id)
            .ok_or_else(|| not_found_error("Operator", id))?;

        info!("🗑️ Operador {} eliminado", id);
        Ok(())
    }
}
