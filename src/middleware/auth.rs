//! Middleware de sesión
//!
//! La consola tiene una única sesión. Este middleware corta con `401`
//! cualquier request mientras no haya un usuario autenticado e inyecta
//! el `Principal` actual en las extensions de la request.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use tracing::debug;

use crate::state::AppState;
use crate::utils::errors::AppError;

/// Exigir una sesión abierta
pub async fn require_login(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let user = state.session.read().await.user.clone();

    let Some(principal) = user else {
        debug!("🔒 {} {} sin sesión", request.method(), request.uri().path());
        return Err(AppError::Unauthorized(
            "Inicie sesión para usar la consola".to_string(),
        ));
    };

    request.extensions_mut().insert(principal);
    Ok(next.run(request).await)
}
