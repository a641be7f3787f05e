//! Router de la API
//!
//! `create_app` arma el router completo: rutas públicas (health y login)
//! y el resto detrás del middleware de sesión.

pub mod auth_routes;
pub mod machine_routes;
pub mod operator_routes;
pub mod report_routes;
pub mod schedule_routes;
pub mod view_routes;

use axum::{middleware::from_fn_with_state, response::Json, routing::get, Router};
use serde_json::{json, Value};
use tower::ServiceBuilder;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::middleware::{cors_layer, require_login};
use crate::state::AppState;

pub fn create_app(state: AppState) -> Router {
    let protected = Router::new()
        .nest("/api/auth", auth_routes::session_routes())
        .nest("/api/schedules", schedule_routes::create_schedule_router())
        .nest("/api/machines", machine_routes::create_machine_router())
        .nest("/api/operators", operator_routes::create_operator_router())
        .nest("/api/view", view_routes::create_view_router())
        .nest("/api", report_routes::create_report_router())
        .route_layer(from_fn_with_state(state.clone(), require_login));

    Router::new()
        .route("/health", get(health_check))
        .nest("/api/auth", auth_routes::login_routes())
        .merge(protected)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(&state.config))
                .layer(CompressionLayer::new()),
        )
        .with_state(state)
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "field_ops_console",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
