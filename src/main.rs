use anyhow::Result;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};
use dotenvy::dotenv;

use field_ops_console::config::EnvironmentConfig;
use field_ops_console::{create_app, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();
    let config = EnvironmentConfig::from_env();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(config.tracing_level())
        .init();

    info!("🏗️ Consola de Operaciones de Campo");
    info!("================================================");
    info!("🌍 Entorno: {}", config.environment);

    let state = AppState::from_config(config.clone());
    if config.seed_sample_data {
        let store = state.store.read().await;
        info!(
            "🌱 Datos de ejemplo cargados: {} programaciones, {} máquinas, {} operadores",
            store.schedules.len(),
            store.machines.len(),
            store.operators.len()
        );
    }

    let app = create_app(state);
    let addr: SocketAddr = config.server_url().parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("🔐 Sesión:");
    info!("   POST /api/auth/login - Login");
    info!("   POST /api/auth/logout - Logout");
    info!("   GET  /api/auth/me - Usuario actual");
    info!("📅 Programaciones:");
    info!("   GET  /api/schedules - Listar (con filtros)");
    info!("   POST /api/schedules - Crear");
    info!("   GET  /api/schedules/counts - Contadores por estado");
    info!("   GET  /api/schedules/form-options - Máquinas y operadores activos");
    info!("   GET  /api/schedules/:id - Detalle");
    info!("   PUT  /api/schedules/:id - Actualizar");
    info!("   POST /api/schedules/:id/complete - Concluir");
    info!("   DELETE /api/schedules/:id?confirm=true - Eliminar");
    info!("🚜 Máquinas:");
    info!("   GET|POST /api/machines");
    info!("   GET|PUT|DELETE /api/machines/:id");
    info!("   GET|POST /api/machines/:id/maintenance");
    info!("   POST /api/machines/:id/maintenance/:record_id/complete");
    info!("   PUT|DELETE /api/machines/:id/maintenance/:record_id");
    info!("   GET|POST /api/machines/:id/fuel");
    info!("   PUT|DELETE /api/machines/:id/fuel/:record_id");
    info!("👷 Operadores:");
    info!("   GET|POST /api/operators");
    info!("   GET|PUT|DELETE /api/operators/:id");
    info!("🗺️ Vistas:");
    info!("   GET  /api/calendar?year&month - Calendario mensual");
    info!("   GET  /api/map?date - Programaciones por ciudad");
    info!("   GET  /api/cities?state&q - Catálogo de ciudades");
    info!("   GET  /api/states - Estados del catálogo");
    info!("   GET|POST /api/view - Pantalla actual de la consola");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Error del servidor: {}", e);
        return Err(e.into());
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo instalar el handler de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo instalar el handler de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
