use anyhow::Result;
use axum::{response::Json, routing::get, Router};
use dotenvy::dotenv;
use serde_json::json;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use airline_booking::config::{EnvironmentConfig, PricingConfig};
use airline_booking::database;
use airline_booking::middleware::cors::{cors_middleware, cors_middleware_with_origins};
use airline_booking::routes;
use airline_booking::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("✈️  Airline Booking API");
    info!("=======================");

    // Inicializar base de datos
    let pool = match database::create_pool(None).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    database::run_migrations(&pool).await?;
    info!("✅ Schema de base de datos aplicado");

    let config = EnvironmentConfig::default();
    let pricing = PricingConfig::default();
    let app_state = AppState::new(pool, config.clone(), pricing);

    // Sin orígenes configurados se permite todo (desarrollo)
    let cors = if config.cors_origins.is_empty() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(config.cors_origins.clone())
    };

    let app = Router::new()
        .route("/health", get(health_endpoint))
        .nest("/api", routes::create_api_router(app_state.clone()))
        .layer(cors)
        .with_state(app_state);

    let addr: SocketAddr = config.server_url().parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("🔐 Auth:");
    info!("   POST /api/auth/register - Registrar usuario");
    info!("   POST /api/auth/login - Login");
    info!("✈️  Catálogo:");
    info!("   CRUD /api/airplane-types - Tipos de avión (staff)");
    info!("   CRUD /api/airplanes - Aviones (+ /:id/upload-image)");
    info!("   CRUD /api/airplane-seat-configurations - Configuraciones de asientos (staff)");
    info!("   CRUD /api/crew-member-positions - Posiciones de tripulación (staff)");
    info!("   CRUD /api/crew-members - Tripulantes (+ /:id/upload-image)");
    info!("   CRUD /api/airports - Aeropuertos (+ /:id/upload-image)");
    info!("   CRUD /api/routes - Rutas");
    info!("   CRUD /api/flights - Vuelos (filtros: airplane-id, route-id, crew-ids, departure-day)");
    info!("🎫 Reservas:");
    info!("   CRUD /api/tickets - Tickets (staff)");
    info!("   CRUD /api/orders - Órdenes (+ /:id/pay, filtro: order-day)");

    let server_handle = tokio::spawn(async move {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| {
                error!("❌ Error del servidor: {}", e);
                anyhow::anyhow!(e)
            })
    });

    if let Err(e) = server_handle.await? {
        error!("❌ Servidor terminó con error: {}", e);
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Health check simple
async fn health_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
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
