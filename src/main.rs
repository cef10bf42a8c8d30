use anyhow::Result;
use axum::{response::Json, routing::get, Router};
use dotenvy::dotenv;
use serde_json::json;
use std::net::SocketAddr;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use revenda_api::config::environment::EnvironmentConfig;
use revenda_api::database::DatabaseConnection;
use revenda_api::middleware::cors::cors_middleware;
use revenda_api::routes::create_api_router;
use revenda_api::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Carregar variáveis de ambiente
    dotenv().ok();

    let config = EnvironmentConfig::default();

    // Configurar logging
    let nivel = if config.is_development() {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(nivel).init();

    info!("🚗 Revenda de Veículos - API REST");
    info!("=================================");

    // Inicializar base de dados
    let db_connection = match DatabaseConnection::new_default().await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Erro conectando à base de dados: {}", e);
            return Err(anyhow::anyhow!("Erro de base de dados: {}", e));
        }
    };
    db_connection.run_migrations().await?;

    let pool = db_connection.pool().clone();
    let app_state = AppState::new(pool);

    let app = Router::new()
        .route("/health", get(health))
        .merge(create_api_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors_middleware(&config.cors_origins))
        .with_state(app_state);

    let addr: SocketAddr = config.server_url().parse()?;

    info!("🌐 Servidor iniciando em http://{}", addr);
    info!("🔍 Endpoints disponíveis:");
    info!("   GET  /health - Verificação de disponibilidade");
    info!("👤 Clientes:");
    info!("   GET  /api/clients - Listar clientes ativos");
    info!("   GET  /api/clients/:id - Consultar cliente");
    info!("   POST /api/clients - Cadastrar cliente");
    info!("   PUT  /api/clients/:id - Atualizar cliente");
    info!("   PUT  /api/remove/clients/:id - Remover cliente (lógico)");
    info!("🚙 Carros:");
    info!("   GET  /api/cars - Listar carros ativos");
    info!("   GET  /api/cars/:id - Consultar carro");
    info!("   POST /api/cars - Cadastrar carro");
    info!("   PUT  /api/cars/:id - Atualizar carro");
    info!("   PUT  /api/remove/cars/:id - Remover carro (lógico)");
    info!("📋 Pedidos:");
    info!("   GET  /api/orders - Listar pedidos ativos");
    info!("   GET  /api/orders/:id - Consultar pedido");
    info!("   POST /api/orders - Cadastrar pedido");
    info!("   PUT  /api/orders/:id - Atualizar pedido");
    info!("   PUT  /api/remove/orders/:id - Remover pedido (lógico)");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Servidor finalizado");
    Ok(())
}

/// Endpoint simples de verificação de disponibilidade
async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "servico": "revenda-api",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Sinal de desligamento graceful
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
            info!("🛑 Sinal Ctrl+C recebido, desligando servidor...");
        },
        _ = terminate => {
            info!("🛑 Sinal de término recebido, desligando servidor...");
        },
    }
}
