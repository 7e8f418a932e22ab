use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use common::utils::logging::init_logging_from_env;
use configs::{AppConfig, DatabaseConfig, ServerConfig, StorageBackend};
use dotenvy::dotenv;
use service::group::{
    repo::MongoGroupRepository,
    repository::{memory::InMemoryGroupRepository, GroupRepository},
};
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::routes;
use crate::state::ServerState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load config.toml, falling back to env vars when the file is missing or unusable.
pub fn load_config() -> anyhow::Result<AppConfig> {
    match AppConfig::load_and_validate() {
        Ok(cfg) => Ok(cfg),
        Err(e) => {
            warn!(error = %e, "config file not usable, falling back to environment");
            let mut cfg = AppConfig::from_env();
            cfg.normalize_and_validate()?;
            Ok(cfg)
        }
    }
}

fn bind_addr(cfg: &ServerConfig) -> anyhow::Result<SocketAddr> {
    Ok(format!("{}:{}", cfg.host, cfg.port).parse()?)
}

/// Pick the persistence gateway for the configured backend.
pub async fn build_repository(cfg: &DatabaseConfig) -> anyhow::Result<Arc<dyn GroupRepository>> {
    match cfg.backend {
        StorageBackend::Mongodb => {
            let conn = models::db::connect_with_config(cfg).await?;
            info!(db = %cfg.name, collection = %cfg.collection, "using mongodb group repository");
            Ok(Arc::new(MongoGroupRepository::new(conn, &cfg.collection)))
        }
        StorageBackend::Memory => {
            warn!("using in-memory group repository; data is lost on restart");
            Ok(Arc::new(InMemoryGroupRepository::new()))
        }
    }
}

pub fn build_app(repo: Arc<dyn GroupRepository>, base_path: &str) -> Router {
    routes::build_router(ServerState::new(repo), build_cors(), base_path)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "cannot listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("received Ctrl+C, shutting down");
}

/// Build the app from an already loaded config and serve until Ctrl+C.
pub async fn run_with_config(cfg: AppConfig) -> anyhow::Result<()> {
    let repo = build_repository(&cfg.database).await?;
    let app = build_app(repo, &cfg.server.base_path);

    let addr = bind_addr(&cfg.server)?;
    info!(%addr, base_path = %cfg.server.base_path, "starting group service");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

/// Public entry for embedding: dotenv, logging, config, then serve.
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging_from_env();
    run_with_config(load_config()?).await
}
