use std::process::ExitCode;

use common::utils::logging::{init_logging, LogFormat};
use configs::AppConfig;
use tracing::{error, info};
use uuid::Uuid;

fn build_runtime(cfg: &AppConfig) -> std::io::Result<tokio::runtime::Runtime> {
    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(w) = cfg.server.worker_threads {
        builder.worker_threads(w);
    }
    builder.build()
}

fn main() -> ExitCode {
    // .env before logging so RUST_LOG / LOG_FORMAT apply
    dotenvy::dotenv().ok();
    let format = LogFormat::from_env();
    init_logging(format);

    let instance = Uuid::new_v4();
    let pid = std::process::id();

    std::panic::set_hook(Box::new(move |info| {
        error!(%instance, pid, message = %info, "panic");
    }));

    let cfg = match server::startup::load_config() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    let rt = match build_runtime(&cfg) {
        Ok(rt) => rt,
        Err(e) => {
            error!(error = %e, "cannot build tokio runtime");
            return ExitCode::FAILURE;
        }
    };

    info!(
        %instance,
        pid,
        version = env!("CARGO_PKG_VERSION"),
        log_format = ?format,
        backend = ?cfg.database.backend,
        workers = ?cfg.server.worker_threads,
        "group service starting"
    );

    match rt.block_on(server::startup::run_with_config(cfg)) {
        Ok(()) => {
            info!(%instance, "group service stopped");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(%instance, error = %e, "group service failed");
            ExitCode::FAILURE
        }
    }
}
