use std::process::ExitCode;

use config_server::{api::new_api_router, env::EnvSnapshot, settings::Settings, vars};
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

mod defaults {
    pub const LOG_FILTER: &str = "info";
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(defaults::LOG_FILTER)),
        )
        .init();

    let env = EnvSnapshot::capture();
    let settings = match Settings::from_env(&env) {
        Ok(settings) => settings,
        Err(err) => {
            error!("invalid configuration: {err}");
            return ExitCode::FAILURE;
        }
    };

    for var in [vars::ENDPOINT_URL, vars::API_KEY] {
        if !env.is_set(var) {
            warn!("{var} not set; clients will receive null");
        }
    }
    if settings.diagnostics.exposes() {
        warn!("diagnostics are exposed to clients; do not use this setting in production");
    }

    let router = match new_api_router(env, &settings) {
        Ok(router) => router,
        Err(err) => {
            error!("failed to build API router: {err}");
            return ExitCode::FAILURE;
        }
    };

    let listener = match TcpListener::bind(settings.listen_addr).await {
        Ok(l) => l,
        Err(err) => {
            error!("failed to listen on {}: {err}", settings.listen_addr);
            return ExitCode::FAILURE;
        }
    };
    info!(
        diagnostics = %settings.diagnostics,
        "listening on {}", settings.listen_addr
    );
    if let Err(err) = axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("failed to start server: {err}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutting down"),
        Err(err) => {
            error!("failed to listen for shutdown signal: {err}");
            std::future::pending::<()>().await;
        }
    }
}
