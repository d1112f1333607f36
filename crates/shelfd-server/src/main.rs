//! shelfd server binary.
//!
//! Startup order: tracing first, then config (optional `shelfd.yaml`, `PORT`
//! env override, default 3000), then state + router, then serve until a
//! shutdown signal arrives.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shelfd_server::{app_state::AppState, config, router};

const CONFIG_PATH: &str = "shelfd.yaml";

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = config::load(CONFIG_PATH).expect("config load failed");
    let listen = cfg.server.listen_addr();

    let state = AppState::new();
    let app = router::build_router(state);

    tracing::info!(%listen, "shelfd starting");
    let listener = tokio::net::TcpListener::bind(&listen).await.expect("failed to bind");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server failed");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
