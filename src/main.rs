mod model;
mod server;

use std::net::SocketAddr;

use tokio::{
    net::TcpListener,
    signal::{
        ctrl_c,
        unix::{signal, SignalKind},
    },
};
use tracing_subscriber::EnvFilter;

use crate::server::{config::Config, error::AppError, router, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let state = AppState::new(&config, db);

    let app = router::router().with_state(state);

    let address = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&address)
        .await
        .unwrap_or_else(|err| panic!("failed to bind {address}: {err}"));
    tracing::info!("Listening on {address}");

    // The rate limiter keys on peer IP, which requires connect info.
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .map_err(|err| AppError::InternalError(format!("server error: {err}")))?;

    tracing::info!("Server shut down");

    Ok(())
}

async fn shutdown_signal() {
    let interrupt = async {
        ctrl_c().await.expect("failed to install Ctrl+C handler");
        tracing::info!("Received Ctrl+C, shutting down");
    };

    let terminate = async {
        signal(SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
        tracing::info!("Received terminate signal, shutting down");
    };

    tokio::select! {
        _ = interrupt => {},
        _ = terminate => {},
    }
}
