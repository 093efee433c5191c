use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{Level, info, warn};

use executor::PistonClient;
use server::config::{AppConfig, DEFAULT_JWT_SECRET};
use server::database::init_db;
use server::seed;
use server::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let config = AppConfig::load()?;

    if config.auth.jwt_secret == DEFAULT_JWT_SECRET {
        warn!(
            "Running with the default JWT secret, set CODEPRACTICE__AUTH__JWT_SECRET in production"
        );
    }

    let db = init_db(&config.database.url).await?;

    seed::seed_problems(&db).await?;
    seed::ensure_indexes(&db).await?;

    let executor = PistonClient::new(&config.execution)?;

    let addr = format!("{}:{}", config.server.host, config.server.port);

    let state = AppState {
        db,
        config,
        executor: Arc::new(executor),
    };

    let app = server::build_router(state);

    let listener = TcpListener::bind(&addr).await?;
    info!("Server running at http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
