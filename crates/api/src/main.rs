use std::net::SocketAddr;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use camp_api::config::ServerConfig;
use camp_api::router::build_app_router;
use camp_api::state::AppState;

const DEFAULT_LOG_FILTER: &str = "camp_api=debug,camp_db=debug,tower_http=debug";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ServerConfig::from_env();
    let pool = open_store(&config.database_url).await;

    let app = build_app_router(AppState { pool: pool.clone() }, &config);

    let addr = SocketAddr::new(
        config.host.parse().expect("HOST must be an IP address"),
        config.port,
    );
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| panic!("cannot bind {addr}: {e}"));
    tracing::info!(%addr, timeout_secs = config.request_timeout_secs, "Camp API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("HTTP server failed");

    pool.close().await;
    tracing::info!("Camp API stopped");
}

/// Log to stdout, filtered by `RUST_LOG` when set.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Connect to Postgres, confirm it answers, and bring the schema up to date.
///
/// Any failure here is fatal: the server has nothing to serve without a store.
async fn open_store(database_url: &str) -> camp_db::DbPool {
    let pool = camp_db::create_pool(database_url)
        .await
        .expect("cannot connect to the camp database");
    camp_db::health_check(&pool)
        .await
        .expect("camp database did not answer SELECT 1");
    camp_db::run_migrations(&pool)
        .await
        .expect("camp schema migrations failed");
    tracing::info!("Camp database ready");
    pool
}

/// Resolve once the process is asked to stop: Ctrl-C anywhere, SIGTERM on Unix.
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut sigterm = match signal(SignalKind::terminate()) {
            Ok(stream) => stream,
            Err(e) => {
                tracing::warn!(error = %e, "SIGTERM handler unavailable; only Ctrl-C stops the server");
                wait_for_ctrl_c().await;
                return;
            }
        };
        tokio::select! {
            () = wait_for_ctrl_c() => {}
            _ = sigterm.recv() => tracing::info!("SIGTERM received, draining connections"),
        }
    }

    #[cfg(not(unix))]
    wait_for_ctrl_c().await;
}

async fn wait_for_ctrl_c() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Ctrl-C received, draining connections"),
        Err(e) => {
            tracing::warn!(error = %e, "Ctrl-C handler unavailable");
            std::future::pending::<()>().await;
        }
    }
}
