use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use polls::{config, create_app, db, run_migrations};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Sets up logging to stdout and, when the config directory exists, to a
/// daily rolling JSON log file inside it
///
/// The returned guard flushes the file writer and must be held until exit.
fn init_tracing(debug: bool) -> Option<WorkerGuard> {
    let default_level = if debug { "polls=debug,tower_http=debug" } else { "polls=info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let log_dir = config::get_config_dir_path()
        .filter(|dir| dir.exists())
        .map(|dir| dir.join("logs"));

    match log_dir {
        Some(dir) => {
            let file_appender = tracing_appender::rolling::daily(dir, "polls.log");
            let (writer, guard) = tracing_appender::non_blocking(file_appender);
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer())
                .with(fmt::layer().json().with_writer(writer))
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer())
                .init();
            None
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables before clap reads its env fallbacks
    dotenv::dotenv().ok();

    let args = config::CliArgs::parse();
    let _guard = init_tracing(args.debug);

    let config = config::get_config(&args);

    // Initialize the database pool and bring the schema up to date
    let pool = db::init_pool(&config.database_url)?;
    {
        let mut conn = pool.get().context("Failed to get a database connection")?;
        run_migrations(&mut conn)?;
    }

    let app = create_app(Arc::new(pool));

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            info!("Shutting down");
        })
        .await
        .context("Server error")?;

    Ok(())
}
