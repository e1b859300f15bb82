use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use infrastructure::{AppConfig, database};
use telemetry_server::{api, setup_app_state};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory holding default.toml and <RUN_MODE>.toml
    #[arg(long, default_value = "config")]
    config_dir: String,

    /// Bind host (overrides server.host)
    #[arg(long)]
    host: Option<String>,

    /// API Port (overrides server.port)
    #[arg(long)]
    port: Option<u16>,

    /// SQLite connection URL (overrides database.url)
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let args = Args::parse();

    let mut config = AppConfig::load(&args.config_dir)?;
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(url) = args.database_url {
        config.database.url = url;
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("🚚 Vehicle Telemetry Server Starting...");

    let db = database::connect(&config.database).await?;
    let state = setup_app_state(db);

    let app = api::create_router(state);
    let addr = config.bind_address();
    info!("🚀 API Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}
