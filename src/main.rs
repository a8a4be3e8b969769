use clap::Parser;
use dotenv::dotenv;
use std::sync::Arc;
use tracing::info;
use tracing_appender::rolling;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use aleph_monitor::server::config::ServerConfig;
use aleph_monitor::services::aleph::AlephClient;
use aleph_monitor::version::VERSION;
use aleph_monitor::web;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the configuration file
    #[arg(short, long)]
    config: Option<String>,
}

fn init_logging(log_dir: &str) {
    // Log to a file: JSON format, daily rotation
    let file_appender = rolling::daily(log_dir, "monitor.log");
    let file_layer = fmt::layer()
        .with_writer(file_appender)
        .with_ansi(false)
        .json();

    // Log to stdout: human-readable format
    let stdout_layer = fmt::layer().with_writer(std::io::stdout);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stdout_layer)
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Manually check for --version before full parsing to keep the output simple.
    if std::env::args().any(|arg| arg == "--version") {
        println!("Monitor version: {VERSION}");
        return Ok(());
    }

    let args = Args::parse();
    dotenv().ok();

    let server_config = match ServerConfig::load(args.config.as_deref()) {
        Ok(config) => Arc::new(config),
        Err(e) => {
            eprintln!("Failed to load server configuration: {e}");
            return Err(e.into());
        }
    };

    init_logging(&server_config.log_dir);
    info!("Starting Aleph Cloud Monitor, version: {}", VERSION);

    let aleph = AlephClient::new(&server_config);
    let app = web::create_axum_router(aleph, server_config.clone());

    let listener = tokio::net::TcpListener::bind(&server_config.listen_addr).await?;
    info!(address = %server_config.listen_addr, "HTTP server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
