//! Ghostream - Lightweight streaming front-end
//!
//! Serves the viewer pages and authenticates RTMP publishers against a
//! directory server.

use clap::{Parser, Subcommand};
use ghostream_core::GhostreamConfig;
use ghostream_web::WebServer;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "ghostream")]
#[command(author = "Ghostream Team")]
#[command(version = ghostream_core::VERSION)]
#[command(about = "Lightweight streaming front-end", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Listen address, host:port
    #[arg(long, env = "GHOSTREAM_LISTEN_ADDRESS")]
    bind: Option<String>,

    /// Authentication backend (ldap, basic, bypass)
    #[arg(long, env = "GHOSTREAM_AUTH_BACKEND")]
    auth_backend: Option<String>,

    /// Directory server URI
    #[arg(long, env = "LDAP_URI")]
    ldap_uri: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "GHOSTREAM_LOG_LEVEL", default_value = "info")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web server
    Server,

    /// Show version information
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Initialize logging
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(filter)
        .init();

    // Load or create config
    let mut config = if let Some(config_path) = &cli.config {
        let config = GhostreamConfig::from_file(config_path)?;
        info!("Using config file: {}", config_path);
        config
    } else {
        GhostreamConfig::from_env()
    };

    // Override with CLI args
    if let Some(bind) = cli.bind {
        config.server.listen_address = bind;
    }
    if let Some(backend) = cli.auth_backend {
        config.auth.backend = backend;
    }
    if let Some(uri) = cli.ldap_uri {
        config.ldap.uri = uri;
    }

    match cli.command {
        Some(Commands::Version) => {
            println!("ghostream {}", ghostream_core::VERSION);
        }
        Some(Commands::Server) | None => {
            WebServer::new(config).run().await?;
        }
    }

    Ok(())
}
