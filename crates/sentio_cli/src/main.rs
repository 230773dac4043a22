use anyhow::Result;
use clap::Parser;
use sentio_chat::{ConversationController, MemorySessionStore, SessionStore};
use sentio_core::sentiment::KeywordOracle;
use sentio_core::{SentimentOracle, SentioConfig};
use sentio_gateway::GatewayServer;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the TOML config file
    #[arg(short, long, default_value = "sentio.toml")]
    config: String,

    /// Override the bind host from the config
    #[arg(long)]
    host: Option<String>,

    /// Override the bind port from the config
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();
    let mut config = SentioConfig::load_or_default(&args.config);
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    info!("Initializing Sentio...");

    let store: Arc<MemorySessionStore> =
        Arc::new(MemorySessionStore::new(config.session.ttl_secs));
    let oracle: Arc<dyn SentimentOracle> = Arc::new(KeywordOracle);
    let controller = Arc::new(ConversationController::new(store.clone(), oracle.clone()));

    // Background expiry sweep so idle sessions don't pile up.
    let sweep_store = store.clone();
    let sweep_interval = Duration::from_secs(config.session.sweep_interval_secs.max(1));
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(sweep_interval);
        ticker.tick().await; // first tick fires immediately
        loop {
            ticker.tick().await;
            sweep_store.sweep_expired().await;
        }
    });

    let server = GatewayServer::new(
        controller,
        oracle,
        &config.server.host,
        config.server.port,
        &config.chat.default_language,
    );
    server.run().await
}
