use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use chessline::core::DEFAULT_SERVER_URL;
use chessline::networking::{Session, WsTransport};
use chessline::ui;

/// Console client for a two-player chess server
#[derive(Debug, Parser)]
#[command(name = "chessline", version, about)]
struct Cli {
    /// WebSocket URL of the game endpoint
    #[arg(long, default_value = DEFAULT_SERVER_URL)]
    url: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let transport = WsTransport::connect(&cli.url)
        .await
        .with_context(|| format!("could not connect to {}", cli.url))?;

    let (session, handle) = Session::new(transport);
    let frontend = tokio::spawn(ui::console::run(handle));

    let result = session.run().await;
    frontend.abort();
    result.context("session ended with a transport error")
}
