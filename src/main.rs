// src/main.rs

use std::net::SocketAddr;

use anyhow::Result;
use clap::{Parser, Subcommand};
use larder::server::{ServerConfig, run};

#[derive(Parser)]
#[command(name = "larder")]
#[command(author, version, about = "In-memory cookbook service with recursive recipe summarization", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the cookbook HTTP server
    Serve {
        /// Address to bind to
        #[arg(short, long, default_value = "0.0.0.0:8080")]
        bind: SocketAddr,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve { bind }) => run(ServerConfig { bind_addr: bind }).await,
        None => {
            println!("Larder cookbook service v{}", env!("CARGO_PKG_VERSION"));
            println!("Run 'larder --help' for usage information");
            Ok(())
        }
    }
}
