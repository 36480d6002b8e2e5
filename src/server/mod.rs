// src/server/mod.rs
//! HTTP transport for the cookbook service
//!
//! Thin axum layer over the three core operations: name normalization,
//! entry registration, and summary queries. The registry is shared behind
//! a reader-writer lock so concurrent summary queries proceed in parallel
//! while registrations are serialized against readers and each other.

mod handlers;
mod routes;

pub use routes::create_router;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tokio::sync::RwLock;

use crate::cookbook::CookbookStore;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to
    pub bind_addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".parse().unwrap(),
        }
    }
}

/// Shared server state: the registry behind a many-readers lock
pub type SharedStore = Arc<RwLock<CookbookStore>>;

/// Start the cookbook server
pub async fn run(config: ServerConfig) -> Result<()> {
    tracing::info!("Starting larder server on {}", config.bind_addr);

    let store: SharedStore = Arc::new(RwLock::new(CookbookStore::new()));
    let app = create_router(store);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Larder is ready to serve");

    axum::serve(listener, app).await?;
    Ok(())
}
