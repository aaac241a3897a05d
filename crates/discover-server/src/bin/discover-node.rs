//! Discover Node binary
//!
//! Serves the Discover map browser API.

use discover_server::{DiscoverConfig, DiscoverNode};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "discover_node=info,discover=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Discover Node");

    let config = DiscoverConfig::from_env()?;
    let node = DiscoverNode::new(config)?;
    node.run().await?;

    Ok(())
}
