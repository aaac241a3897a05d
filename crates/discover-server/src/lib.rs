//! Discover Server - HTTP node for the Discover map browser
//!
//! Serves the content snapshot, map scenes for the public map, and the
//! location searches used by the map, the dashboard and the content form.
//!
//! # Example
//!
//! ```no_run
//! use discover_server::{DiscoverConfig, DiscoverNode};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DiscoverConfig::from_env()?;
//!     let node = DiscoverNode::new(config)?;
//!     node.run().await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod node;

pub use api::build_router;
pub use config::DiscoverConfig;
pub use error::{Error, Result};
pub use node::{AppState, DiscoverNode};
