//! HTTP client library for the OGE items API.
//!
//! # Example
//!
//! ```no_run
//! use oge_client::{ClientConfig, ItemsQuery, OgeClient};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), oge_client::Error> {
//!     let client = OgeClient::new(ClientConfig {
//!         base_url: "http://localhost:8080".into(),
//!         timeout: Duration::from_secs(30),
//!     })?;
//!
//!     let health = client.health_check().await?;
//!     println!("Status: {}", health.status);
//!
//!     let items = client.list_items(Some(&ItemsQuery { limit: Some(5) })).await?;
//!     println!("Fetched {} items", items.len());
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod types;

pub use client::{ClientConfig, OgeClient};
pub use error::Error;
pub use types::*;
