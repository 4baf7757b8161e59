//! Client for the GloboDNS REST API: domains, records and BIND exports.
//!
//! ```no_run
//! use globodns::{DomainService, GloboDnsClient, ListDomainsParameters};
//!
//! # async fn run() -> globodns::Result<()> {
//! let client = GloboDnsClient::new("https://globodns.example.com")?;
//! client.set_token("secret");
//! let domains = client.list_domains(&ListDomainsParameters::default()).await?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod error;
mod serde_utils;

#[cfg(test)]
mod tests;

pub use api::*;
pub use config::Config;
pub use error::{Error, Result};
