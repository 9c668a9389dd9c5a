//! # swydo-client
//!
//! A typed Rust client for the Swydo marketing-reporting REST API.
//!
//! ## Features
//!
//! - **Clean API**: one method per documented Swydo endpoint
//! - **Async/Await**: built on tokio and reqwest
//! - **Type Safe**: strongly typed requests and responses via swydo-models
//! - **Typed Errors**: non-2xx responses carry the HTTP status code so
//!   callers can branch (e.g. treat 404 as absence)
//! - **Configurable**: environment-based configuration via swydo-core
//!
//! ## Usage
//!
//! ```rust,no_run
//! use swydo_client::SwydoClient;
//! use swydo_core::Config;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let client = SwydoClient::new(config)?;
//!
//!     // List teams and their clients
//!     for team in client.teams().list().await? {
//!         let clients = client.clients().list(&team.id).await?;
//!         println!("team {} has {} clients", team.id, clients.len());
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All methods return `Result<T, swydo_core::Error>`. Non-2xx responses
//! surface as [`Error::Api`](swydo_core::Error::Api) with the status
//! code and the Swydo error code from the body:
//!
//! ```rust,no_run
//! # use swydo_client::SwydoClient;
//! # use swydo_core::Config;
//! # async fn example(client: SwydoClient) -> Result<(), swydo_core::Error> {
//! match client.data_sources().get("teamId", "clientId").await {
//!     Ok(sources) => println!("{} data sources", sources.data_sources.len()),
//!     Err(e) if e.is_not_found() => println!("no data sources configured"),
//!     Err(e) => return Err(e),
//! }
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod endpoints;
pub mod transport;

// Re-export the main client and common types
pub use client::SwydoClient;
pub use swydo_core::{ComparePeriod, Config, Error, Provider, Result, UserState};
pub use swydo_models::*;

// Re-export endpoint modules for direct access if needed
pub use endpoints::{
  clients::ClientsEndpoints, connections::ConnectionsEndpoints, data_sources::DataSourcesEndpoints,
  reports::ReportsEndpoints, teams::TeamsEndpoints, templates::TemplatesEndpoints,
};

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_config_re_export() {
    let config = Config::default_with_key("test_key".to_string());
    assert_eq!(config.api_key, "test_key");
  }
}
