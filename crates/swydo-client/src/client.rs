//! The main Swydo API client facade

use crate::endpoints::{
  clients::ClientsEndpoints, connections::ConnectionsEndpoints, data_sources::DataSourcesEndpoints,
  reports::ReportsEndpoints, teams::TeamsEndpoints, templates::TemplatesEndpoints,
};
use crate::transport::Transport;
use std::sync::Arc;
use swydo_core::{Config, Result};

/// Main Swydo API client
///
/// Provides access to every Swydo API endpoint through organized
/// endpoint groups sharing one authenticated transport.
///
/// # Examples
///
/// ```ignore
/// use swydo_client::SwydoClient;
/// use swydo_core::Config;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = Config::from_env()?;
///     let client = SwydoClient::new(config)?;
///
///     for team in client.teams().list().await? {
///         println!("team {}: {:?}", team.id, team.name);
///         for report in client.reports().list(&team.id).await? {
///             println!("  report {}: {:?}", report.id, report.name);
///         }
///     }
///
///     Ok(())
/// }
/// ```
pub struct SwydoClient {
  transport: Arc<Transport>,
}

impl SwydoClient {
  /// Create a new Swydo API client
  ///
  /// # Arguments
  ///
  /// * `config` - Configuration containing the API key and base URL
  ///
  /// # Errors
  ///
  /// Returns an error if the HTTP client cannot be created.
  ///
  /// # Examples
  ///
  /// ```rust,no_run
  /// use swydo_client::SwydoClient;
  /// use swydo_core::Config;
  ///
  /// let config = Config::from_env().expect("Missing API key");
  /// let client = SwydoClient::new(config).expect("Failed to create client");
  /// ```
  pub fn new(config: Config) -> Result<Self> {
    let transport = Arc::new(Transport::new(&config)?);
    Ok(Self { transport })
  }

  /// Get access to team and team-user endpoints
  pub fn teams(&self) -> TeamsEndpoints {
    TeamsEndpoints::new(self.transport.clone())
  }

  /// Get access to connection endpoints
  pub fn connections(&self) -> ConnectionsEndpoints {
    ConnectionsEndpoints::new(self.transport.clone())
  }

  /// Get access to brand and report template endpoints
  pub fn templates(&self) -> TemplatesEndpoints {
    TemplatesEndpoints::new(self.transport.clone())
  }

  /// Get access to client endpoints
  pub fn clients(&self) -> ClientsEndpoints {
    ClientsEndpoints::new(self.transport.clone())
  }

  /// Get access to client data-source endpoints
  pub fn data_sources(&self) -> DataSourcesEndpoints {
    DataSourcesEndpoints::new(self.transport.clone())
  }

  /// Get access to report endpoints
  pub fn reports(&self) -> ReportsEndpoints {
    ReportsEndpoints::new(self.transport.clone())
  }
}

impl std::fmt::Debug for SwydoClient {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("SwydoClient").field("transport", &self.transport).finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_client_creation() {
    let config = Config::default_with_key("test_key".to_string());
    let client = SwydoClient::new(config).expect("Failed to create client");
    assert_eq!(client.transport.base_url(), "https://api.swydo.com/v1");
  }

  #[test]
  fn test_client_base_url_trailing_slash_trimmed() {
    let mut config = Config::default_with_key("test_key".to_string());
    config.base_url = "https://example.test/v1/".to_string();
    let client = SwydoClient::new(config).expect("Failed to create client");
    assert_eq!(client.transport.base_url(), "https://example.test/v1");
  }
}
