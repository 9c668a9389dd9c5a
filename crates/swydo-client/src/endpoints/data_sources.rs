//! Client data-source endpoints
//!
//! Each provider has one data-source slot per client, addressed by its
//! own path segment. Absence is reported by the API as a 404 with error
//! code `DATASOURCE_NOT_FOUND`; that surfaces here as a typed error so
//! callers can branch with
//! [`Error::is_not_found`](swydo_core::Error::is_not_found).

use crate::transport::Transport;
use serde::Serialize;
use std::sync::Arc;
use swydo_core::{require_id, Provider, Result};
use swydo_models::{
  ClientDataSources, DataSourceCreate, FacebookAdsScope, FacebookGraphScope, GoogleAdWordsScope,
  GoogleAnalyticsScope,
};
use tracing::instrument;

/// Endpoints for client data sources
pub struct DataSourcesEndpoints {
  transport: Arc<Transport>,
}

impl DataSourcesEndpoints {
  /// Create a new data-sources endpoints instance
  pub fn new(transport: Arc<Transport>) -> Self {
    Self { transport }
  }

  /// Get a client's configured data sources
  #[instrument(skip(self))]
  pub async fn get(&self, team_id: &str, client_id: &str) -> Result<ClientDataSources> {
    require_id("teamId", team_id)?;
    require_id("clientId", client_id)?;
    self.transport.get(&["teams", team_id, "clients", client_id, "dataSources"], &[]).await
  }

  /// Set a client's Facebook Ads data source
  #[instrument(skip(self, body))]
  pub async fn set_facebook_ads(
    &self,
    team_id: &str,
    client_id: &str,
    body: DataSourceCreate<FacebookAdsScope>,
  ) -> Result<ClientDataSources> {
    self.set(team_id, client_id, Provider::FacebookAds, &body).await
  }

  /// Remove a client's Facebook Ads data source
  #[instrument(skip(self))]
  pub async fn remove_facebook_ads(&self, team_id: &str, client_id: &str) -> Result<()> {
    self.remove(team_id, client_id, Provider::FacebookAds).await
  }

  /// Set a client's Facebook Graph (page) data source
  #[instrument(skip(self, body))]
  pub async fn set_facebook_graph(
    &self,
    team_id: &str,
    client_id: &str,
    body: DataSourceCreate<FacebookGraphScope>,
  ) -> Result<ClientDataSources> {
    self.set(team_id, client_id, Provider::FacebookGraph, &body).await
  }

  /// Remove a client's Facebook Graph data source
  #[instrument(skip(self))]
  pub async fn remove_facebook_graph(&self, team_id: &str, client_id: &str) -> Result<()> {
    self.remove(team_id, client_id, Provider::FacebookGraph).await
  }

  /// Set a client's Google AdWords data source
  #[instrument(skip(self, body))]
  pub async fn set_google_ad_words(
    &self,
    team_id: &str,
    client_id: &str,
    body: DataSourceCreate<GoogleAdWordsScope>,
  ) -> Result<ClientDataSources> {
    self.set(team_id, client_id, Provider::GoogleAdWords, &body).await
  }

  /// Remove a client's Google AdWords data source
  #[instrument(skip(self))]
  pub async fn remove_google_ad_words(&self, team_id: &str, client_id: &str) -> Result<()> {
    self.remove(team_id, client_id, Provider::GoogleAdWords).await
  }

  /// Set a client's Google Analytics data source
  #[instrument(skip(self, body))]
  pub async fn set_google_analytics(
    &self,
    team_id: &str,
    client_id: &str,
    body: DataSourceCreate<GoogleAnalyticsScope>,
  ) -> Result<ClientDataSources> {
    self.set(team_id, client_id, Provider::GoogleAnalytics, &body).await
  }

  /// Remove a client's Google Analytics data source
  #[instrument(skip(self))]
  pub async fn remove_google_analytics(&self, team_id: &str, client_id: &str) -> Result<()> {
    self.remove(team_id, client_id, Provider::GoogleAnalytics).await
  }

  async fn set<S>(
    &self,
    team_id: &str,
    client_id: &str,
    provider: Provider,
    body: &DataSourceCreate<S>,
  ) -> Result<ClientDataSources>
  where
    S: Serialize,
  {
    require_id("teamId", team_id)?;
    require_id("clientId", client_id)?;
    self.transport.post(&Self::provider_segments(team_id, client_id, provider), body).await
  }

  async fn remove(&self, team_id: &str, client_id: &str, provider: Provider) -> Result<()> {
    require_id("teamId", team_id)?;
    require_id("clientId", client_id)?;
    self.transport.delete(&Self::provider_segments(team_id, client_id, provider)).await
  }

  fn provider_segments<'a>(
    team_id: &'a str,
    client_id: &'a str,
    provider: Provider,
  ) -> [&'a str; 6] {
    ["teams", team_id, "clients", client_id, "dataSources", provider.as_str()]
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_provider_segments() {
    assert_eq!(
      DataSourcesEndpoints::provider_segments("t1", "c1", Provider::GoogleAnalytics),
      ["teams", "t1", "clients", "c1", "dataSources", "googleAnalytics"]
    );
  }
}
