//! Connection endpoints

use crate::transport::Transport;
use std::sync::Arc;
use swydo_core::{require_id, Result};
use swydo_models::Connection;
use tracing::instrument;

/// Endpoints for provider connections
pub struct ConnectionsEndpoints {
  transport: Arc<Transport>,
}

impl ConnectionsEndpoints {
  /// Create a new connections endpoints instance
  pub fn new(transport: Arc<Transport>) -> Self {
    Self { transport }
  }

  /// List every connection of a team
  #[instrument(skip(self))]
  pub async fn list(&self, team_id: &str) -> Result<Vec<Connection>> {
    self.list_filtered(team_id, None, None).await
  }

  /// List a team's connections, optionally filtered by owning user
  /// and/or provider
  #[instrument(skip(self))]
  pub async fn list_filtered(
    &self,
    team_id: &str,
    user_id: Option<&str>,
    provider_id: Option<&str>,
  ) -> Result<Vec<Connection>> {
    require_id("teamId", team_id)?;

    let mut query: Vec<(&str, String)> = Vec::new();
    if let Some(user_id) = user_id {
      query.push(("userId", user_id.to_string()));
    }
    if let Some(provider_id) = provider_id {
      query.push(("providerId", provider_id.to_string()));
    }

    self.transport.get_all(&["teams", team_id, "connections"], &query).await
  }

  /// Get all available information for a single connection
  #[instrument(skip(self))]
  pub async fn get(&self, team_id: &str, connection_id: &str) -> Result<Connection> {
    require_id("teamId", team_id)?;
    require_id("connectionId", connection_id)?;
    self.transport.get(&["teams", team_id, "connections", connection_id], &[]).await
  }
}
