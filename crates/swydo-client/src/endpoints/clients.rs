//! Client (end-customer) endpoints

use crate::transport::Transport;
use std::sync::Arc;
use swydo_core::{require_id, Result};
use swydo_models::{Client, ClientCreate, ClientUpdate};
use tracing::instrument;

/// Endpoints for a team's clients
pub struct ClientsEndpoints {
  transport: Arc<Transport>,
}

impl ClientsEndpoints {
  /// Create a new clients endpoints instance
  pub fn new(transport: Arc<Transport>) -> Self {
    Self { transport }
  }

  /// List a team's clients
  #[instrument(skip(self))]
  pub async fn list(&self, team_id: &str) -> Result<Vec<Client>> {
    require_id("teamId", team_id)?;
    self.transport.get_all(&["teams", team_id, "clients"], &[]).await
  }

  /// Get all available information for a single client
  #[instrument(skip(self))]
  pub async fn get(&self, team_id: &str, client_id: &str) -> Result<Client> {
    require_id("teamId", team_id)?;
    require_id("clientId", client_id)?;
    self.transport.get(&["teams", team_id, "clients", client_id], &[]).await
  }

  /// Create a client
  #[instrument(skip(self, body))]
  pub async fn create(&self, team_id: &str, body: ClientCreate) -> Result<Client> {
    require_id("teamId", team_id)?;
    self.transport.post(&["teams", team_id, "clients"], &body).await
  }

  /// Update an existing client with new values
  #[instrument(skip(self, body))]
  pub async fn update(&self, team_id: &str, client_id: &str, body: ClientUpdate) -> Result<Client> {
    require_id("teamId", team_id)?;
    require_id("clientId", client_id)?;
    self.transport.patch(&["teams", team_id, "clients", client_id], &body).await
  }

  /// Archive a client; archived clients cannot be used until unarchived
  #[instrument(skip(self))]
  pub async fn archive(&self, team_id: &str, client_id: &str) -> Result<()> {
    require_id("teamId", team_id)?;
    require_id("clientId", client_id)?;
    self.transport.post_action(&["teams", team_id, "clients", client_id, "archive"]).await
  }

  /// Unarchive a client so it can be used again
  #[instrument(skip(self))]
  pub async fn unarchive(&self, team_id: &str, client_id: &str) -> Result<()> {
    require_id("teamId", team_id)?;
    require_id("clientId", client_id)?;
    self.transport.post_action(&["teams", team_id, "clients", client_id, "unarchive"]).await
  }
}
