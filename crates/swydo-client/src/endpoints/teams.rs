//! Team and team-user endpoints

use crate::transport::Transport;
use std::sync::Arc;
use swydo_core::{require_id, Result, UserState};
use swydo_models::{Team, User};
use tracing::instrument;

/// Endpoints for teams and their users
pub struct TeamsEndpoints {
  transport: Arc<Transport>,
}

impl TeamsEndpoints {
  /// Create a new teams endpoints instance
  pub fn new(transport: Arc<Transport>) -> Self {
    Self { transport }
  }

  /// List every team the API key has access to
  #[instrument(skip(self))]
  pub async fn list(&self) -> Result<Vec<Team>> {
    self.transport.get_all(&["teams"], &[]).await
  }

  /// Get all available information for a single team
  #[instrument(skip(self))]
  pub async fn get(&self, team_id: &str) -> Result<Team> {
    require_id("teamId", team_id)?;
    self.transport.get(&["teams", team_id], &[]).await
  }

  /// List the users of a team
  #[instrument(skip(self))]
  pub async fn list_users(&self, team_id: &str) -> Result<Vec<User>> {
    require_id("teamId", team_id)?;
    self.transport.get_all(&["teams", team_id, "users"], &[]).await
  }

  /// List the users of a team in a given membership state
  #[instrument(skip(self))]
  pub async fn list_users_with_state(
    &self,
    team_id: &str,
    state: UserState,
  ) -> Result<Vec<User>> {
    require_id("teamId", team_id)?;
    let query = [("state", state.to_string())];
    self.transport.get_all(&["teams", team_id, "users"], &query).await
  }

  /// Get all available information for a single user
  #[instrument(skip(self))]
  pub async fn get_user(&self, team_id: &str, user_id: &str) -> Result<User> {
    require_id("teamId", team_id)?;
    require_id("userId", user_id)?;
    self.transport.get(&["teams", team_id, "users", user_id], &[]).await
  }
}
