//! Report endpoints

use crate::transport::Transport;
use std::sync::Arc;
use swydo_core::{require_id, Result};
use swydo_models::{Report, ReportCreate, ReportUpdate};
use tracing::instrument;

/// Endpoints for a team's reports
pub struct ReportsEndpoints {
  transport: Arc<Transport>,
}

impl ReportsEndpoints {
  /// Create a new reports endpoints instance
  pub fn new(transport: Arc<Transport>) -> Self {
    Self { transport }
  }

  /// List a team's reports
  #[instrument(skip(self))]
  pub async fn list(&self, team_id: &str) -> Result<Vec<Report>> {
    require_id("teamId", team_id)?;
    self.transport.get_all(&["teams", team_id, "reports"], &[]).await
  }

  /// Get all available information for a single report
  #[instrument(skip(self))]
  pub async fn get(&self, team_id: &str, report_id: &str) -> Result<Report> {
    require_id("teamId", team_id)?;
    require_id("reportId", report_id)?;
    self.transport.get(&["teams", team_id, "reports", report_id], &[]).await
  }

  /// Create a new report
  #[instrument(skip(self, body))]
  pub async fn create(&self, team_id: &str, body: ReportCreate) -> Result<Report> {
    require_id("teamId", team_id)?;
    self.transport.post(&["teams", team_id, "reports"], &body).await
  }

  /// Update an existing report
  #[instrument(skip(self, body))]
  pub async fn update(&self, team_id: &str, report_id: &str, body: ReportUpdate) -> Result<Report> {
    require_id("teamId", team_id)?;
    require_id("reportId", report_id)?;
    self.transport.patch(&["teams", team_id, "reports", report_id], &body).await
  }

  /// Delete a report
  #[instrument(skip(self))]
  pub async fn delete(&self, team_id: &str, report_id: &str) -> Result<()> {
    require_id("teamId", team_id)?;
    require_id("reportId", report_id)?;
    self.transport.delete(&["teams", team_id, "reports", report_id]).await
  }

  /// Activate a report's public share link
  #[instrument(skip(self))]
  pub async fn share(&self, team_id: &str, report_id: &str) -> Result<()> {
    require_id("teamId", team_id)?;
    require_id("reportId", report_id)?;
    self.transport.post_action(&["teams", team_id, "reports", report_id, "share"]).await
  }

  /// Deactivate a report's public share link
  #[instrument(skip(self))]
  pub async fn unshare(&self, team_id: &str, report_id: &str) -> Result<()> {
    require_id("teamId", team_id)?;
    require_id("reportId", report_id)?;
    self.transport.post_action(&["teams", team_id, "reports", report_id, "unshare"]).await
  }
}
