//! Brand and report template endpoints

use crate::transport::Transport;
use std::sync::Arc;
use swydo_core::{require_id, Result};
use swydo_models::{BrandTemplate, ReportTemplate};
use tracing::instrument;

/// Endpoints for brand and report templates
pub struct TemplatesEndpoints {
  transport: Arc<Transport>,
}

impl TemplatesEndpoints {
  /// Create a new templates endpoints instance
  pub fn new(transport: Arc<Transport>) -> Self {
    Self { transport }
  }

  /// List a team's brand templates
  #[instrument(skip(self))]
  pub async fn list_brand_templates(&self, team_id: &str) -> Result<Vec<BrandTemplate>> {
    require_id("teamId", team_id)?;
    self.transport.get_all(&["teams", team_id, "brandTemplates"], &[]).await
  }

  /// Get all available information for a single brand template
  #[instrument(skip(self))]
  pub async fn get_brand_template(
    &self,
    team_id: &str,
    brand_template_id: &str,
  ) -> Result<BrandTemplate> {
    require_id("teamId", team_id)?;
    require_id("brandTemplateId", brand_template_id)?;
    self.transport.get(&["teams", team_id, "brandTemplates", brand_template_id], &[]).await
  }

  /// List a team's report templates
  #[instrument(skip(self))]
  pub async fn list_report_templates(&self, team_id: &str) -> Result<Vec<ReportTemplate>> {
    require_id("teamId", team_id)?;
    self.transport.get_all(&["teams", team_id, "reportTemplates"], &[]).await
  }

  /// Get all available information for a single report template
  #[instrument(skip(self))]
  pub async fn get_report_template(
    &self,
    team_id: &str,
    report_template_id: &str,
  ) -> Result<ReportTemplate> {
    require_id("teamId", team_id)?;
    require_id("reportTemplateId", report_template_id)?;
    self.transport.get(&["teams", team_id, "reportTemplates", report_template_id], &[]).await
  }
}
