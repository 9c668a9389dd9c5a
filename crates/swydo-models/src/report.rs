//! Report resource

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use swydo_core::ComparePeriod;

/// A report produced for a client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
  /// Server-assigned report identifier
  pub id: String,

  /// Display name
  #[serde(skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,

  /// Client the report is produced for
  #[serde(skip_serializing_if = "Option::is_none")]
  pub client_id: Option<String>,

  /// Brand template applied to the report
  #[serde(skip_serializing_if = "Option::is_none")]
  pub brand_template_id: Option<String>,

  /// Report template the report is built from
  #[serde(skip_serializing_if = "Option::is_none")]
  pub report_template_id: Option<String>,

  /// Comparison period
  #[serde(skip_serializing_if = "Option::is_none")]
  pub compare_period: Option<ComparePeriod>,

  /// Team member credited as author
  #[serde(skip_serializing_if = "Option::is_none")]
  pub author_id: Option<String>,

  /// Whether a public share link is active
  #[serde(skip_serializing_if = "Option::is_none")]
  pub shared: Option<bool>,

  /// Undocumented fields, preserved as-is
  #[serde(flatten)]
  pub extra: Map<String, Value>,
}

/// Body for creating a report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportCreate {
  /// Display name
  pub name: String,

  /// Client the report is produced for
  pub client_id: String,

  /// Brand template to apply
  pub brand_template_id: String,

  /// Report template to build from
  pub report_template_id: String,

  /// Comparison period
  pub compare_period: ComparePeriod,

  /// Team member credited as author
  #[serde(skip_serializing_if = "Option::is_none")]
  pub author_id: Option<String>,
}

impl ReportCreate {
  /// Build a create body with all required fields
  pub fn new(
    name: impl Into<String>,
    client_id: impl Into<String>,
    brand_template_id: impl Into<String>,
    report_template_id: impl Into<String>,
    compare_period: ComparePeriod,
  ) -> Self {
    Self {
      name: name.into(),
      client_id: client_id.into(),
      brand_template_id: brand_template_id.into(),
      report_template_id: report_template_id.into(),
      compare_period,
      author_id: None,
    }
  }

  /// Set the author
  pub fn author_id(mut self, author_id: impl Into<String>) -> Self {
    self.author_id = Some(author_id.into());
    self
  }
}

/// Body for updating a report; unset fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportUpdate {
  /// New display name
  #[serde(skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,

  /// Move the report to another client
  #[serde(skip_serializing_if = "Option::is_none")]
  pub client_id: Option<String>,

  /// New brand template
  #[serde(skip_serializing_if = "Option::is_none")]
  pub brand_template_id: Option<String>,

  /// New report template
  #[serde(skip_serializing_if = "Option::is_none")]
  pub report_template_id: Option<String>,

  /// New comparison period
  #[serde(skip_serializing_if = "Option::is_none")]
  pub compare_period: Option<ComparePeriod>,

  /// New author
  #[serde(skip_serializing_if = "Option::is_none")]
  pub author_id: Option<String>,
}

impl ReportUpdate {
  /// Create an empty update
  pub fn new() -> Self {
    Self::default()
  }

  /// Set a new display name
  pub fn name(mut self, name: impl Into<String>) -> Self {
    self.name = Some(name.into());
    self
  }

  /// Move the report to another client
  pub fn client_id(mut self, client_id: impl Into<String>) -> Self {
    self.client_id = Some(client_id.into());
    self
  }

  /// Set a new brand template
  pub fn brand_template_id(mut self, id: impl Into<String>) -> Self {
    self.brand_template_id = Some(id.into());
    self
  }

  /// Set a new report template
  pub fn report_template_id(mut self, id: impl Into<String>) -> Self {
    self.report_template_id = Some(id.into());
    self
  }

  /// Set a new comparison period
  pub fn compare_period(mut self, period: ComparePeriod) -> Self {
    self.compare_period = Some(period);
    self
  }

  /// Set a new author
  pub fn author_id(mut self, author_id: impl Into<String>) -> Self {
    self.author_id = Some(author_id.into());
    self
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_report_create_wire_shape() {
    let body = ReportCreate::new("Monthly", "c1", "b1", "rt1", ComparePeriod::LastYear);
    let json = serde_json::to_value(&body).unwrap();
    assert_eq!(
      json,
      serde_json::json!({
        "name": "Monthly",
        "clientId": "c1",
        "brandTemplateId": "b1",
        "reportTemplateId": "rt1",
        "comparePeriod": "lastYear"
      })
    );
  }

  #[test]
  fn test_report_update_only_sends_set_fields() {
    let body = ReportUpdate::new().compare_period(ComparePeriod::Previous);
    let json = serde_json::to_value(&body).unwrap();
    assert_eq!(json, serde_json::json!({"comparePeriod": "previous"}));
  }

  #[test]
  fn test_report_round_trips_unknown_fields() {
    let json = r#"{"id": "r1", "name": "Monthly", "comparePeriod": "previousMonth", "shareUrl": "https://x"}"#;
    let report: Report = serde_json::from_str(json).unwrap();
    assert_eq!(report.compare_period, Some(ComparePeriod::PreviousMonth));

    let back: Value = serde_json::to_value(&report).unwrap();
    assert_eq!(back, serde_json::from_str::<Value>(json).unwrap());
  }
}
