//! Brand and report template resources

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A brand template (logo, colors, layout applied to reports)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandTemplate {
  /// Server-assigned template identifier
  pub id: String,

  /// Display name
  #[serde(skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,

  /// Undocumented fields, preserved as-is
  #[serde(flatten)]
  pub extra: Map<String, Value>,
}

/// A report template (widget/section structure reports are built from)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportTemplate {
  /// Server-assigned template identifier
  pub id: String,

  /// Display name
  #[serde(skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,

  /// Undocumented fields, preserved as-is
  #[serde(flatten)]
  pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_templates_deserialize() {
    let brand: BrandTemplate = serde_json::from_str(r#"{"id": "b1", "name": "Default"}"#).unwrap();
    assert_eq!(brand.id, "b1");

    let report: ReportTemplate =
      serde_json::from_str(r#"{"id": "r1", "widgets": []}"#).unwrap();
    assert_eq!(report.id, "r1");
    assert!(report.extra.contains_key("widgets"));
  }
}
