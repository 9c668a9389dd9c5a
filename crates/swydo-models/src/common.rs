//! Common structures shared across Swydo API responses

use serde::{Deserialize, Serialize};

/// Envelope returned by every list endpoint
///
/// Swydo pages list results with a `skip` offset; each page reports the
/// total number of matching items so the client knows when to stop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
  /// Items on this page
  #[serde(default = "Vec::new")]
  pub items: Vec<T>,

  /// Total number of items matching the request
  #[serde(default)]
  pub total: u64,
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::Value;

  #[test]
  fn test_page_deserializes_items_and_total() {
    let json = r#"{"items": [{"id": "a"}, {"id": "b"}], "total": 7}"#;
    let page: Page<Value> = serde_json::from_str(json).unwrap();
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.total, 7);
  }

  #[test]
  fn test_page_defaults_when_fields_missing() {
    let page: Page<Value> = serde_json::from_str("{}").unwrap();
    assert!(page.items.is_empty());
    assert_eq!(page.total, 0);
  }
}
