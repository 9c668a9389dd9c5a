//! Create Report Example
//!
//! Creates a client and builds a shared report from the first
//! available brand and report templates.
//!
//! Run with: SWYDO_API_KEY=... SWYDO_TEAM_ID=... cargo run --example create_report

use swydo_client::SwydoClient;
use swydo_core::{ComparePeriod, Config};
use swydo_models::{ClientCreate, ReportCreate};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  tracing_subscriber::fmt::init();

  let config = Config::from_env()?;
  let client = SwydoClient::new(config)?;

  let team_id = std::env::var("SWYDO_TEAM_ID")?;

  let created = client
    .clients()
    .create(
      &team_id,
      ClientCreate::new("Example Client").description("Created by the create_report example"),
    )
    .await?;
  println!("Created client {}", created.id);

  let brand = client
    .templates()
    .list_brand_templates(&team_id)
    .await?
    .into_iter()
    .next()
    .ok_or("team has no brand templates")?;
  let template = client
    .templates()
    .list_report_templates(&team_id)
    .await?
    .into_iter()
    .next()
    .ok_or("team has no report templates")?;

  let report = client
    .reports()
    .create(
      &team_id,
      ReportCreate::new("Example Report", &created.id, brand.id, template.id, ComparePeriod::Previous),
    )
    .await?;
  println!("Created report {}", report.id);

  client.reports().share(&team_id, &report.id).await?;
  println!("Report shared");

  Ok(())
}
