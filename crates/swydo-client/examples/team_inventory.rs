//! Team Inventory Example
//!
//! Walks every team the API key can see and prints its users, clients,
//! templates, and reports. Demonstrates list pagination and branching
//! on typed 404 errors for data sources.
//!
//! Run with: SWYDO_API_KEY=... cargo run --example team_inventory

use swydo_client::SwydoClient;
use swydo_core::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  // Initialize logging
  tracing_subscriber::fmt::init();

  // Load configuration from environment
  let config = Config::from_env()?;
  let client = SwydoClient::new(config)?;

  for team in client.teams().list().await? {
    println!("Team {} ({})", team.name.as_deref().unwrap_or("unnamed"), team.id);

    let users = client.teams().list_users(&team.id).await?;
    println!("  {} users", users.len());

    let templates = client.templates().list_report_templates(&team.id).await?;
    println!("  {} report templates", templates.len());

    for entry in client.clients().list(&team.id).await? {
      println!(
        "  Client {} ({})",
        entry.name.as_deref().unwrap_or("unnamed"),
        entry.id
      );

      // A client without data sources answers 404; treat it as empty
      match client.data_sources().get(&team.id, &entry.id).await {
        Ok(sources) => println!("    {} data sources", sources.data_sources.len()),
        Err(e) if e.is_not_found() => println!("    no data sources configured"),
        Err(e) => return Err(e.into()),
      }
    }

    for report in client.reports().list(&team.id).await? {
      println!(
        "  Report {} ({}) shared={}",
        report.name.as_deref().unwrap_or("unnamed"),
        report.id,
        report.shared.unwrap_or(false)
      );
    }
  }

  Ok(())
}
