//! # swydo-models
//!
//! Data models for Swydo API requests and responses.
//!
//! Every entity the API returns is identified by a server-assigned
//! string `id`. Beyond the documented fields, responses may carry
//! additional keys; each model keeps those in a flattened `extra` map
//! so entities round-trip unchanged.
//!
//! ## Usage
//!
//! ```ignore
//! use swydo_models::{Client, Page};
//!
//! let page: Page<Client> = serde_json::from_str(&response_json)?;
//! for client in &page.items {
//!     println!("{}: {:?}", client.id, client.name);
//! }
//! ```

#![warn(clippy::all)]

pub mod client;
pub mod common;
pub mod connection;
pub mod data_source;
pub mod report;
pub mod team;
pub mod template;
pub mod user;

// Re-export all model types
pub use client::*;
pub use common::*;
pub use connection::*;
pub use data_source::*;
pub use report::*;
pub use team::*;
pub use template::*;
pub use user::*;
