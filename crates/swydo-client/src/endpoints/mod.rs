//! Endpoint groups, one per Swydo resource family
//!
//! Each group holds a shared [`Transport`](crate::transport::Transport)
//! and exposes one async method per API operation. Every identifier
//! argument is validated to be non-empty before a request is issued.

pub mod clients;
pub mod connections;
pub mod data_sources;
pub mod reports;
pub mod teams;
pub mod templates;
