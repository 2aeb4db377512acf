//! Free Fire player-info proxy.
//!
//! Forwards player lookups to the upstream info service and serves the result
//! either as an HTML page, with readable account timestamps and a days-played
//! count, or as the raw upstream JSON.
//!
//! # Modules
//!
//! - `config`: Configuration management.
//! - `enrichment`: Derived fields added to player documents.
//! - `errors`: Error handling types.
//! - `handlers`: HTTP request handlers and shared state.
//! - `models`: Lookup input types.
//! - `routes`: Router construction.
//! - `timestamp`: Epoch timestamp formatting.
//! - `upstream_client`: Upstream info service client.
//! - `views`: HTML templates and the result-page view model.

pub mod config;
pub mod enrichment;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod timestamp;
pub mod upstream_client;
pub mod views;
