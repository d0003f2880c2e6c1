//! Battery Beacon - local battery telemetry over HTTP
//!
//! Serves the output of the platform power utility as JSON on `/battery`
//! and falls back to plain files under a serving root for everything else.

pub mod config;
pub mod error;
pub mod http;
pub mod routes;
pub mod server;
pub mod telemetry;
