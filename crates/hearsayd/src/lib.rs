//! Hearsay Daemon - serving layer around the QA engine.
//!
//! Fetches member messages from the upstream collection on every request,
//! runs `hearsay_common`'s engine, and serves the answer over HTTP.

pub mod config;
pub mod data_client;
pub mod routes;
pub mod server;
