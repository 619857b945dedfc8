//! Integration tests for Bouquet
//!
//! These tests run the real HTTP server on an ephemeral port and talk to it
//! through reqwest and the gallery's HTTP listing source.

mod harness;

#[path = "integration/listing_endpoint.rs"]
mod listing_endpoint;
#[path = "integration/http_source.rs"]
mod http_source;
