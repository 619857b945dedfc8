//! End-to-end tests for Bouquet
//!
//! These tests verify complete user workflows from start to finish: a real
//! server, the HTTP listing source and the gallery session on top.

#[path = "../harness.rs"]
mod harness;

mod album_browsing;
