//! Bouquet Web - Photo album API server

#![warn(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![warn(clippy::too_many_lines)]
//!
//! JSON listing endpoint for the gallery client plus static serving of the
//! photo files the listing points at.

pub mod handlers;
pub mod server;

// Re-export main types
pub use server::{AppState, build_router, run_server, serve};
