//! Gigbook: venue, artist, and show listings.
//!
//! The binary in `main.rs` wires configuration, logging, and the database;
//! everything else lives here so integration tests can drive the router.

pub mod config;
pub mod db;
pub mod error;
pub mod forms;
pub mod handlers;
pub mod services;
pub mod state;
pub mod templates;
pub mod test_utils;

pub use handlers::create_router;
