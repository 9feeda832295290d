//! Pigeon API Server Library
//!
//! This library provides the HTTP relay server: a handful of endpoints that
//! query an external status source or run a local command, then forward a
//! derived message to a notification webhook.

pub mod app;
pub mod router;

// Re-export the main server function
pub use app::start_server;
