//! Pigeon Core Library
//!
//! This library provides core functionality for the Pigeon relay including:
//! - Configuration management
//! - Outbound clients (notification webhook, Minecraft status source)
//! - Webtext command execution and request parsing

pub mod client;
pub mod command;
pub mod config;
pub mod webtext;

// Re-export commonly used types
pub use client::{
    ClientError, DynmapStatusSource, IftttNotifier, Notifier, StatusSnapshot, StatusSource,
};
pub use command::{CommandError, CommandRunner, RunOutput, SystemCommandRunner};
pub use config::model::Config;
pub use webtext::{WebtextParseError, WebtextRequest};
