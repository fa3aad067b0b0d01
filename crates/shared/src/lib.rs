//! Shared configuration types for Docdrop.
//!
//! This crate provides the configuration surface used across all other
//! crates:
//! - Server binding settings
//! - Object storage settings
//! - The loader that layers config files with environment variables

pub mod config;

pub use config::{AppConfig, ServerConfig, StorageSettings};
