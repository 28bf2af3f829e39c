//! Core module - application configuration

pub mod config;

pub use config::{ClientConfig, DEFAULT_SERVER_URL};
