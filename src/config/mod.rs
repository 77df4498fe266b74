//! Configuration module for the link validator
//!
//! This module handles loading, parsing, and validating TOML configuration
//! files. Command-line and environment values are layered on top through
//! [`ConfigOverrides`].
//!
//! # Example
//!
//! ```no_run
//! use link_validator::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("link-validator.toml")).unwrap();
//! println!("Checking with {} concurrent requests", config.max_concurrent);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, ConfigOverrides, DiscoverySource, DEFAULT_MAX_CONCURRENT, DEFAULT_MAX_DEPTH,
    DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, read_config};
pub use validation::{validate, MAX_CONCURRENT_LIMIT};
