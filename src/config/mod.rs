//! Configuration module for Image Harvester
//!
//! Every setting has a built-in default (see [`defaults`]), so a run needs no
//! configuration file at all. An optional TOML file can override any subset
//! of the defaults.
//!
//! # Example
//!
//! ```no_run
//! use image_harvester::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("harvester.toml")).unwrap();
//! println!("Scraping: {}", config.fetch_url);
//! ```

pub mod defaults;
mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, HttpConfig, OutputConfig};

// Re-export parser functions
pub use parser::{load_config, parse_config};
pub use validation::validate;
