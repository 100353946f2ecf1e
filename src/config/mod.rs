//! Configuration loading and management for the allowance engine.
//!
//! This module loads the organisation settings, the master rate table,
//! and the public holiday calendar from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use allowance_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config").unwrap();
//! println!("Home province: {}", config.organization().home_province);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{EngineConfig, HolidayFile, OrganizationConfig};
