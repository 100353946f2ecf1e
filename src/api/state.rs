//! Application state for the allowance engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::error::EngineResult;
use crate::store::Store;

/// Shared application state.
///
/// Holds the loaded configuration and the record store seeded from it.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
    store: Arc<Store>,
}

impl AppState {
    /// Creates the state, seeding a fresh store from the configuration.
    pub fn new(config: ConfigLoader) -> EngineResult<Self> {
        let store = Store::seeded(&config)?;
        Ok(Self {
            config: Arc::new(config),
            store: Arc::new(store),
        })
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns a reference to the record store.
    pub fn store(&self) -> &Store {
        &self.store
    }
}
