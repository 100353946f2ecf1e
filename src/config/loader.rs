//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{Holiday, RateTable};

use super::types::{EngineConfig, HolidayFile, OrganizationConfig};

/// Loads and provides access to the engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/
/// ├── organization.yaml   # Home province, manager level
/// ├── rates.yaml          # Master rate table
/// └── holidays/
///     └── 2568.yaml       # Public holidays for one Buddhist year
/// ```
///
/// # Example
///
/// ```no_run
/// use allowance_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config").unwrap();
/// let card = loader.rates().get("C5").unwrap();
/// println!("Hotel rate: {}", card.hotel);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if `organization.yaml` or `rates.yaml` is missing,
    /// if any file contains invalid YAML, or if a holiday file lists a date
    /// outside its year. The `holidays` directory is optional.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let organization = Self::load_yaml::<OrganizationConfig>(&path.join("organization.yaml"))?;

        let mut rates = Self::load_yaml::<RateTable>(&path.join("rates.yaml"))?;
        rates.normalize_levels();

        let holidays = Self::load_holidays(&path.join("holidays"))?;

        debug!(
            levels = rates.levels.len(),
            holidays = holidays.len(),
            "Loaded configuration"
        );

        Ok(Self {
            config: EngineConfig::new(organization, rates, holidays),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads every holiday file in the holidays directory.
    fn load_holidays(holidays_dir: &Path) -> EngineResult<Vec<Holiday>> {
        if !holidays_dir.exists() {
            return Ok(Vec::new());
        }

        let dir_str = holidays_dir.display().to_string();
        let entries = fs::read_dir(holidays_dir).map_err(|_| EngineError::ConfigNotFound {
            path: dir_str.clone(),
        })?;

        let mut holidays = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: dir_str.clone(),
            })?;

            let path = entry.path();
            if !path.extension().is_some_and(|ext| ext == "yaml") {
                continue;
            }

            let file = Self::load_yaml::<HolidayFile>(&path)?;
            for (index, mut holiday) in file.holidays.into_iter().enumerate() {
                if holiday.buddhist_year() != file.year {
                    return Err(EngineError::ConfigParseError {
                        path: path.display().to_string(),
                        message: format!(
                            "holiday '{}' on {} is outside year {}",
                            holiday.name, holiday.date, file.year
                        ),
                    });
                }
                if holiday.id.is_empty() {
                    holiday.id = format!("{}-{:02}", file.year, index + 1);
                }
                holidays.push(holiday);
            }
        }

        Ok(holidays)
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the organisation settings.
    pub fn organization(&self) -> &OrganizationConfig {
        self.config.organization()
    }

    /// Returns the master rate table.
    pub fn rates(&self) -> &RateTable {
        self.config.rates()
    }
}
