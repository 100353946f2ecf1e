//! Configuration types.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML files in a configuration directory.

use serde::Deserialize;

use crate::models::{Holiday, RateTable};

/// Organisation-wide settings used by the eligibility filters.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OrganizationConfig {
    /// Display name of the organisation.
    pub name: String,
    /// Province of the home office.
    pub home_province: String,
    /// Level code of the top managerial level.
    pub manager_level: String,
}

/// One holiday file (`holidays/<year>.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct HolidayFile {
    /// The Buddhist year every holiday in the file belongs to.
    pub year: i32,
    /// The holidays.
    #[serde(default)]
    pub holidays: Vec<Holiday>,
}

/// The complete engine configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    organization: OrganizationConfig,
    rates: RateTable,
    /// Sorted by date.
    holidays: Vec<Holiday>,
}

impl EngineConfig {
    /// Creates a new EngineConfig from its component parts.
    pub fn new(organization: OrganizationConfig, rates: RateTable, holidays: Vec<Holiday>) -> Self {
        let mut sorted_holidays = holidays;
        sorted_holidays.sort_by(|a, b| a.date.cmp(&b.date));
        Self {
            organization,
            rates,
            holidays: sorted_holidays,
        }
    }

    /// Returns the organisation settings.
    pub fn organization(&self) -> &OrganizationConfig {
        &self.organization
    }

    /// Returns the master rate table.
    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    /// Returns every configured holiday, oldest first.
    pub fn holidays(&self) -> &[Holiday] {
        &self.holidays
    }
}
