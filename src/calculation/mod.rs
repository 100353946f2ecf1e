//! Calculation logic for the allowance engine.
//!
//! This module contains the rate-card lookup, the eligibility filters,
//! one calculator per allowance (long-service travel, family visit,
//! special assistance, company trip, manager rotation, overtime), the
//! working-day counter, and budget sheet subtotals. Every function is a
//! pure transform over in-memory records.

mod budget;
mod calendar;
mod company_trip;
mod eligibility;
mod escalation;
mod family_visit;
mod manager_rotation;
mod money;
mod overtime;
mod rate_lookup;
mod special_assist;
mod travel;
mod work_days;

#[cfg(test)]
mod fixtures;

pub use budget::{BudgetSection, BudgetSummary, summarize_budget};
pub use calendar::{
    BUDDHIST_ERA_OFFSET, current_buddhist_year, to_buddhist_year, to_gregorian_year,
};
pub use company_trip::{COMPANY_TRIP_BUS_FARE, COMPANY_TRIP_ESCALATION, calculate_company_trip};
pub use eligibility::{
    TENURE_MILESTONES, is_family_visit_eligible, is_manager_rotation_eligible,
    is_special_assist_eligible, is_travel_eligible,
};
pub use escalation::{ESCALATION_BASE_YEAR, year_multiplier};
pub use family_visit::{FAMILY_VISIT_LEGS, FAMILY_VISITS_PER_YEAR, calculate_family_visit};
pub use manager_rotation::{
    ROTATION_BASE_HOTEL_NIGHTS, ROTATION_BASE_PER_DIEM_DAYS, ROTATION_ESCALATION,
    ROTATION_LOCAL_COST, ROTATION_OTHER_COST, ROTATION_TRAVEL_COST, calculate_manager_rotation,
};
pub use money::{saturating_add, saturating_mul, saturating_product, saturating_sum};
pub use overtime::{OVERTIME_MULTIPLIER, calculate_overtime, overtime_hourly_rate};
pub use rate_lookup::{RateLookupResult, lookup_rate};
pub use special_assist::{DEFAULT_ASSIST_MONTHS, SpecialAssistOptions, calculate_special_assist};
pub use travel::{TRAVEL_HOTEL_NIGHTS, TRAVEL_LEGS, TRAVEL_PER_DIEM_DAYS, calculate_travel};
pub use work_days::{WorkDaySummary, calculate_work_days};
