//! Core data models for the allowance engine.
//!
//! This module contains the plain records maintained by the HR and
//! budget forms, and the result types produced by the calculators.

mod budget_item;
mod calculation_result;
mod employee;
mod holiday;
pub mod lenient;
mod line_item;
mod rate_card;

pub use budget_item::{BudgetItem, BudgetItemType};
pub use calculation_result::{
    AllowanceKind, AllowanceLine, AllowanceReport, AuditStep, CompanyTripLine, FamilyVisitLine,
    ManagerRotationLine, OvertimeLine, RateSource, SpecialAssistLine, TravelLine,
};
pub use employee::{CustomTravelRates, Employee, EmployeeStatus};
pub use holiday::Holiday;
pub use lenient::parse_amount;
pub use line_item::{OvertimeItem, SpecialAssistItem};
pub use rate_card::{RateCard, RateTable};
