//! Company trip lodging and bus fare.
//!
//! Every employee joins the trip. Top-level employees get a room of their
//! own, everyone else shares (half the hotel rate), and employees who live
//! in the destination province are not lodged at all. The bus fare is a
//! fixed round-trip amount escalated by budget year.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{
    AllowanceKind, AllowanceReport, AuditStep, CompanyTripLine, Employee, RateTable,
};

use super::escalation::year_multiplier;
use super::money::saturating_add;
use super::rate_lookup::lookup_rate;

/// Round-trip bus fare per person before escalation.
pub const COMPANY_TRIP_BUS_FARE: i64 = 1200;

/// Bus fare multipliers as percentages: base year, next year, later years.
pub const COMPANY_TRIP_ESCALATION: [i64; 3] = [100, 105, 110];

/// Calculates the company trip cost for `destination` in `year`.
///
/// `manager_level` is the level that gets a room of its own. Province
/// comparison ignores surrounding whitespace.
///
/// # Example
///
/// ```
/// use allowance_engine::calculation::calculate_company_trip;
/// use allowance_engine::models::{Employee, RateCard, RateTable};
/// use rust_decimal::Decimal;
///
/// let mut card = RateCard::zeroed("C5");
/// card.hotel = Decimal::from(1500);
/// let rates = RateTable::from_cards(vec![card]);
///
/// let employee: Employee = serde_json::from_str(r#"{"name": "ก", "level": "C5"}"#).unwrap();
/// let report = calculate_company_trip(&[employee], &rates, "ระยอง", "M1", 2568);
/// assert_eq!(report.lines[0].accommodation, Decimal::from(750));
/// assert_eq!(report.total, Decimal::from(1950));
/// ```
pub fn calculate_company_trip(
    employees: &[Employee],
    rates: &RateTable,
    destination: &str,
    manager_level: &str,
    year: i32,
) -> AllowanceReport<CompanyTripLine> {
    let destination = destination.trim();
    let multiplier = year_multiplier(year, COMPANY_TRIP_ESCALATION);
    let bus_fare = (Decimal::from(COMPANY_TRIP_BUS_FARE) * multiplier)
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

    let lines: Vec<CompanyTripLine> = employees
        .iter()
        .map(|employee| {
            let card = lookup_rate(employee, rates).card;
            let local_resident = employee.visit_province.trim() == destination;
            let room_shared = employee.level != manager_level;

            let accommodation = if local_resident {
                Decimal::ZERO
            } else if room_shared {
                card.hotel / Decimal::TWO
            } else {
                card.hotel
            };

            CompanyTripLine {
                employee_id: employee.id.clone(),
                name: employee.name.clone(),
                level: employee.level.clone(),
                visit_province: employee.visit_province.trim().to_string(),
                room_shared,
                local_resident,
                accommodation,
                bus_fare,
                multiplier,
                total: saturating_add(accommodation, bus_fare),
            }
        })
        .collect();

    let residents = lines.iter().filter(|l| l.local_resident).count();
    let audit_step = AuditStep {
        rule_id: "company_trip".to_string(),
        rule_name: "Company Trip".to_string(),
        input: serde_json::json!({
            "year": year,
            "destination": destination,
            "manager_level": manager_level,
            "employees": employees.len(),
            "base_bus_fare": COMPANY_TRIP_BUS_FARE
        }),
        output: serde_json::json!({
            "multiplier": multiplier.to_string(),
            "bus_fare": bus_fare.to_string(),
            "local_residents": residents
        }),
        reasoning: format!(
            "Bus fare {} × {} = {}; {} residents of {} not lodged",
            COMPANY_TRIP_BUS_FARE, multiplier, bus_fare, residents, destination
        ),
    };

    AllowanceReport::new(AllowanceKind::CompanyTrip, year, lines, audit_step)
}
