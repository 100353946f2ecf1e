//! Family-visit fare allowance.

use rust_decimal::Decimal;

use crate::models::{AllowanceKind, AllowanceReport, AuditStep, Employee, FamilyVisitLine};

use super::eligibility::is_family_visit_eligible;
use super::money::saturating_mul;

/// Fares per visit (there and back).
pub const FAMILY_VISIT_LEGS: u32 = 2;

/// Visits paid per year.
pub const FAMILY_VISITS_PER_YEAR: u32 = 4;

/// Calculates the family-visit allowance.
///
/// Eligible employees whose visit province differs from `home_province`
/// receive `bus_fare × 2 × 4`.
///
/// # Example
///
/// ```
/// use allowance_engine::calculation::calculate_family_visit;
/// use allowance_engine::models::Employee;
/// use rust_decimal::Decimal;
///
/// let employee: Employee = serde_json::from_str(
///     r#"{"name": "ก", "status": "มีสิทธิ์", "visit_province": "ลำปาง", "bus_fare": 300}"#,
/// ).unwrap();
/// let report = calculate_family_visit(&[employee], "กรุงเทพมหานคร", 2568);
/// assert_eq!(report.total, Decimal::from(2400));
/// ```
pub fn calculate_family_visit(
    employees: &[Employee],
    home_province: &str,
    year: i32,
) -> AllowanceReport<FamilyVisitLine> {
    let legs = Decimal::from(FAMILY_VISIT_LEGS);
    let trips = Decimal::from(FAMILY_VISITS_PER_YEAR);

    let lines: Vec<FamilyVisitLine> = employees
        .iter()
        .filter(|e| is_family_visit_eligible(e, home_province))
        .map(|employee| {
            let round_trip_fare = saturating_mul(employee.bus_fare, legs);
            FamilyVisitLine {
                employee_id: employee.id.clone(),
                name: employee.name.clone(),
                visit_province: employee.visit_province.trim().to_string(),
                bus_fare: employee.bus_fare,
                round_trip_fare,
                trips_per_year: FAMILY_VISITS_PER_YEAR,
                total: saturating_mul(round_trip_fare, trips),
            }
        })
        .collect();

    let audit_step = AuditStep {
        rule_id: "family_visit".to_string(),
        rule_name: "Family Visit Fare".to_string(),
        input: serde_json::json!({
            "employees": employees.len(),
            "home_province": home_province,
            "legs": FAMILY_VISIT_LEGS,
            "trips_per_year": FAMILY_VISITS_PER_YEAR
        }),
        output: serde_json::json!({
            "eligible": lines.len()
        }),
        reasoning: format!(
            "bus fare × {} × {} for {} eligible employees outside {}",
            FAMILY_VISIT_LEGS,
            FAMILY_VISITS_PER_YEAR,
            lines.len(),
            home_province
        ),
    };

    AllowanceReport::new(AllowanceKind::FamilyVisit, year, lines, audit_step)
}
