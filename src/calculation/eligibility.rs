//! Eligibility filters.
//!
//! Pure predicates deciding which employees qualify for each allowance.

use crate::models::Employee;

/// Years of service that earn a long-service travel reimbursement.
pub const TENURE_MILESTONES: [i32; 5] = [20, 25, 30, 35, 40];

/// True when the employee reaches a tenure milestone in `year`.
///
/// # Example
///
/// ```
/// use allowance_engine::calculation::is_travel_eligible;
/// use allowance_engine::models::Employee;
///
/// let employee: Employee = serde_json::from_str(r#"{"name": "ก", "start_year": 2548}"#).unwrap();
/// assert!(is_travel_eligible(&employee, 2568));
/// assert!(!is_travel_eligible(&employee, 2569));
/// ```
pub fn is_travel_eligible(employee: &Employee, year: i32) -> bool {
    TENURE_MILESTONES.contains(&employee.tenure(year))
}

/// True when the employee is eligible, has a visit province, and that
/// province is not the home office's.
pub fn is_family_visit_eligible(employee: &Employee, home_province: &str) -> bool {
    let province = employee.visit_province.trim();
    employee.is_eligible() && !province.is_empty() && province != home_province.trim()
}

/// True when the employee's status is eligible.
pub fn is_special_assist_eligible(employee: &Employee) -> bool {
    employee.is_eligible()
}

/// True when the employee holds the top managerial level.
pub fn is_manager_rotation_eligible(employee: &Employee, manager_level: &str) -> bool {
    employee.level == manager_level
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EmployeeStatus;

    fn employee(start_year: i32, status: EmployeeStatus, province: &str, level: &str) -> Employee {
        let mut employee: Employee = serde_json::from_str(r#"{"name": "ทดสอบ"}"#).unwrap();
        employee.start_year = start_year;
        employee.status = status;
        employee.visit_province = province.to_string();
        employee.level = level.to_string();
        employee
    }

    #[test]
    fn test_travel_eligible_only_on_milestones() {
        for tenure in 0..50 {
            let e = employee(2568 - tenure, EmployeeStatus::Eligible, "", "C5");
            let expected = matches!(tenure, 20 | 25 | 30 | 35 | 40);
            assert_eq!(is_travel_eligible(&e, 2568), expected, "tenure {tenure}");
        }
    }

    #[test]
    fn test_travel_ignores_status() {
        let e = employee(2548, EmployeeStatus::Ineligible, "", "C5");
        assert!(is_travel_eligible(&e, 2568));
    }

    #[test]
    fn test_family_visit_requires_eligible_status() {
        let e = employee(2560, EmployeeStatus::Ineligible, "เชียงใหม่", "C5");
        assert!(!is_family_visit_eligible(&e, "กรุงเทพมหานคร"));
    }

    #[test]
    fn test_family_visit_requires_province() {
        let e = employee(2560, EmployeeStatus::Eligible, "", "C5");
        assert!(!is_family_visit_eligible(&e, "กรุงเทพมหานคร"));
        let e = employee(2560, EmployeeStatus::Eligible, "   ", "C5");
        assert!(!is_family_visit_eligible(&e, "กรุงเทพมหานคร"));
    }

    #[test]
    fn test_family_visit_excludes_home_province() {
        let e = employee(2560, EmployeeStatus::Eligible, " กรุงเทพมหานคร ", "C5");
        assert!(!is_family_visit_eligible(&e, "กรุงเทพมหานคร"));
        let e = employee(2560, EmployeeStatus::Eligible, "เชียงใหม่", "C5");
        assert!(is_family_visit_eligible(&e, "กรุงเทพมหานคร"));
    }

    #[test]
    fn test_special_assist_is_status_only() {
        assert!(is_special_assist_eligible(&employee(
            2560,
            EmployeeStatus::Eligible,
            "",
            "C1"
        )));
        assert!(!is_special_assist_eligible(&employee(
            2560,
            EmployeeStatus::Ineligible,
            "เชียงใหม่",
            "C1"
        )));
    }

    #[test]
    fn test_manager_rotation_matches_level_exactly() {
        let e = employee(2560, EmployeeStatus::Ineligible, "", "M1");
        assert!(is_manager_rotation_eligible(&e, "M1"));
        assert!(!is_manager_rotation_eligible(&e, "m1"));
        assert!(!is_manager_rotation_eligible(&e, "M2"));
    }
}
