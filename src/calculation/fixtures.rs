//! Shared test fixtures for the calculators.

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::models::{Employee, EmployeeStatus, RateCard, RateTable};

pub fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

pub fn rate_table() -> RateTable {
    RateTable::from_cards(vec![
        RateCard {
            level: "C5".to_string(),
            position: "นักวิชาการ".to_string(),
            rent: dec("3000"),
            monthly_assist: dec("1500"),
            lump_sum: dec("5000"),
            travel: dec("900"),
            local: dec("200"),
            per_diem: dec("240"),
            hotel: dec("1500"),
        },
        RateCard {
            level: "M1".to_string(),
            position: "ผู้อำนวยการ".to_string(),
            rent: dec("6000"),
            monthly_assist: dec("3000"),
            lump_sum: dec("10000"),
            travel: dec("1500"),
            local: dec("400"),
            per_diem: dec("270"),
            hotel: dec("2500"),
        },
    ])
}

pub fn employee(id: &str, level: &str) -> Employee {
    Employee {
        id: id.to_string(),
        name: format!("พนักงาน {id}"),
        gender: String::new(),
        start_year: 2560,
        level: level.to_string(),
        status: EmployeeStatus::Eligible,
        visit_province: String::new(),
        bus_fare: Decimal::ZERO,
        working_days: 0,
        custom_travel_rates: None,
    }
}
