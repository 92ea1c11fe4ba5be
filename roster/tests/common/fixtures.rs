//! Test fixtures and data for roster tests
//!
//! This module provides consistent test data used across all test suites.

use chrono::NaiveDate;
use shared::{Employee, Language, NewEmployee};

/// Standard test data and fixtures
pub struct TestFixtures;

impl TestFixtures {
    /// Reference date used by the default clock
    pub const TODAY: (i32, u32, u32) = (2023, 11, 8);

    /// Employee numbers of the sample roster, in insertion order
    pub const SAMPLE_NUMBERS: [u32; 4] = [1, 2, 4, 3];

    pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    pub fn today() -> NaiveDate {
        let (year, month, day) = Self::TODAY;
        Self::date(year, month, day)
    }

    pub fn details(
        employee_number: u32,
        name: &str,
        hire_date: NaiveDate,
        salary: f64,
        max_salary: f64,
    ) -> NewEmployee {
        NewEmployee {
            employee_number,
            name: name.to_string(),
            hire_date,
            salary,
            max_salary,
        }
    }

    /// Analyst hired on 01-01-2021, 5000 of 5100, 200 per year
    pub fn john() -> Employee {
        Employee::analyst(
            Self::details(1, "John", Self::date(2021, 1, 1), 5000.0, 5100.0),
            200.0,
            "Certified Analyst",
            Self::today(),
        )
        .unwrap()
    }

    /// Analyst hired on 15-02-2022, 4800 of 5900, 400 per year
    pub fn alice() -> Employee {
        Employee::analyst(
            Self::details(2, "Alice", Self::date(2022, 2, 15), 4800.0, 5900.0),
            400.0,
            "Experienced Analyst",
            Self::today(),
        )
        .unwrap()
    }

    /// Programmer hired on 11-08-2023, 5500 of 6100, 12% per month
    pub fn bob() -> Employee {
        Employee::programmer(
            Self::details(4, "Bob", Self::date(2023, 8, 11), 5500.0, 6100.0),
            12.0,
            Language::Java,
            Self::today(),
        )
        .unwrap()
    }

    /// Programmer hired on 14-08-2023, 5000 of 100000, 100% per month
    pub fn sasque() -> Employee {
        Employee::programmer(
            Self::details(3, "Sasque", Self::date(2023, 8, 14), 5000.0, 100_000.0),
            100.0,
            Language::Python,
            Self::today(),
        )
        .unwrap()
    }

    /// Programmer whose single month of payout overshoots the ceiling
    pub fn over_ceiling_programmer() -> Employee {
        Employee::programmer(
            Self::details(7, "Ada", Self::date(2023, 10, 8), 5000.0, 5100.0),
            200.0,
            Language::C,
            Self::today(),
        )
        .unwrap()
    }

    /// Roster in the same order the sample data is loaded
    pub fn sample_roster() -> Vec<Employee> {
        vec![Self::john(), Self::alice(), Self::bob(), Self::sasque()]
    }

    /// Minimal programmer for list-shape tests
    pub fn numbered(employee_number: u32) -> Employee {
        Employee::programmer(
            Self::details(employee_number, "Temp", Self::date(2020, 1, 1), 1000.0, 2000.0),
            1.0,
            Language::CSharp,
            Self::today(),
        )
        .unwrap()
    }
}
