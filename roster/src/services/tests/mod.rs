//! Service-specific tests
//!
//! Each service has its own test file with dedicated fixtures and helpers.


// Common test utilities for services
pub mod common {
    use chrono::NaiveDate;
    use shared::{Employee, Language, NewEmployee};

    /// Reference date used when constructing fixture records
    pub fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid test date")
    }

    fn base(employee_number: u32, name: &str, hire: (i32, u32, u32)) -> NewEmployee {
        NewEmployee {
            employee_number,
            name: name.to_string(),
            hire_date: NaiveDate::from_ymd_opt(hire.0, hire.1, hire.2).expect("valid hire date"),
            salary: 0.0,
            max_salary: 0.0,
        }
    }

    fn with_pay(details: NewEmployee, salary: f64, max_salary: f64) -> NewEmployee {
        NewEmployee { salary, max_salary, ..details }
    }

    /// A small mixed roster in deliberate non-sorted order
    pub fn sample_roster() -> Vec<Employee> {
        let alice = with_pay(base(2, "Alice", (2022, 2, 15)), 4800.0, 5900.0);
        let bob = with_pay(base(4, "Bob", (2023, 8, 11)), 5500.0, 6100.0);
        let john = with_pay(base(1, "John", (2021, 1, 1)), 5000.0, 5100.0);

        vec![
            Employee::analyst(alice, 400.0, "Experienced Analyst", today()).expect("valid analyst"),
            Employee::programmer(bob, 12.0, Language::Java, today()).expect("valid programmer"),
            Employee::analyst(john, 200.0, "Certified Analyst", today()).expect("valid analyst"),
        ]
    }
}
