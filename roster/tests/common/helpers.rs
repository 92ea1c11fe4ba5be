//! Test helpers and builder patterns for roster tests
//!
//! This module provides convenient helper functions and builder patterns
//! to reduce test boilerplate and improve maintainability.

use chrono::NaiveDate;
use roster::*;
use shared::Employee;

use super::fixtures::TestFixtures;

/// Type alias for a desk wired with mocks
pub type TestDesk = PayrollDesk<MockClock, MockRecordStore>;

/// Builder pattern for creating test desks with sensible defaults
pub struct DeskBuilder {
    today: NaiveDate,
    store: MockRecordStore,
    employees: Vec<Employee>,
}

impl DeskBuilder {
    /// Create a new builder with sensible defaults and basic mock setup
    pub fn new() -> Self {
        let mut store = MockRecordStore::new();

        // Set up default behaviors to prevent panics
        store
            .expect_location()
            .returning(|| "mock-store".to_string())
            .times(0..);

        Self {
            today: TestFixtures::today(),
            store,
            employees: Vec::new(),
        }
    }

    /// Pin the clock to a date
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Enroll records once the desk is built
    pub fn with_employees(mut self, employees: Vec<Employee>) -> Self {
        self.employees = employees;
        self
    }

    /// Configure the store mock with a setup function
    pub fn with_store<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut MockRecordStore),
    {
        setup(&mut self.store);
        self
    }

    /// Build the desk with all configured mocks
    pub fn build(self) -> TestDesk {
        let today = self.today;
        let mut clock = MockClock::new();
        clock.expect_today().returning(move || today).times(0..);

        let mut desk = PayrollDesk::new(clock, self.store);
        for employee in self.employees {
            desk.enroll(employee).unwrap();
        }
        desk
    }
}

impl Default for DeskBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper functions for common test operations
pub struct TestHelpers;

impl TestHelpers {
    /// Desk holding the sample roster with no cursor
    pub fn sample_desk() -> TestDesk {
        DeskBuilder::new()
            .with_employees(TestFixtures::sample_roster())
            .build()
    }

    /// Desk holding records with the given numbers, in order
    pub fn numbered_desk(numbers: &[u32]) -> TestDesk {
        DeskBuilder::new()
            .with_employees(numbers.iter().copied().map(TestFixtures::numbered).collect())
            .build()
    }

    /// Employee numbers in list order
    pub fn numbers(desk: &TestDesk) -> Vec<u32> {
        desk.employees().map(Employee::employee_number).collect()
    }

    /// Employee number under the cursor
    pub fn current_number(desk: &TestDesk) -> Option<u32> {
        desk.current().map(Employee::employee_number)
    }

    /// Walk the list forward through the cursor from the first record
    pub fn walk_forward<T: Clone>(list: &mut CursorList<T>) -> Vec<T> {
        let mut seen = Vec::new();
        list.move_to_first();
        while let Some(item) = list.current() {
            seen.push(item.clone());
            list.next();
        }
        seen
    }
}
