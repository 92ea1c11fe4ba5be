//! Payroll desk
//!
//! The desk is the single entry point a front end talks to. It owns the
//! roster list, asks the injected [`Clock`] for the reference date and hands
//! records to the injected [`RecordStore`]. Every action a record browser
//! offers (stepping through entries, hiring, removing, sorting, paying out)
//! maps to one method here.

use std::time::{Duration, Instant};

use chrono::NaiveDate;
use shared::{component_info, component_warn, logging, ComponentId, Employee, EmployeeNumber};

use crate::core::{compensation, CursorList};
use crate::error::{RosterError, RosterResult};
use crate::traits::{Clock, RecordStore};

/// Lowest employee number accepted from manual entry
pub const MIN_MANUAL_NUMBER: EmployeeNumber = 1;
/// Highest employee number accepted from manual entry
pub const MAX_MANUAL_NUMBER: EmployeeNumber = 2000;

/// Which navigation and payout controls a front end should enable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Controls {
    pub back: bool,
    pub next: bool,
    pub first: bool,
    pub last: bool,
    pub calculate: bool,
}

/// Snapshot of the record under the cursor
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeView {
    /// 1-based position in list order
    pub position: usize,
    pub total: usize,
    pub employee: Employee,
    pub eligible: bool,
    /// Payout the record would receive today
    pub payout: f64,
    pub controls: Controls,
}

/// Outcome of sorting the roster
#[derive(Debug, Clone, PartialEq)]
pub struct SortReport {
    /// `false` when there was nothing to sort
    pub sorted: bool,
    pub count: usize,
    /// Time spent in the in-place list sort
    pub list_elapsed: Duration,
    /// Time spent sorting a `Vec` copy of the same records
    pub vec_elapsed: Duration,
}

/// Front-end facing controller over a roster
pub struct PayrollDesk<C, S>
where
    C: Clock,
    S: RecordStore,
{
    employees: CursorList<Employee>,
    clock: C,
    store: S,
}

impl<C, S> PayrollDesk<C, S>
where
    C: Clock,
    S: RecordStore,
{
    /// Create a desk with an empty roster
    pub fn new(clock: C, store: S) -> Self {
        Self {
            employees: CursorList::new(),
            clock,
            store,
        }
    }

    /// Reference date for validation and payouts
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn list(&self) -> &CursorList<Employee> {
        &self.employees
    }

    /// Records in list order; the cursor is not moved
    pub fn employees(&self) -> impl Iterator<Item = &Employee> + '_ {
        self.employees.iter().map(|(_, employee)| employee)
    }

    pub fn len(&self) -> usize {
        self.employees.total_count()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Add a manually entered record. The number must lie in the manual
    /// entry range and be unused. The new record becomes current.
    pub fn hire(&mut self, employee: Employee) -> RosterResult<()> {
        let number = employee.employee_number();
        if !(MIN_MANUAL_NUMBER..=MAX_MANUAL_NUMBER).contains(&number) {
            return Err(RosterError::EmployeeNumberOutOfRange {
                employee_number: number,
                min: MIN_MANUAL_NUMBER,
                max: MAX_MANUAL_NUMBER,
            });
        }
        self.enroll(employee)?;
        self.employees.move_to_last();

        component_info!(ComponentId::current(), "👤 Hired employee #{}", number);
        Ok(())
    }

    /// Append a record of any number, refusing duplicates. The cursor is
    /// left where it was.
    pub fn enroll(&mut self, employee: Employee) -> RosterResult<()> {
        let number = employee.employee_number();
        if self.employees.exists(number) {
            return Err(RosterError::DuplicateEmployee {
                employee_number: number,
            });
        }
        self.employees.add(employee, number);
        Ok(())
    }

    pub fn first(&mut self) -> Option<&Employee> {
        self.employees.move_to_first();
        self.employees.current()
    }

    pub fn last(&mut self) -> Option<&Employee> {
        self.employees.move_to_last();
        self.employees.current()
    }

    pub fn next(&mut self) -> Option<&Employee> {
        self.employees.next()
    }

    pub fn previous(&mut self) -> Option<&Employee> {
        self.employees.previous()
    }

    pub fn current(&self) -> Option<&Employee> {
        self.employees.current()
    }

    /// Move the cursor to the record with `number`
    pub fn select(&mut self, number: EmployeeNumber) -> RosterResult<&Employee> {
        if !self.employees.seek(number) {
            return Err(RosterError::NotFound {
                employee_number: number,
            });
        }
        self.employees.current().ok_or(RosterError::NoSelection)
    }

    /// Display snapshot of the current record, `None` without a cursor
    pub fn view(&self) -> Option<EmployeeView> {
        let employee = self.employees.current()?;
        let position = self.employees.current_position()?;
        let today = self.clock.today();
        let eligible = compensation::is_eligible(employee, today);

        let has_previous = self.employees.has_previous();
        let has_next = self.employees.has_next();

        Some(EmployeeView {
            position: position + 1,
            total: self.employees.total_count(),
            employee: employee.clone(),
            eligible,
            payout: compensation::payout_amount(employee, today),
            controls: Controls {
                back: has_previous,
                next: has_next,
                first: has_previous,
                last: has_next,
                calculate: eligible,
            },
        })
    }

    /// Pay out the current record once. Returns the amount credited.
    pub fn apply_current(&mut self) -> RosterResult<f64> {
        let today = self.clock.today();
        let employee = self.employees.current_mut().ok_or(RosterError::NoSelection)?;
        let number = employee.employee_number();

        if !compensation::is_eligible(employee, today) {
            component_warn!(ComponentId::current(), "Payout refused for #{}: not eligible", number);
            return Err(RosterError::NotEligible {
                employee_number: number,
            });
        }

        match compensation::apply(employee, today) {
            Ok(amount) => {
                component_info!(
                    ComponentId::current(),
                    "💰 Credited {:.2} to #{}, salary now {:.2}",
                    amount,
                    number,
                    employee.salary()
                );
                Ok(amount)
            }
            Err(e) => {
                component_warn!(ComponentId::current(), "Payout refused for #{}: {}", number, e);
                Err(e.into())
            }
        }
    }

    /// Remove the current record; the cursor moves to its successor
    pub fn remove_current(&mut self) -> RosterResult<Employee> {
        let (number, employee) = self.employees.remove().ok_or(RosterError::NoSelection)?;
        component_info!(ComponentId::current(), "🗑️  Removed employee #{}", number);
        Ok(employee)
    }

    /// Sort the roster by employee number in place, timing it against a
    /// `Vec` sort of the same records.
    ///
    /// The cursor keeps its position, so it may now show another record.
    pub fn sort(&mut self) -> SortReport {
        let position = self.employees.current_position();
        let mut copy = self.walk_records();
        self.restore_position(position);

        let started = Instant::now();
        let sorted = self.employees.sort();
        let list_elapsed = started.elapsed();

        let started = Instant::now();
        copy.sort_by_key(Employee::employee_number);
        let vec_elapsed = started.elapsed();

        let report = SortReport {
            sorted,
            count: copy.len(),
            list_elapsed,
            vec_elapsed,
        };
        if sorted {
            component_info!(
                ComponentId::current(),
                "🔃 Sorted {} records (list {:?}, vec {:?})",
                report.count,
                report.list_elapsed,
                report.vec_elapsed
            );
        } else {
            component_warn!(ComponentId::current(), "Nothing to sort");
        }
        report
    }

    /// Write the roster in list order. The cursor returns to the record it
    /// was on. Returns the number of records written.
    pub async fn save(&mut self) -> RosterResult<usize> {
        let remembered = self.employees.current().cloned();
        let records = self.walk_records();
        if let Some(employee) = remembered {
            self.employees.set_current(&employee);
        }

        self.store.save(&records).await?;
        logging::log_success(
            ComponentId::current(),
            &format!("Saved {} records to {}", records.len(), self.store.location()),
        );
        Ok(records.len())
    }

    /// Replace the roster with the stored records, in stored order. The
    /// cursor lands on the first record.
    pub async fn load(&mut self) -> RosterResult<usize> {
        let records = self.store.load().await?;

        let mut employees = CursorList::new();
        for employee in records {
            let number = employee.employee_number();
            employees.add(employee, number);
        }
        employees.move_to_first();
        self.employees = employees;

        component_info!(
            ComponentId::current(),
            "📂 Loaded {} records from {}",
            self.employees.total_count(),
            self.store.location()
        );
        Ok(self.employees.total_count())
    }

    /// Copy every record out through the cursor, first to last. Leaves the
    /// cursor past the tail.
    fn walk_records(&mut self) -> Vec<Employee> {
        let mut records = Vec::with_capacity(self.employees.total_count());
        self.employees.move_to_first();
        while let Some(employee) = self.employees.current() {
            records.push(employee.clone());
            self.employees.next();
        }
        records
    }

    /// Put the cursor back on the node at `position`. A full walk already
    /// leaves the cursor empty, which covers `None`.
    fn restore_position(&mut self, position: Option<usize>) {
        if let Some(position) = position {
            self.employees.move_to_first();
            for _ in 0..position {
                self.employees.next();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::FixedClock;
    use crate::traits::MockRecordStore;
    use shared::{Language, NewEmployee};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 11, 8).unwrap()
    }

    fn desk() -> PayrollDesk<FixedClock, MockRecordStore> {
        PayrollDesk::new(FixedClock(today()), MockRecordStore::new())
    }

    fn programmer(
        number: u32,
        hire: NaiveDate,
        salary: f64,
        max_salary: f64,
        percent: f64,
    ) -> Employee {
        let details = NewEmployee {
            employee_number: number,
            name: format!("Dev {number}"),
            hire_date: hire,
            salary,
            max_salary,
        };
        Employee::programmer(details, percent, Language::Python, today()).unwrap()
    }

    fn simple(number: u32) -> Employee {
        programmer(number, NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(), 1000.0, 5000.0, 1.0)
    }

    #[test]
    fn test_hire_rejects_out_of_range_and_duplicates() {
        let mut desk = desk();
        assert!(matches!(
            desk.hire(simple(0)),
            Err(RosterError::EmployeeNumberOutOfRange { employee_number: 0, .. })
        ));
        assert!(matches!(
            desk.hire(simple(2001)),
            Err(RosterError::EmployeeNumberOutOfRange { .. })
        ));

        desk.hire(simple(2000)).unwrap();
        assert!(matches!(
            desk.hire(simple(2000)),
            Err(RosterError::DuplicateEmployee { employee_number: 2000 })
        ));
        assert_eq!(desk.len(), 1);
    }

    #[test]
    fn test_enroll_accepts_large_numbers_without_moving_cursor() {
        let mut desk = desk();
        desk.hire(simple(1)).unwrap();
        desk.enroll(simple(500_000)).unwrap();

        assert_eq!(desk.current().map(Employee::employee_number), Some(1));
        assert_eq!(desk.len(), 2);
    }

    #[test]
    fn test_view_controls_follow_cursor() {
        let mut desk = desk();
        assert!(desk.view().is_none());

        for number in [1, 2, 3] {
            desk.enroll(simple(number)).unwrap();
        }

        desk.first();
        let view = desk.view().unwrap();
        assert_eq!(view.position, 1);
        assert_eq!(view.total, 3);
        assert!(!view.controls.back && !view.controls.first);
        assert!(view.controls.next && view.controls.last);
        assert!(view.controls.calculate);

        desk.last();
        let view = desk.view().unwrap();
        assert_eq!(view.position, 3);
        assert!(view.controls.back && !view.controls.next);
    }

    #[test]
    fn test_apply_without_selection() {
        let mut desk = desk();
        assert!(matches!(desk.apply_current(), Err(RosterError::NoSelection)));
    }

    #[test]
    fn test_apply_is_one_shot() {
        let mut desk = desk();
        let hire = NaiveDate::from_ymd_opt(2023, 8, 11).unwrap();
        desk.hire(programmer(7, hire, 1000.0, 2000.0, 10.0)).unwrap();

        // Two full months once the day of month is taken into account
        let amount = desk.apply_current().unwrap();
        assert!((amount - 200.0).abs() < 1e-9);
        assert_eq!(desk.current().unwrap().salary(), 1200.0);
        assert!(!desk.view().unwrap().controls.calculate);

        assert!(matches!(
            desk.apply_current(),
            Err(RosterError::NotEligible { employee_number: 7 })
        ));
        assert_eq!(desk.current().unwrap().salary(), 1200.0);
    }

    #[test]
    fn test_sort_keeps_cursor_position() {
        let mut desk = desk();
        for number in [5, 1, 4, 2] {
            desk.enroll(simple(number)).unwrap();
        }
        desk.select(5).unwrap();

        let report = desk.sort();
        assert!(report.sorted);
        assert_eq!(report.count, 4);

        let numbers: Vec<u32> = desk.employees().map(Employee::employee_number).collect();
        assert_eq!(numbers, vec![1, 2, 4, 5]);
        // Same slot, different record
        assert_eq!(desk.current().map(Employee::employee_number), Some(1));
    }

    #[test]
    fn test_sort_empty_roster() {
        let mut desk = desk();
        let report = desk.sort();
        assert!(!report.sorted);
        assert_eq!(report.count, 0);
        assert!(desk.current().is_none());
    }

    #[test]
    fn test_select_unknown_number() {
        let mut desk = desk();
        desk.enroll(simple(3)).unwrap();
        assert!(matches!(
            desk.select(9),
            Err(RosterError::NotFound { employee_number: 9 })
        ));
    }

    #[tokio::test]
    async fn test_save_restores_cursor() {
        let mut store = MockRecordStore::new();
        store
            .expect_save()
            .withf(|records: &[Employee]| records.len() == 3)
            .times(1)
            .returning(|_| Ok(()));
        store.expect_location().returning(|| "memory".to_string());

        let mut desk = PayrollDesk::new(FixedClock(today()), store);
        for number in [1, 2, 3] {
            desk.enroll(simple(number)).unwrap();
        }
        desk.select(2).unwrap();

        assert_eq!(desk.save().await.unwrap(), 3);
        assert_eq!(desk.current().map(Employee::employee_number), Some(2));
    }
}
