//! Placeholder record generation
//!
//! Numbers are drawn at random and redrawn until unused, so a run never
//! enrolls a duplicate. Numbers up to [`PROGRAMMER_LIMIT`] become
//! programmers and everything above becomes analysts.

use std::ops::RangeInclusive;

use chrono::NaiveDate;
use rand::Rng;
use roster::{Clock, PayrollDesk, RecordStore};
use shared::{
    component_debug, ComponentId, Employee, EmployeeNumber, Language, NewEmployee, RecordResult,
};

use crate::error::{LoadGenError, LoadGenResult};

/// Range the bulk of generated numbers is drawn from
pub const BULK_RANGE: RangeInclusive<EmployeeNumber> = 1001..=1_000_000;
/// Range the handful of low numbers is drawn from
pub const SMALL_RANGE: RangeInclusive<EmployeeNumber> = 1..=2000;
/// Highest number that produces a programmer
pub const PROGRAMMER_LIMIT: EmployeeNumber = 2000;

/// Hire date every placeholder carries
pub const DUMMY_HIRE_DATE: (i32, u32, u32) = (1910, 10, 10);

/// How many records to draw from each range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateOptions {
    pub bulk_count: usize,
    pub small_count: usize,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            bulk_count: 10_000,
            small_count: 20,
        }
    }
}

/// Zero-salary placeholder for `number`
pub fn dummy_employee(number: EmployeeNumber, today: NaiveDate) -> RecordResult<Employee> {
    let (year, month, day) = DUMMY_HIRE_DATE;
    let hire_date = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| shared::RecordError::invalid_date("placeholder hire date"))?;

    let (name, is_programmer) = if number <= PROGRAMMER_LIMIT {
        ("ProgrammerDummy", true)
    } else {
        ("AnalystDummy", false)
    };
    let details = NewEmployee {
        employee_number: number,
        name: name.to_string(),
        hire_date,
        salary: 0.0,
        max_salary: 0.0,
    };

    if is_programmer {
        Employee::programmer(details, 0.0, Language::C, today)
    } else {
        Employee::analyst(details, 0.0, "None", today)
    }
}

/// Enroll placeholders into `desk`: `bulk_count` from [`BULK_RANGE`] followed
/// by `small_count` from [`SMALL_RANGE`]. Returns the numbers in the order
/// they were enrolled.
pub fn generate<C, S, R>(
    desk: &mut PayrollDesk<C, S>,
    rng: &mut R,
    options: &GenerateOptions,
) -> LoadGenResult<Vec<EmployeeNumber>>
where
    C: Clock,
    S: RecordStore,
    R: Rng + ?Sized,
{
    let today = desk.today();
    let mut numbers = Vec::with_capacity(options.bulk_count + options.small_count);

    for (range, count) in [(BULK_RANGE, options.bulk_count), (SMALL_RANGE, options.small_count)] {
        ensure_available(desk, &range, count)?;
        for _ in 0..count {
            let number = unused_number(desk, rng, &range);
            desk.enroll(dummy_employee(number, today)?)?;
            numbers.push(number);
        }
        component_debug!(
            ComponentId::current(),
            "Generated {} records in {}..={}",
            count,
            range.start(),
            range.end()
        );
    }
    Ok(numbers)
}

fn unused_number<C, S, R>(
    desk: &PayrollDesk<C, S>,
    rng: &mut R,
    range: &RangeInclusive<EmployeeNumber>,
) -> EmployeeNumber
where
    C: Clock,
    S: RecordStore,
    R: Rng + ?Sized,
{
    loop {
        let number = rng.gen_range(range.clone());
        if !desk.list().exists(number) {
            return number;
        }
    }
}

/// Refuse requests that could never finish drawing unused numbers
fn ensure_available<C, S>(
    desk: &PayrollDesk<C, S>,
    range: &RangeInclusive<EmployeeNumber>,
    requested: usize,
) -> LoadGenResult<()>
where
    C: Clock,
    S: RecordStore,
{
    let size = (range.end() - range.start()) as usize + 1;
    let taken = desk
        .employees()
        .filter(|employee| range.contains(&employee.employee_number()))
        .count();
    let available = size - taken;

    if requested > available {
        return Err(LoadGenError::RangeExhausted {
            requested,
            available,
            low: *range.start(),
            high: *range.end(),
        });
    }
    Ok(())
}
