//! Time-gated, one-shot compensation
//!
//! Pure functions over an [`Employee`] and a reference date, plus the
//! [`apply`] step that credits the payout and closes the record's
//! eligibility. Analysts earn a flat amount per full elapsed year;
//! programmers earn a percentage of their salary per full elapsed month.
//!
//! The eligibility gates and the payout arithmetic deliberately count time
//! differently: the month gate ignores the day of month while the monthly
//! payout does not. Both are kept as-is.

use chrono::{Datelike, NaiveDate};
use shared::{
    component_debug, AnalystTerms, ComponentId, Employee, ProgrammerTerms, RecordError,
    RecordResult, Role,
};

/// Calendar months between two dates, ignoring the day of month
pub fn months_elapsed(hire_date: NaiveDate, now: NaiveDate) -> i32 {
    (now.year() - hire_date.year()) * 12 + (now.month() as i32 - hire_date.month() as i32)
}

/// Full years between two dates (anniversary based)
pub fn years_elapsed(hire_date: NaiveDate, now: NaiveDate) -> i32 {
    let mut years = now.year() - hire_date.year();
    if now.month() < hire_date.month()
        || (now.month() == hire_date.month() && now.day() < hire_date.day())
    {
        years -= 1;
    }
    years
}

pub fn months_passed_gate(employee: &Employee, now: NaiveDate) -> bool {
    months_elapsed(employee.hire_date(), now) >= 1
}

pub fn years_passed_gate(employee: &Employee, now: NaiveDate) -> bool {
    years_elapsed(employee.hire_date(), now) >= 1
}

/// Programmer payout: full months (day adjusted, never negative) times the
/// percentage of the current salary
pub fn monthly_extra_amount(employee: &Employee, terms: &ProgrammerTerms, now: NaiveDate) -> f64 {
    let hire_date = employee.hire_date();
    let mut months = months_elapsed(hire_date, now);
    if now.day() < hire_date.day() {
        months -= 1;
    }
    let months = months.max(0);

    let percentage = terms.monthly_extra_percent / 100.0;
    let amount = f64::from(months) * (employee.salary() * percentage);

    component_debug!(
        ComponentId::current(),
        "Monthly extra for #{}: {} months at {}% = {:.2}",
        employee.employee_number(),
        months,
        terms.monthly_extra_percent,
        amount
    );
    amount
}

/// Analyst payout: full years (never negative) times the flat bonus
pub fn annual_bonus_amount(employee: &Employee, terms: &AnalystTerms, now: NaiveDate) -> f64 {
    let years = years_elapsed(employee.hire_date(), now).max(0);
    let amount = f64::from(years) * terms.annual_bonus;

    component_debug!(
        ComponentId::current(),
        "Annual bonus for #{}: {} years at {:.2} = {:.2}",
        employee.employee_number(),
        years,
        terms.annual_bonus,
        amount
    );
    amount
}

/// Payout the record would receive if applied at `now`
pub fn payout_amount(employee: &Employee, now: NaiveDate) -> f64 {
    match employee.role() {
        Role::Analyst(terms) => annual_bonus_amount(employee, terms, now),
        Role::Programmer(terms) => monthly_extra_amount(employee, terms, now),
    }
}

/// Whether the time gate for the record's role is open
pub fn time_gate_open(employee: &Employee, now: NaiveDate) -> bool {
    match employee.role() {
        Role::Analyst(_) => years_passed_gate(employee, now),
        Role::Programmer(_) => months_passed_gate(employee, now),
    }
}

/// Time gate open and payout not yet applied
pub fn is_eligible(employee: &Employee, now: NaiveDate) -> bool {
    time_gate_open(employee, now) && !employee.role().payout_applied()
}

/// Credit the payout and close the one-shot flag.
///
/// Fails with `SalaryExceedsMax` when the new salary would pass the ceiling,
/// or `NonFiniteAmount` when it overflows, leaving salary and flag untouched.
/// Does not consult the eligibility gate; callers check [`is_eligible`]
/// first. Returns the amount credited.
pub fn apply(employee: &mut Employee, now: NaiveDate) -> RecordResult<f64> {
    let amount = payout_amount(employee, now);
    let new_salary = employee.salary() + amount;

    if !new_salary.is_finite() {
        return Err(RecordError::non_finite("salary"));
    }
    if new_salary > employee.max_salary() {
        component_debug!(
            ComponentId::current(),
            "Refusing payout of {:.2} for #{}: {:.2} would exceed {:.2}",
            amount,
            employee.employee_number(),
            new_salary,
            employee.max_salary()
        );
        return Err(RecordError::SalaryExceedsMax {
            salary: new_salary,
            max_salary: employee.max_salary(),
        });
    }

    employee.set_salary(new_salary)?;
    employee.mark_payout_applied();

    component_debug!(
        ComponentId::current(),
        "Applied payout of {:.2} to #{}, salary now {:.2}",
        amount,
        employee.employee_number(),
        new_salary
    );
    Ok(amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{Language, NewEmployee};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn details(hire_date: NaiveDate, salary: f64, max_salary: f64) -> NewEmployee {
        NewEmployee {
            employee_number: 3,
            name: "Sasque".to_string(),
            hire_date,
            salary,
            max_salary,
        }
    }

    fn programmer(hire_date: NaiveDate, salary: f64, max_salary: f64, percent: f64) -> Employee {
        let details = details(hire_date, salary, max_salary);
        Employee::programmer(details, percent, Language::Java, date(2030, 1, 1)).unwrap()
    }

    fn analyst(hire_date: NaiveDate, salary: f64, max_salary: f64, bonus: f64) -> Employee {
        let details = details(hire_date, salary, max_salary);
        Employee::analyst(details, bonus, "Certified", date(2030, 1, 1)).unwrap()
    }

    #[test]
    fn test_months_elapsed_ignores_day() {
        assert_eq!(months_elapsed(date(2023, 8, 11), date(2023, 11, 8)), 3);
        assert_eq!(months_elapsed(date(2023, 8, 31), date(2023, 9, 1)), 1);
        assert_eq!(months_elapsed(date(2022, 11, 1), date(2023, 2, 1)), 3);
        assert_eq!(months_elapsed(date(2023, 8, 11), date(2023, 8, 30)), 0);
    }

    #[test]
    fn test_years_elapsed_is_anniversary_based() {
        assert_eq!(years_elapsed(date(2021, 1, 1), date(2024, 1, 1)), 3);
        assert_eq!(years_elapsed(date(2021, 6, 15), date(2024, 6, 14)), 2);
        assert_eq!(years_elapsed(date(2021, 6, 15), date(2024, 5, 30)), 2);
        assert_eq!(years_elapsed(date(2021, 6, 15), date(2024, 6, 15)), 3);
        assert_eq!(years_elapsed(date(2024, 6, 15), date(2024, 6, 1)), -1);
    }

    #[test]
    fn test_monthly_extra_applies_day_adjustment() {
        // gate sees 3 months, payout counts only 2
        let employee = programmer(date(2023, 8, 11), 1000.0, 10_000.0, 10.0);
        let now = date(2023, 11, 8);
        assert!(months_passed_gate(&employee, now));
        assert_eq!(payout_amount(&employee, now), 200.0);
    }

    #[test]
    fn test_gate_open_with_zero_payout() {
        // one calendar month apart but not a full month
        let employee = programmer(date(2023, 8, 31), 1000.0, 10_000.0, 10.0);
        let now = date(2023, 9, 1);
        assert!(is_eligible(&employee, now));
        assert_eq!(payout_amount(&employee, now), 0.0);
    }

    #[test]
    fn test_annual_bonus_is_flat_per_year() {
        let employee = analyst(date(2021, 1, 1), 5000.0, 6000.0, 200.0);
        assert_eq!(payout_amount(&employee, date(2023, 12, 31)), 400.0);
        assert_eq!(payout_amount(&employee, date(2024, 1, 1)), 600.0);
    }

    #[test]
    fn test_analyst_gate_needs_a_full_year() {
        let employee = analyst(date(2023, 3, 10), 5000.0, 6000.0, 200.0);
        assert!(!years_passed_gate(&employee, date(2024, 3, 9)));
        assert!(!is_eligible(&employee, date(2024, 3, 9)));
        assert!(is_eligible(&employee, date(2024, 3, 10)));
    }

    #[test]
    fn test_programmer_gate_needs_a_calendar_month() {
        let employee = programmer(date(2023, 3, 10), 5000.0, 6000.0, 5.0);
        assert!(!is_eligible(&employee, date(2023, 3, 31)));
        assert!(is_eligible(&employee, date(2023, 4, 1)));
    }

    #[test]
    fn test_apply_credits_salary_and_closes_gate() {
        let mut employee = analyst(date(2021, 1, 1), 5000.0, 6000.0, 200.0);
        let now = date(2024, 1, 1);

        let amount = apply(&mut employee, now).unwrap();
        assert_eq!(amount, 600.0);
        assert_eq!(employee.salary(), 5600.0);
        assert!(employee.role().payout_applied());
        assert!(!is_eligible(&employee, now));
    }

    #[test]
    fn test_apply_over_ceiling_changes_nothing() {
        let mut employee = programmer(date(2023, 8, 11), 5000.0, 5100.0, 200.0);
        let now = date(2023, 9, 11);

        let before = employee.clone();
        let result = apply(&mut employee, now);

        assert_eq!(
            result,
            Err(RecordError::SalaryExceedsMax { salary: 15_000.0, max_salary: 5100.0 })
        );
        assert_eq!(employee, before);
        assert_eq!(employee.salary(), 5000.0);
        assert!(!employee.role().payout_applied());
    }

    #[test]
    fn test_apply_refuses_overflowing_payout() {
        let mut employee = programmer(date(2023, 8, 11), 1e308, f64::MAX, 1000.0);
        let now = date(2023, 9, 11);
        assert!(payout_amount(&employee, now).is_infinite());

        let before = employee.clone();
        let result = apply(&mut employee, now);

        assert_eq!(
            result,
            Err(RecordError::NonFiniteAmount { field: "salary".to_string() })
        );
        assert_eq!(employee, before);
        assert!(!employee.role().payout_applied());
    }

    #[test]
    fn test_apply_exactly_to_ceiling_is_allowed() {
        let mut employee = analyst(date(2022, 5, 1), 5000.0, 5500.0, 250.0);
        let amount = apply(&mut employee, date(2024, 5, 1)).unwrap();
        assert_eq!(amount, 500.0);
        assert_eq!(employee.salary(), 5500.0);
    }
}
