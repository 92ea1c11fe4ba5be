//! Employee records
//!
//! An [`Employee`] carries the base compensation fields plus a [`Role`]
//! payload. Construction validates the hire date and the salary ceiling; no
//! partially built record is ever returned.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::dates::{check_hire_floor, format_date, validate_hire_date};
use crate::errors::{RecordError, RecordResult};
use crate::types::{EmployeeNumber, Language};

/// Character used to mask display names
pub const MASK_CHAR: char = '*';

/// Base fields supplied when hiring an employee
#[derive(Debug, Clone, PartialEq)]
pub struct NewEmployee {
    pub employee_number: EmployeeNumber,
    pub name: String,
    pub hire_date: NaiveDate,
    pub salary: f64,
    pub max_salary: f64,
}

/// Analyst-specific compensation terms
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalystTerms {
    /// Flat currency amount credited per full elapsed year
    pub annual_bonus: f64,
    pub qualification: String,
    bonus_applied: bool,
}

impl AnalystTerms {
    pub fn new(annual_bonus: f64, qualification: impl Into<String>) -> Self {
        Self {
            annual_bonus,
            qualification: qualification.into(),
            bonus_applied: false,
        }
    }

    pub fn bonus_applied(&self) -> bool {
        self.bonus_applied
    }
}

/// Programmer-specific compensation terms
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgrammerTerms {
    /// Percentage of the current salary credited per full elapsed month
    pub monthly_extra_percent: f64,
    pub main_language: Language,
    extra_applied: bool,
}

impl ProgrammerTerms {
    pub fn new(monthly_extra_percent: f64, main_language: Language) -> Self {
        Self {
            monthly_extra_percent,
            main_language,
            extra_applied: false,
        }
    }

    pub fn extra_applied(&self) -> bool {
        self.extra_applied
    }
}

/// Variant payload of an employee record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Role {
    Analyst(AnalystTerms),
    Programmer(ProgrammerTerms),
}

impl Role {
    pub fn kind(&self) -> &'static str {
        match self {
            Role::Analyst(_) => "Analyst",
            Role::Programmer(_) => "Programmer",
        }
    }

    /// Whether the one-shot payout for this role has already been applied
    pub fn payout_applied(&self) -> bool {
        match self {
            Role::Analyst(terms) => terms.bonus_applied,
            Role::Programmer(terms) => terms.extra_applied,
        }
    }
}

/// A single employee compensation record
///
/// Deserialized records pass the same amount, ceiling, hire floor and mask
/// checks as freshly built ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StoredEmployee")]
pub struct Employee {
    employee_number: EmployeeNumber,
    /// Never persisted; empty after a reload
    #[serde(skip)]
    display_name: String,
    masked_name: String,
    hire_date: NaiveDate,
    salary: f64,
    max_salary: f64,
    role: Role,
}

impl Employee {
    /// Build a validated record. `today` is the reference date for the
    /// "not in the future" hire date check.
    pub fn new(details: NewEmployee, role: Role, today: NaiveDate) -> RecordResult<Self> {
        check_amounts(details.salary, details.max_salary, &role)?;
        validate_hire_date(details.hire_date, today)?;

        let masked_name = mask_name(&details.name);
        Ok(Self {
            employee_number: details.employee_number,
            display_name: details.name,
            masked_name,
            hire_date: details.hire_date,
            salary: details.salary,
            max_salary: details.max_salary,
            role,
        })
    }

    pub fn analyst(
        details: NewEmployee,
        annual_bonus: f64,
        qualification: impl Into<String>,
        today: NaiveDate,
    ) -> RecordResult<Self> {
        Self::new(details, Role::Analyst(AnalystTerms::new(annual_bonus, qualification)), today)
    }

    pub fn programmer(
        details: NewEmployee,
        monthly_extra_percent: f64,
        main_language: Language,
        today: NaiveDate,
    ) -> RecordResult<Self> {
        Self::new(
            details,
            Role::Programmer(ProgrammerTerms::new(monthly_extra_percent, main_language)),
            today,
        )
    }

    pub fn employee_number(&self) -> EmployeeNumber {
        self.employee_number
    }

    /// The unmasked name, if this record was built in this process
    pub fn display_name(&self) -> Option<&str> {
        if self.display_name.is_empty() {
            None
        } else {
            Some(&self.display_name)
        }
    }

    pub fn masked_name(&self) -> &str {
        &self.masked_name
    }

    /// Name to show a user: the real name when known, the mask otherwise
    pub fn visible_name(&self) -> &str {
        self.display_name().unwrap_or(&self.masked_name)
    }

    pub fn hire_date(&self) -> NaiveDate {
        self.hire_date
    }

    pub fn salary(&self) -> f64 {
        self.salary
    }

    pub fn max_salary(&self) -> f64 {
        self.max_salary
    }

    pub fn role(&self) -> &Role {
        &self.role
    }

    pub fn set_salary(&mut self, salary: f64) -> RecordResult<()> {
        check_finite("salary", salary)?;
        if salary > self.max_salary {
            return Err(RecordError::SalaryExceedsMax {
                salary,
                max_salary: self.max_salary,
            });
        }
        self.salary = salary;
        Ok(())
    }

    pub fn set_max_salary(&mut self, max_salary: f64) -> RecordResult<()> {
        check_finite("max_salary", max_salary)?;
        if self.salary > max_salary {
            return Err(RecordError::SalaryExceedsMax {
                salary: self.salary,
                max_salary,
            });
        }
        self.max_salary = max_salary;
        Ok(())
    }

    /// Flip the one-shot payout flag of the role. There is no way back.
    pub fn mark_payout_applied(&mut self) {
        match &mut self.role {
            Role::Analyst(terms) => terms.bonus_applied = true,
            Role::Programmer(terms) => terms.extra_applied = true,
        }
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{{employeeNumber={}, name={}, hireDate={}, salary={:.2}, maxSalary={:.2}",
            self.role.kind(),
            self.employee_number,
            self.masked_name,
            format_date(self.hire_date),
            self.salary,
            self.max_salary
        )?;
        match &self.role {
            Role::Analyst(terms) => write!(
                f,
                ", annualBonus={:.2}, additionalQualification={}}}",
                terms.annual_bonus, terms.qualification
            ),
            Role::Programmer(terms) => write!(
                f,
                ", monthlyExtra={:.2}, mainLanguage={}}}",
                terms.monthly_extra_percent, terms.main_language
            ),
        }
    }
}

/// One mask character per character of the name
pub fn mask_name(name: &str) -> String {
    std::iter::repeat(MASK_CHAR).take(name.chars().count()).collect()
}

fn check_finite(field: &str, value: f64) -> RecordResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(RecordError::non_finite(field))
    }
}

/// Every amount finite and the salary within its ceiling
fn check_amounts(salary: f64, max_salary: f64, role: &Role) -> RecordResult<()> {
    check_finite("salary", salary)?;
    check_finite("max_salary", max_salary)?;
    match role {
        Role::Analyst(terms) => check_finite("annual_bonus", terms.annual_bonus)?,
        Role::Programmer(terms) => {
            check_finite("monthly_extra_percent", terms.monthly_extra_percent)?
        }
    }
    if salary > max_salary {
        return Err(RecordError::SalaryExceedsMax { salary, max_salary });
    }
    Ok(())
}

/// On-disk shape of an [`Employee`]; the display name is never stored
#[derive(Deserialize)]
struct StoredEmployee {
    employee_number: EmployeeNumber,
    masked_name: String,
    hire_date: NaiveDate,
    salary: f64,
    max_salary: f64,
    role: Role,
}

impl TryFrom<StoredEmployee> for Employee {
    type Error = RecordError;

    fn try_from(stored: StoredEmployee) -> RecordResult<Self> {
        check_amounts(stored.salary, stored.max_salary, &stored.role)?;
        check_hire_floor(stored.hire_date)?;
        if stored.masked_name.chars().any(|c| c != MASK_CHAR) {
            return Err(RecordError::CorruptRecord {
                message: format!(
                    "employee {} has an unmasked name",
                    stored.employee_number
                ),
            });
        }

        Ok(Self {
            employee_number: stored.employee_number,
            display_name: String::new(),
            masked_name: stored.masked_name,
            hire_date: stored.hire_date,
            salary: stored.salary,
            max_salary: stored.max_salary,
            role: stored.role,
        })
    }
}
