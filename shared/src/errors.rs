//! Shared error types for employee records

use thiserror::Error;

/// Failures raised while building or mutating an employee record
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecordError {
    #[error("Invalid date: {message}")]
    InvalidDate { message: String },

    #[error("Salary {salary:.2} exceeds maximum salary {max_salary:.2}")]
    SalaryExceedsMax { salary: f64, max_salary: f64 },

    #[error("{field} must be a finite number")]
    NonFiniteAmount { field: String },

    #[error("Invalid stored record: {message}")]
    CorruptRecord { message: String },
}

impl RecordError {
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    pub fn non_finite(field: impl Into<String>) -> Self {
        Self::NonFiniteAmount {
            field: field.into(),
        }
    }
}

pub type RecordResult<T> = Result<T, RecordError>;
