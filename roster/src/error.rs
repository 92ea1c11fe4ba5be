//! Roster-specific error types

use shared::{EmployeeNumber, RecordError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error(transparent)]
    Record(#[from] RecordError),

    #[error("Employee number {employee_number} already exists")]
    DuplicateEmployee { employee_number: EmployeeNumber },

    #[error("Employee number {employee_number} must be between {min} and {max}")]
    EmployeeNumberOutOfRange {
        employee_number: EmployeeNumber,
        min: EmployeeNumber,
        max: EmployeeNumber,
    },

    #[error("No employee is selected")]
    NoSelection,

    #[error("Employee {employee_number} is not eligible for a payout")]
    NotEligible { employee_number: EmployeeNumber },

    #[error("Employee {employee_number} not found")]
    NotFound { employee_number: EmployeeNumber },

    #[error("Configuration error: {field} = {value}")]
    ConfigurationError { field: String, value: String },

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Binary serialization error: {message}")]
    SerializationError { message: String },
}

impl RosterError {
    pub fn config(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::ConfigurationError {
            field: field.into(),
            value: value.into(),
        }
    }
}

impl From<bincode::Error> for RosterError {
    fn from(error: bincode::Error) -> Self {
        Self::SerializationError {
            message: error.to_string(),
        }
    }
}

pub type RosterResult<T> = Result<T, RosterError>;
