//! Shared types for the employee roster workspace
//!
//! Holds the employee record model, its validation errors, hire date
//! utilities and the tracing setup used by every binary.

pub mod dates;
pub mod errors;
pub mod logging;
pub mod record;
pub mod types;

pub use errors::*;
pub use types::*;

pub use record::{AnalystTerms, Employee, NewEmployee, ProgrammerTerms, Role};
