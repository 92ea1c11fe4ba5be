//! Employee roster library
//!
//! This library keeps an ordered roster of employee records behind a
//! cursor-driven linked list and applies one-shot, time-gated payouts to
//! them under each record's salary ceiling. Persistence and the clock sit
//! behind traits so the desk can be driven entirely by mocks in tests.

pub mod config;
pub mod core;
pub mod desk;
pub mod error;
pub mod services;
pub mod traits;

// Re-export commonly used types
pub use config::{ConfigOverrides, RosterConfig};
pub use crate::core::{compensation, CursorList};
pub use desk::{Controls, EmployeeView, PayrollDesk, SortReport};
pub use error::{RosterError, RosterResult};
pub use traits::{Clock, MockClock, MockRecordStore, RecordStore};
