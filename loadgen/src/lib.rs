//! Bulk roster generation and sort benchmarking
//!
//! Fills a payroll desk with thousands of placeholder records under random
//! employee numbers, then compares the in-place linked list sort with a
//! plain `Vec` sort over the same records.

pub mod benchmark;
pub mod error;
pub mod generator;

pub use benchmark::{preview_lines, run_benchmark, BenchmarkReport};
pub use error::{LoadGenError, LoadGenResult};
pub use generator::{dummy_employee, generate, GenerateOptions};
