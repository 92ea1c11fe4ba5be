//! Service implementations
//!
//! This module contains real implementations of all service traits.
//! These are the production implementations that handle actual I/O operations.

pub mod clock;
pub mod file_store;

#[cfg(test)]
mod tests;

// Re-export all service implementations
pub use clock::{FixedClock, SystemClock};
pub use file_store::{FileStore, StoreFormat};
