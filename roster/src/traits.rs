//! Trait definitions with mockall annotations for testing
//!
//! The desk depends on these seams rather than on the system clock or the
//! filesystem directly, so tests can pin "today" and intercept persistence.

use chrono::NaiveDate;
use shared::Employee;

use crate::error::RosterResult;

/// Source of the reference date for hire date validation and payouts
#[mockall::automock]
pub trait Clock: Send + Sync {
    /// Current local calendar date
    fn today(&self) -> NaiveDate;
}

/// Durable storage for a roster
///
/// Records are handed over and returned in list order; the store never
/// reorders them.
#[mockall::automock]
#[async_trait::async_trait]
pub trait RecordStore: Send + Sync {
    /// Replace the stored roster with `employees`
    async fn save(&self, employees: &[Employee]) -> RosterResult<()>;

    /// Read the stored roster; a store that was never written yields no records
    async fn load(&self) -> RosterResult<Vec<Employee>>;

    /// Human readable location for log messages
    fn location(&self) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test that mock traits can be instantiated and driven
    #[tokio::test]
    async fn test_mock_trait_instantiation() {
        let mut clock = MockClock::new();
        clock
            .expect_today()
            .returning(|| NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());

        let mut store = MockRecordStore::new();
        store.expect_load().returning(|| Ok(vec![]));
        assert!(store.load().await.unwrap().is_empty());
    }
}
