//! Load generator error types

use roster::RosterError;
use shared::RecordError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadGenError {
    #[error(transparent)]
    Record(#[from] RecordError),

    #[error(transparent)]
    Roster(#[from] RosterError),

    #[error("Cannot draw {requested} unused numbers from {low}..={high}: only {available} left")]
    RangeExhausted {
        requested: usize,
        available: usize,
        low: u32,
        high: u32,
    },
}

pub type LoadGenResult<T> = Result<T, LoadGenError>;
