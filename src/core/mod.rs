pub mod generator;
pub mod select;
pub(crate) mod width;

use thiserror::Error;

use crate::crypto::random::SourceError;

pub use generator::RangeGenerator;

/// Largest bound the generator accepts, `2^31 - 1`
pub const MAX_BOUND: i32 = i32::MAX;

/// Errors that can occur while drawing a bounded integer
#[derive(Error, Debug)]
pub enum RangeError {
    #[error("Max must be greater than 0, got {0}")]
    NonPositiveBound(i64),

    #[error("Max {0} is outside of the supported 31-bit range")]
    BoundOutOfRange(u64),

    #[error("Failed to read from secure byte source: {0}")]
    SourceReadFailure(#[from] SourceError),
}

impl RangeError {
    /// True for errors caused by the caller's bound rather than the source
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, RangeError::NonPositiveBound(_) | RangeError::BoundOutOfRange(_))
    }
}

pub type Result<T, E = RangeError> = std::result::Result<T, E>;
