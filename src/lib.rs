//! Unbiased bounded random integers from a cryptographically secure byte
//! source.
//!
//! ```
//! use fair_range::RangeGenerator;
//!
//! let rng = RangeGenerator::new();
//! let roll = rng.bounded_int31(6).unwrap();
//! assert!((0..6).contains(&roll));
//! ```

pub mod core;
pub mod crypto;

pub use crate::core::{RangeError, RangeGenerator, Result, MAX_BOUND};
pub use crate::crypto::random::{
    HashChainSource, OsSecureRandom, ReaderSource, SecureByteSource, SourceError,
};
