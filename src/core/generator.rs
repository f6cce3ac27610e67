// Bounded integer generation by rejection sampling

use std::fmt;

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::core::width::{assemble_le, draw_width, rejection_ceiling};
use crate::core::{RangeError, Result};
use crate::crypto::random::{OsSecureRandom, SecureByteSource, OS_SECURE_RANDOM};

/// Draws unbiased integers in `[0, max)` from a secure byte source.
///
/// The generator borrows its source and keeps no other state: every call
/// reads fresh bytes and nothing is cached between calls. It can be used
/// from several threads at once exactly when the source is `Sync`.
///
/// Bounds are limited to the 31-bit signed range (`max <= 2^31 - 1`).
///
/// # Rejection loop
///
/// [`bounded_int31`](Self::bounded_int31) redraws until a value falls below
/// the rejection ceiling. The loop has no retry limit, but each draw is
/// rejected with probability strictly below 1/2, so fewer than two draws are
/// needed on average and the loop ends with probability 1 for any
/// non-degenerate source. A source that stalls stalls the caller.
pub struct RangeGenerator<'a, S: SecureByteSource + ?Sized = OsSecureRandom> {
    source: &'a S,
}

impl RangeGenerator<'static, OsSecureRandom> {
    /// Generator backed by the operating system's secure random source
    pub fn new() -> Self {
        RangeGenerator { source: &OS_SECURE_RANDOM }
    }
}

impl Default for RangeGenerator<'static, OsSecureRandom> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, S: SecureByteSource + ?Sized> RangeGenerator<'a, S> {
    /// Generator backed by an injected source
    pub fn with_source(source: &'a S) -> Self {
        RangeGenerator { source }
    }

    pub fn source(&self) -> &'a S {
        self.source
    }

    /// Returns a non-negative 31-bit integer.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn non_negative_int31(&self) -> Result<i32> {
        self.read_bytes(4)
    }

    /// Returns a uniformly distributed integer in `[0, max)`.
    ///
    /// Fails with [`RangeError::NonPositiveBound`] when `max <= 0` and with
    /// [`RangeError::SourceReadFailure`] when the source cannot supply bytes.
    /// Source failures are never retried.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn bounded_int31(&self, max: i32) -> Result<i32> {
        if max <= 0 {
            return Err(RangeError::NonPositiveBound(i64::from(max)));
        }

        let width = draw_width(max);
        let ceiling = rejection_ceiling(max, width);

        let mut value = self.read_bytes(width)?;
        while value > ceiling {
            #[cfg(feature = "tracing")]
            tracing::trace!(width, ceiling, "rejected draw above ceiling");
            value = self.read_bytes(width)?;
        }
        Ok(value % max)
    }

    /// Returns a uniformly distributed index in `[0, max)`.
    ///
    /// Only bounds up to `2^31 - 1` are supported; larger ones fail with
    /// [`RangeError::BoundOutOfRange`]. `max == 0` fails with
    /// [`RangeError::NonPositiveBound`].
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn bounded_int(&self, max: usize) -> Result<usize> {
        let max = i32::try_from(max).map_err(|_| RangeError::BoundOutOfRange(max as u64))?;
        let value = self.bounded_int31(max)?;
        Ok(value as usize)
    }

    /// Reads `byte_count` (1-4) bytes and assembles them little-endian with
    /// the sign bit of the top byte cleared.
    fn read_bytes(&self, byte_count: usize) -> Result<i32> {
        debug_assert!((1..=4).contains(&byte_count));
        let mut buf = [0u8; 4];
        let bytes = &mut buf[..byte_count];

        if let Err(e) = self.source.fill_bytes(bytes) {
            #[cfg(feature = "tracing")]
            tracing::debug!(error = %e, byte_count, "secure byte source read failed");
            return Err(e.into());
        }
        Ok(assemble_le(bytes))
    }
}

impl<S: SecureByteSource + ?Sized> Clone for RangeGenerator<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: SecureByteSource + ?Sized> Copy for RangeGenerator<'_, S> {}

impl<S: SecureByteSource + ?Sized> fmt::Debug for RangeGenerator<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RangeGenerator").finish_non_exhaustive()
    }
}
