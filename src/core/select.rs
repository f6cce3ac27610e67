// Fair selection over slices

use crate::core::generator::RangeGenerator;
use crate::core::Result;
use crate::crypto::random::SecureByteSource;

impl<S: SecureByteSource + ?Sized> RangeGenerator<'_, S> {
    /// Picks one element of `items` uniformly at random.
    ///
    /// An empty slice fails with [`RangeError::NonPositiveBound`](crate::core::RangeError::NonPositiveBound).
    pub fn choose<'t, T>(&self, items: &'t [T]) -> Result<&'t T> {
        let index = self.bounded_int(items.len())?;
        Ok(&items[index])
    }

    /// Shuffles `items` in place with a Fisher-Yates pass.
    ///
    /// On a source failure the slice is left as a permutation of its input,
    /// but not a uniformly random one.
    pub fn shuffle<T>(&self, items: &mut [T]) -> Result<()> {
        for i in (1..items.len()).rev() {
            let j = self.bounded_int(i + 1)?;
            items.swap(i, j);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RangeError;
    use crate::crypto::random::{HashChainSource, ReaderSource};

    #[test]
    fn test_choose_empty_slice_is_invalid() {
        let rng = RangeGenerator::new();
        let items: [u8; 0] = [];
        let err = rng.choose(&items).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_choose_uses_drawn_index() {
        // one byte, 0x04 % 3 == 1
        let source = ReaderSource::new(&[0x04u8][..]);
        let rng = RangeGenerator::with_source(&source);
        assert_eq!(rng.choose(&["a", "b", "c"]).unwrap(), &"b");
    }

    #[test]
    fn test_shuffle_short_slices_draw_nothing() {
        let source = ReaderSource::new(&[0u8; 0][..]);
        let rng = RangeGenerator::with_source(&source);

        let mut empty: [u8; 0] = [];
        rng.shuffle(&mut empty).unwrap();
        let mut single = [7u8];
        rng.shuffle(&mut single).unwrap();
        assert_eq!(single, [7]);
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        let source = HashChainSource::new(b"shuffle");
        let rng = RangeGenerator::with_source(&source);

        let mut items: Vec<u32> = (0..100).collect();
        rng.shuffle(&mut items).unwrap();

        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..100).collect::<Vec<_>>());
        assert_ne!(items, sorted);
    }

    #[test]
    fn test_shuffle_propagates_source_failure() {
        let source = ReaderSource::new(&[0x00u8][..]);
        let rng = RangeGenerator::with_source(&source);

        let mut items = [1, 2, 3, 4];
        let err = rng.shuffle(&mut items).unwrap_err();
        assert!(matches!(err, RangeError::SourceReadFailure(_)));
    }
}
