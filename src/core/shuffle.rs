//! Fisher–Yates shuffle over an injectable random source.

use super::rng::RandomSource;

/// Shuffle a slice in place.
///
/// Walks from the last index down to 1 and swaps each slot with a uniformly
/// chosen slot in `0..=i`. Every permutation is equally likely as long as
/// `rng` is uniform.
///
/// ```
/// use element_match::core::{shuffle, GameRng};
///
/// let mut data = vec![1, 2, 3, 4, 5];
/// shuffle(&mut data, &mut GameRng::new(42));
///
/// data.sort();
/// assert_eq!(data, vec![1, 2, 3, 4, 5]);
/// ```
pub fn shuffle<T, R: RandomSource + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.index_inclusive(i);
        items.swap(i, j);
    }
}
