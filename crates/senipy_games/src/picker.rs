//! Random selection from fixed pools.

use rand::Rng;
use tracing::instrument;

/// Picks an index in `0..len` uniformly at random.
///
/// # Panics
///
/// Panics if `len` is zero.
#[instrument(skip(rng))]
pub fn pick_uniform<R: Rng + ?Sized>(rng: &mut R, len: usize) -> usize {
    assert!(len > 0, "cannot pick from an empty pool");
    rng.random_range(0..len)
}

/// Picks an index in `0..len` uniformly, never returning `previous`.
///
/// Draws from the `len - 1` remaining slots and shifts past the excluded
/// one, so a single draw always suffices. With a one-element pool the only
/// index is returned even if it repeats.
///
/// # Panics
///
/// Panics if `len` is zero.
#[instrument(skip(rng))]
pub fn pick_excluding<R: Rng + ?Sized>(rng: &mut R, len: usize, previous: Option<usize>) -> usize {
    match previous {
        Some(prev) if len > 1 && prev < len => {
            let draw = rng.random_range(0..len - 1);
            if draw >= prev { draw + 1 } else { draw }
        }
        _ => pick_uniform(rng, len),
    }
}
