use std::ops::RangeInclusive;

use rand::RngExt;

/// Source of the random score draw.
///
/// Injected into [`Estimator`](crate::Estimator) so deterministic tests can
/// substitute a scripted sequence for the thread-local RNG.
pub trait ScoreSource: Send + Sync {
    /// Draws a uniformly distributed integer from `range` (both ends inclusive).
    fn draw(&self, range: RangeInclusive<u8>) -> u8;
}

/// Production source backed by the thread-local RNG. No seed control exposed.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngSource;

impl ScoreSource for ThreadRngSource {
    fn draw(&self, range: RangeInclusive<u8>) -> u8 {
        rand::rng().random_range(range)
    }
}
