use std::collections::HashMap;

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{Error, Interval, RandSource, Result};

/// A bounded sampler over a pluggable randomness source.
///
/// The sampler owns its [`RandSource`] and derives every integer draw from
/// unit-interval draws by scaling and flooring. Pass a [`ThreadRandom`] for
/// ambient randomness or a [`SeededRandom`] when the draw sequence must be
/// reproducible.
///
/// ## Features
/// - ✅ Explicit entropy: no hidden global state beyond the source you inject
/// - ✅ Guaranteed termination: distinct-sample selection never re-rolls
/// - ✅ Fallible by design: out-of-order bounds report an error
///
/// # Example
/// ```
/// use sortilege::{RangeSampler, ThreadRandom};
///
/// let mut sampler = RangeSampler::new(ThreadRandom::default());
///
/// let value = sampler.random(1, 7).unwrap();
/// assert!((1..7).contains(&value));
///
/// let numbers = sampler.random_sorted_numbers(3, 0, 100, 10).unwrap();
/// assert_eq!(numbers.len(), 3);
/// assert!(numbers.windows(2).all(|w| w[0] < w[1]));
/// ```
///
/// [`ThreadRandom`]: crate::ThreadRandom
/// [`SeededRandom`]: crate::SeededRandom
pub struct RangeSampler<R>
where
    R: RandSource,
{
    rng: R,
}

impl<R> RangeSampler<R>
where
    R: RandSource,
{
    /// Creates a new [`RangeSampler`] with the provided randomness source.
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Consumes the sampler and returns its randomness source.
    pub fn into_inner(self) -> R {
        self.rng
    }

    /// Draws one integer `value` with `min <= value < max`.
    ///
    /// The degenerate call with `min == max` always returns `min`.
    ///
    /// # Example
    /// ```
    /// use sortilege::{RangeSampler, ThreadRandom};
    ///
    /// let mut sampler = RangeSampler::new(ThreadRandom::default());
    /// assert_eq!(sampler.random(5, 5).unwrap(), 5);
    /// assert_eq!(sampler.random(0, 1).unwrap(), 0);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBounds`] if `min > max`.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn random(&mut self, min: i64, max: i64) -> Result<i64> {
        let interval = Interval::new(min, max)?;
        Ok(self.random_in(interval))
    }

    /// Draws one integer from an already-validated [`Interval`].
    ///
    /// # Example
    /// ```
    /// use sortilege::{Interval, RangeSampler, ThreadRandom};
    ///
    /// let mut sampler = RangeSampler::new(ThreadRandom::default());
    /// let interval = Interval::new(-10, 10).unwrap();
    /// assert!(interval.contains(sampler.random_in(interval)));
    /// ```
    pub fn random_in(&mut self, interval: Interval) -> i64 {
        let offset = self.offset_below(interval.span());
        // Wrapping add is exact: the result always lies in the interval.
        interval.min().wrapping_add(offset as i64)
    }

    /// Draws `length` distinct integers from `[lower, upper)` narrowed on one
    /// random side, sorted ascending.
    ///
    /// One coin flip picks the narrowing side: with probability 1/2 the upper
    /// bound shrinks by an offset drawn from `[0, range)`, otherwise the
    /// lower bound grows by an offset from the same range. The sample is then
    /// selected from the narrowed interval without replacement and sorted.
    ///
    /// Exactly `length + 2` draws are consumed from the source: the coin
    /// flip, the narrowing offset, and one draw per selected value.
    ///
    /// # Example
    /// ```
    /// use sortilege::{RangeSampler, ThreadRandom};
    ///
    /// let mut sampler = RangeSampler::new(ThreadRandom::default());
    ///
    /// let numbers = sampler.random_sorted_numbers(3, 0, 100, 10).unwrap();
    /// assert_eq!(numbers.len(), 3);
    /// assert!(numbers.windows(2).all(|w| w[0] < w[1]));
    ///
    /// assert!(sampler.random_sorted_numbers(0, 0, 10, 5).unwrap().is_empty());
    /// ```
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidBounds`] if `lower > upper`, if `range` is negative,
    ///   or if the narrowing offset pushes one bound past the other.
    /// - [`Error::IntervalExhausted`] if the narrowed interval holds fewer
    ///   than `length` distinct integers.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn random_sorted_numbers(
        &mut self,
        length: usize,
        lower: i64,
        upper: i64,
        range: i64,
    ) -> Result<Vec<i64>> {
        let outer = Interval::new(lower, upper)?;
        let narrowed = self.narrow(outer, range)?;

        if narrowed.span() < length as u64 {
            return Err(Error::IntervalExhausted {
                min: narrowed.min(),
                max: narrowed.max(),
                requested: length,
            });
        }

        let mut numbers = self.distinct_draws(narrowed, length);
        numbers.sort_unstable();
        Ok(numbers)
    }

    /// Narrows `outer` on one randomly chosen side.
    ///
    /// The coin flip draws over `{0, 1}`: 1 shrinks the upper bound, 0 grows
    /// the lower bound. `range == 0` narrows by nothing.
    fn narrow(&mut self, outer: Interval, range: i64) -> Result<Interval> {
        let mut min = outer.min();
        let mut max = outer.max();

        if self.random(0, 2)? == 1 {
            let offset = self.random(0, range)?;
            max = max
                .checked_sub(offset)
                .ok_or(Error::InvalidBounds { min, max })?;
        } else {
            let offset = self.random(0, range)?;
            min = min
                .checked_add(offset)
                .ok_or(Error::InvalidBounds { min, max })?;
        }

        Interval::new(min, max)
    }

    /// Selects `length` distinct values with a partial Fisher-Yates shuffle
    /// over the interval.
    ///
    /// The virtual array `interval.min() + index` is never materialized; only
    /// displaced slots are tracked. Requires `length <= interval.span()` and
    /// completes in exactly `length` draws.
    fn distinct_draws(&mut self, interval: Interval, length: usize) -> Vec<i64> {
        let span = interval.span();
        let mut displaced: HashMap<u64, u64> = HashMap::with_capacity(length);
        let mut numbers = Vec::with_capacity(length);

        for i in 0..length as u64 {
            let j = i + self.offset_below(span - i);
            let picked = displaced.get(&j).copied().unwrap_or(j);
            let replacement = displaced.get(&i).copied().unwrap_or(i);
            displaced.insert(j, replacement);
            numbers.push(interval.min().wrapping_add(picked as i64));
        }

        numbers
    }

    /// Uniform offset in `[0, n)`, for `n >= 1`.
    fn offset_below(&mut self, n: u64) -> u64 {
        let scaled = (self.rng.next_unit() * n as f64) as u64;
        // A unit draw is strictly below 1.0, but the scaled product can still
        // round up to `n` for spans near 2^64.
        scaled.min(n - 1)
    }
}
