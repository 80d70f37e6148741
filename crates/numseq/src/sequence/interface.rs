use alloc::vec::Vec;
use core::fmt;

use crate::{Result, sequence::buffer::infallible};

/// A numeric kind that arithmetic progressions can be generated over.
///
/// Implemented for `i64` and `f64`. The methods mirror the free functions of
/// the same name (e.g. [`Sequence::range`] for `i64` is [`crate::range_i64`])
/// and exist so that callers can be generic over the two kinds.
pub trait Sequence: Copy + PartialOrd + fmt::Debug {
    /// The additive identity; a step equal to it never advances.
    const ZERO: Self;

    /// Reverses the sign of a step.
    fn negate(self) -> Self;

    /// Ensures the sign of `step` moves from `first` toward `last`.
    ///
    /// A step that already points the right way, a zero step, and a step for
    /// equal bounds are returned unchanged.
    fn normalize_step(first: Self, last: Self, step: Self) -> Self {
        if (last < first && step > Self::ZERO) || (last > first && step < Self::ZERO) {
            step.negate()
        } else {
            step
        }
    }

    /// The exact number of elements [`Self::range`] yields for these
    /// arguments, computed without allocating.
    fn range_len(first: Self, last: Self, step: Self) -> u128;

    /// Fallible version of [`Self::range`].
    ///
    /// # Errors
    ///
    /// Returns an error only if the sequence does not fit in memory.
    fn try_range(first: Self, last: Self, step: Self) -> Result<Vec<Self>>;

    /// Fallible version of [`Self::range_by_count`].
    ///
    /// # Errors
    ///
    /// Returns an error only if the sequence does not fit in memory.
    fn try_range_by_count(first: Self, last: Self, count: i64) -> Result<Vec<Self>>;

    /// Fallible version of [`Self::dup`].
    ///
    /// # Errors
    ///
    /// Returns an error only if the sequence does not fit in memory.
    fn try_dup(value: Self, count: i64) -> Result<Vec<Self>> {
        crate::sequence::dup::try_dup(value, count)
    }

    /// Returns the values from `first` toward `last`, spaced by the magnitude
    /// of `step`.
    ///
    /// # Panics
    ///
    /// Panics, or aborts, when the sequence does not fit in memory.
    fn range(first: Self, last: Self, step: Self) -> Vec<Self> {
        infallible(Self::try_range(first, last, step))
    }

    /// Returns `|count|` evenly spaced values from `first` to `last`.
    ///
    /// # Panics
    ///
    /// Panics, or aborts, when the sequence does not fit in memory.
    fn range_by_count(first: Self, last: Self, count: i64) -> Vec<Self> {
        infallible(Self::try_range_by_count(first, last, count))
    }

    /// Returns `|count|` copies of `value`.
    ///
    /// # Panics
    ///
    /// Panics, or aborts, when the sequence does not fit in memory.
    fn dup(value: Self, count: i64) -> Vec<Self> {
        infallible(Self::try_dup(value, count))
    }
}
