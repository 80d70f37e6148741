use alloc::vec::Vec;

use crate::{Result, Sequence};

/// The parameters of a sequence, detached from its generation.
///
/// A `Progression` is a small `Copy` value that can be stored, compared or,
/// with the `serde` feature, (de)serialized, and expanded into its values on
/// demand with [`Progression::to_vec`].
///
/// With `serde` enabled the enum is internally tagged by `kind`:
///
/// ```json
/// { "kind": "step", "first": 0, "last": 10, "step": 5 }
/// ```
///
/// # Example
/// ```
/// use numseq::Progression;
///
/// let p = Progression::Step { first: 0_i64, last: 10, step: 5 };
/// assert_eq!(p.len(), 3);
/// assert_eq!(p.to_vec(), [0, 5, 10]);
///
/// let p = Progression::Count { first: 0.0_f64, last: 1.0, count: 3 };
/// assert_eq!(p.to_vec(), [0.0, 0.5, 1.0]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Progression<T> {
    /// From `first` toward `last` spaced by `|step|`. See [`Sequence::range`].
    Step {
        /// Starting value, always emitted unless `step` is zero.
        first: T,
        /// Inclusive bound in the direction of travel.
        last: T,
        /// Spacing; only its magnitude matters.
        step: T,
    },
    /// `|count|` values spaced evenly from `first` to `last`. See
    /// [`Sequence::range_by_count`].
    Count {
        /// Starting value.
        first: T,
        /// Target end value.
        last: T,
        /// Number of elements; only its magnitude matters.
        count: i64,
    },
    /// `|count|` copies of `value`. See [`Sequence::dup`].
    Repeat {
        /// The repeated value.
        value: T,
        /// Number of copies; only its magnitude matters.
        count: i64,
    },
}

impl<T: Sequence> Progression<T> {
    /// The exact number of values [`Self::to_vec`] yields.
    pub fn len(&self) -> u128 {
        match *self {
            Self::Step { first, last, step } => T::range_len(first, last, step),
            Self::Count { count, .. } | Self::Repeat { count, .. } => {
                u128::from(count.unsigned_abs())
            }
        }
    }

    /// Whether [`Self::to_vec`] yields no values.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Expands the progression into its values.
    ///
    /// # Panics
    ///
    /// Panics, or aborts, when the sequence does not fit in memory. Use
    /// [`Self::try_to_vec`] to handle that case.
    pub fn to_vec(&self) -> Vec<T> {
        match *self {
            Self::Step { first, last, step } => T::range(first, last, step),
            Self::Count { first, last, count } => T::range_by_count(first, last, count),
            Self::Repeat { value, count } => T::dup(value, count),
        }
    }

    /// Fallible version of [`Self::to_vec`].
    ///
    /// # Errors
    ///
    /// Returns an error only if the sequence does not fit in memory.
    pub fn try_to_vec(&self) -> Result<Vec<T>> {
        match *self {
            Self::Step { first, last, step } => T::try_range(first, last, step),
            Self::Count { first, last, count } => T::try_range_by_count(first, last, count),
            Self::Repeat { value, count } => T::try_dup(value, count),
        }
    }
}
