use alloc::{vec, vec::Vec};
use core::iter::successors;

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{
    Result, Sequence,
    sequence::{
        buffer::{checked_len, infallible, try_with_capacity},
        dup::try_dup,
        float::normalize_step_f64,
    },
};

impl Sequence for i64 {
    const ZERO: Self = 0;

    /// Saturates, so `i64::MIN` becomes `i64::MAX`.
    fn negate(self) -> Self {
        self.saturating_neg()
    }

    fn range_len(first: Self, last: Self, step: Self) -> u128 {
        range_len_i64(first, last, step)
    }

    fn try_range(first: Self, last: Self, step: Self) -> Result<Vec<Self>> {
        try_range_i64(first, last, step)
    }

    fn try_range_by_count(first: Self, last: Self, count: i64) -> Result<Vec<Self>> {
        try_range_by_count_i64(first, last, count)
    }
}

/// Ensures the sign of `step` is such that repeatedly adding it to `first`
/// moves ever closer to `last`.
///
/// Negating `i64::MIN` saturates to `i64::MAX`.
///
/// # Example
/// ```
/// use numseq::normalize_step_i64;
///
/// assert_eq!(normalize_step_i64(5, 3, 2), -2);
/// assert_eq!(normalize_step_i64(3, 5, -2), 2);
/// assert_eq!(normalize_step_i64(3, 3, -2), -2);
/// ```
pub fn normalize_step_i64(first: i64, last: i64, step: i64) -> i64 {
    <i64 as Sequence>::normalize_step(first, last, step)
}

/// The number of elements [`range_i64`] returns, `1 + |last - first| / |step|`.
///
/// Computed on unsigned magnitudes so that any pair of bounds, including
/// `i64::MIN..=i64::MAX`, is counted exactly.
pub fn range_len_i64(first: i64, last: i64, step: i64) -> u128 {
    if step == 0 {
        0
    } else if first == last {
        1
    } else {
        u128::from(first.abs_diff(last) / step.unsigned_abs()) + 1
    }
}

/// Returns the values from `first` toward `last` spaced by `|step|`.
///
/// The sign of `step` is ignored: the direction always runs from `first` to
/// `last`. The last element is the final value that does not pass `last`,
/// so it equals `last` only when `|step|` divides the span. A zero step gives
/// an empty vector and equal bounds give `[first]`.
///
/// # Example
/// ```
/// use numseq::range_i64;
///
/// assert_eq!(range_i64(-1, 1, 1), [-1, 0, 1]);
/// assert_eq!(range_i64(1, -1, 1), [1, 0, -1]);
/// assert_eq!(range_i64(-1, 1, 2), [-1, 1]);
/// assert_eq!(range_i64(1, 3, 10), [1]);
/// assert!(range_i64(1, 3, 0).is_empty());
/// ```
///
/// # Panics
///
/// Panics, or aborts, when the sequence does not fit in memory. Use
/// [`try_range_i64`] to handle that case.
pub fn range_i64(first: i64, last: i64, step: i64) -> Vec<i64> {
    infallible(try_range_i64(first, last, step))
}

/// Fallible version of [`range_i64`].
///
/// # Errors
///
/// Returns an error only if the sequence does not fit in memory, e.g. a unit
/// step across the whole `i64` domain.
#[cfg_attr(feature = "tracing", instrument(level = "trace"))]
pub fn try_range_i64(first: i64, last: i64, step: i64) -> Result<Vec<i64>> {
    if step == 0 {
        return Ok(Vec::new());
    }
    if first == last {
        return Ok(vec![first]);
    }

    let len = checked_len(range_len_i64(first, last, step))?;
    let mut buf = try_with_capacity(len)?;

    // The step is applied as an unsigned offset. `i64::MIN` has no positive
    // counterpart, and every emitted value lies within the bounds.
    let stride = step.unsigned_abs();
    let advance = if last > first {
        i64::wrapping_add_unsigned
    } else {
        i64::wrapping_sub_unsigned
    };
    buf.extend(successors(Some(first), |&v| Some(advance(v, stride))).take(len));
    Ok(buf)
}

/// Returns `|count|` values spaced evenly from `first` to `last`, each
/// rounded to the nearest integer with ties away from zero.
///
/// The fractional step is accumulated, not recomputed per element, so the
/// final element may differ from `last` by the accumulated rounding error.
/// A count of 0 gives an empty vector, 1 gives `[first]` and 2 gives
/// `[first, last]`.
///
/// # Example
/// ```
/// use numseq::range_by_count_i64;
///
/// assert_eq!(range_by_count_i64(1, 3, 3), [1, 2, 3]);
/// assert_eq!(range_by_count_i64(1, 3, 7), [1, 1, 2, 2, 2, 3, 3]);
/// assert_eq!(range_by_count_i64(1, 3, -2), [1, 3]);
/// ```
///
/// # Panics
///
/// Panics, or aborts, when the sequence does not fit in memory. Use
/// [`try_range_by_count_i64`] to handle that case.
pub fn range_by_count_i64(first: i64, last: i64, count: i64) -> Vec<i64> {
    infallible(try_range_by_count_i64(first, last, count))
}

/// Fallible version of [`range_by_count_i64`].
///
/// # Errors
///
/// Returns an error only if `|count|` elements do not fit in memory.
#[cfg_attr(feature = "tracing", instrument(level = "trace"))]
pub fn try_range_by_count_i64(first: i64, last: i64, count: i64) -> Result<Vec<i64>> {
    match count.unsigned_abs() {
        0 => return Ok(Vec::new()),
        1 => return Ok(vec![first]),
        2 => return Ok(vec![first, last]),
        _ => {}
    }
    if first == last {
        return try_dup(first, count);
    }

    let len = checked_len(u128::from(count.unsigned_abs()))?;
    let mut buf = try_with_capacity(len)?;

    let span = first.abs_diff(last) as f64;
    let step = normalize_step_f64(first as f64, last as f64, span / (len - 1) as f64);
    // `first` may not be representable as f64, so it is emitted as given.
    buf.push(first);
    buf.extend(
        successors(Some(first as f64), |&v| Some(v + step))
            .skip(1)
            .take(len - 1)
            .map(round_half_away),
    );
    Ok(buf)
}

/// Rounds to the nearest integer, ties away from zero. Values outside the
/// `i64` domain saturate.
fn round_half_away(v: f64) -> i64 {
    let whole = v as i64;
    // Exact: `v` and its truncation share the same binade or `whole` is 0.
    let frac = v - whole as f64;
    if frac >= 0.5 {
        whole.saturating_add(1)
    } else if frac <= -0.5 {
        whole.saturating_sub(1)
    } else {
        whole
    }
}
