use alloc::{vec, vec::Vec};
use core::iter::successors;

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{
    Result, Sequence,
    sequence::{
        buffer::{checked_len, infallible, try_with_capacity},
        dup::try_dup,
    },
};

impl Sequence for f64 {
    const ZERO: Self = 0.0;

    fn negate(self) -> Self {
        -self
    }

    fn range_len(first: Self, last: Self, step: Self) -> u128 {
        range_len_f64(first, last, step)
    }

    fn try_range(first: Self, last: Self, step: Self) -> Result<Vec<Self>> {
        try_range_f64(first, last, step)
    }

    fn try_range_by_count(first: Self, last: Self, count: i64) -> Result<Vec<Self>> {
        try_range_by_count_f64(first, last, count)
    }
}

/// Ensures the sign of `step` is such that repeatedly adding it to `first`
/// moves ever closer to `last`.
///
/// # Example
/// ```
/// use numseq::normalize_step_f64;
///
/// assert_eq!(normalize_step_f64(2.0, 1.0, 0.25), -0.25);
/// assert_eq!(normalize_step_f64(1.0, 2.0, -0.25), 0.25);
/// ```
pub fn normalize_step_f64(first: f64, last: f64, step: f64) -> f64 {
    <f64 as Sequence>::normalize_step(first, last, step)
}

/// The number of elements [`range_f64`] returns,
/// `1 + |trunc((last - first) / step)|`.
///
/// Bounds whose difference overflows `f64` are divided by the step first. A
/// quotient that is not a number counts as zero steps and an infinite one
/// saturates.
pub fn range_len_f64(first: f64, last: f64, step: f64) -> u128 {
    if step == 0.0 {
        return 0;
    }
    if first == last {
        return 1;
    }

    let span = last - first;
    let steps = if span.is_finite() {
        span / step
    } else {
        last / step - first / step
    };
    u128::from((steps as i64).unsigned_abs()) + 1
}

/// Returns the values from `first` toward `last` spaced by `|step|`.
///
/// Unlike [`crate::range_i64`], the final element is always exactly `last`.
/// The first half of the slots is filled forward from `first` and the second
/// half backward from `last`, so accumulated rounding error never reaches the
/// bounds. When `|step|` does not divide the span, the gap nearest the middle
/// absorbs the remainder. A zero step gives an empty vector, equal bounds give
/// `[first]`, and a step larger than the span gives `[first]`.
///
/// # Example
/// ```
/// use numseq::range_f64;
///
/// let r = range_f64(1.5, 2.0, 0.1);
/// assert_eq!(r.len(), 6);
/// assert_eq!(r[0], 1.5);
/// assert_eq!(r[5], 2.0);
///
/// assert_eq!(range_f64(0.0, 1.0, -0.5), [0.0, 0.5, 1.0]);
/// ```
///
/// # Panics
///
/// Panics, or aborts, when the sequence does not fit in memory. Use
/// [`try_range_f64`] to handle that case.
pub fn range_f64(first: f64, last: f64, step: f64) -> Vec<f64> {
    infallible(try_range_f64(first, last, step))
}

/// Fallible version of [`range_f64`].
///
/// # Errors
///
/// Returns an error only if the sequence does not fit in memory, e.g. a tiny
/// step across a huge span.
#[cfg_attr(feature = "tracing", instrument(level = "trace"))]
pub fn try_range_f64(first: f64, last: f64, step: f64) -> Result<Vec<f64>> {
    if step == 0.0 {
        return Ok(Vec::new());
    }
    if first == last {
        return Ok(vec![first]);
    }

    let len = checked_len(range_len_f64(first, last, step))?;
    let mut buf = try_with_capacity(len)?;
    if len == 1 {
        buf.push(first);
        return Ok(buf);
    }

    let step = normalize_step_f64(first, last, step);
    let head = len / 2;
    buf.extend(successors(Some(first), |&v| Some(v + step)).take(head));
    buf.resize(len, last);
    let mut val = last;
    for slot in buf[head..].iter_mut().rev() {
        *slot = val;
        val -= step;
    }
    Ok(buf)
}

/// Returns `|count|` values spaced evenly from `first` to `last`.
///
/// Mirrors [`crate::range_by_count_i64`] without the rounding: the step is
/// accumulated from `first`, so the final element may differ from `last` by
/// the accumulated floating point error. A count of 0 gives an empty vector,
/// 1 gives `[first]` and 2 gives `[first, last]`.
///
/// # Example
/// ```
/// use numseq::range_by_count_f64;
///
/// assert_eq!(range_by_count_f64(0.0, 1.0, 5), [0.0, 0.25, 0.5, 0.75, 1.0]);
/// ```
///
/// # Panics
///
/// Panics, or aborts, when the sequence does not fit in memory. Use
/// [`try_range_by_count_f64`] to handle that case.
pub fn range_by_count_f64(first: f64, last: f64, count: i64) -> Vec<f64> {
    infallible(try_range_by_count_f64(first, last, count))
}

/// Fallible version of [`range_by_count_f64`].
///
/// # Errors
///
/// Returns an error only if `|count|` elements do not fit in memory.
#[cfg_attr(feature = "tracing", instrument(level = "trace"))]
pub fn try_range_by_count_f64(first: f64, last: f64, count: i64) -> Result<Vec<f64>> {
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

    let gaps = (len - 1) as f64;
    let span = if last > first { last - first } else { first - last };
    let step = if span.is_finite() {
        normalize_step_f64(first, last, span / gaps)
    } else {
        last / gaps - first / gaps
    };
    buf.extend(successors(Some(first), |&v| Some(v + step)).take(len));
    Ok(buf)
}
