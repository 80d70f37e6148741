use alloc::vec::Vec;

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{
    Result,
    sequence::buffer::{checked_len, infallible, try_with_capacity},
};

pub(crate) fn try_dup<T: Copy>(value: T, count: i64) -> Result<Vec<T>> {
    let len = checked_len(u128::from(count.unsigned_abs()))?;
    let mut buf = try_with_capacity(len)?;
    buf.resize(len, value);
    Ok(buf)
}

/// Returns `|count|` copies of `value`.
///
/// The sign of `count` is ignored and a zero count gives an empty vector.
///
/// # Example
/// ```
/// use numseq::dup_i64;
///
/// assert_eq!(dup_i64(0, -2), [0, 0]);
/// assert!(dup_i64(42, 0).is_empty());
/// ```
///
/// # Panics
///
/// Panics, or aborts, when the sequence does not fit in memory. Use
/// [`try_dup_i64`] to handle that case.
pub fn dup_i64(value: i64, count: i64) -> Vec<i64> {
    infallible(try_dup_i64(value, count))
}

/// Fallible version of [`dup_i64`].
///
/// # Errors
///
/// Returns an error only if `|count|` elements do not fit in memory.
#[cfg_attr(feature = "tracing", instrument(level = "trace"))]
pub fn try_dup_i64(value: i64, count: i64) -> Result<Vec<i64>> {
    try_dup(value, count)
}

/// Returns `|count|` copies of `value`.
///
/// The sign of `count` is ignored and a zero count gives an empty vector.
///
/// # Panics
///
/// Panics, or aborts, when the sequence does not fit in memory. Use
/// [`try_dup_f64`] to handle that case.
pub fn dup_f64(value: f64, count: i64) -> Vec<f64> {
    infallible(try_dup_f64(value, count))
}

/// Fallible version of [`dup_f64`].
///
/// # Errors
///
/// Returns an error only if `|count|` elements do not fit in memory.
#[cfg_attr(feature = "tracing", instrument(level = "trace"))]
pub fn try_dup_f64(value: f64, count: i64) -> Result<Vec<f64>> {
    try_dup(value, count)
}
