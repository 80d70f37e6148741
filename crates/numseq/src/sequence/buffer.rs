use alloc::vec::Vec;
use core::alloc::Layout;

use crate::{Error, Result};

/// Narrows an exact element count to `usize`, failing when the platform
/// cannot address that many elements.
pub(crate) fn checked_len(len: u128) -> Result<usize> {
    usize::try_from(len).map_err(|_| Error::CapacityOverflow { requested: len })
}

/// Allocates an empty vector able to hold exactly `len` elements without
/// reallocating.
pub(crate) fn try_with_capacity<T>(len: usize) -> Result<Vec<T>> {
    let layout = Layout::array::<T>(len).map_err(|_| Error::CapacityOverflow {
        requested: len as u128,
    })?;
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_| Error::AllocFailed { layout })?;
    Ok(buf)
}

/// Unwraps the outcome of a `try_` operation for its infallible counterpart.
pub(crate) fn infallible<T>(res: Result<Vec<T>>) -> Vec<T> {
    match res {
        Ok(buf) => buf,
        Err(e) => e.raise(),
    }
}
