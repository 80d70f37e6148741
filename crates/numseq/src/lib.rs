//! Explicit arithmetic progressions over `i64` and `f64`.
//!
//! Every operation is a pure function that returns a freshly allocated,
//! pre-sized [`Vec`]. There are no invalid inputs: a zero step, a zero count
//! or equal bounds all produce a well defined (possibly empty) sequence. The
//! only thing that can go wrong is running out of memory, which the `try_`
//! variants report as an [`Error`].
//!
//! ```
//! use numseq::{range_by_count_i64, range_f64, range_i64};
//!
//! assert_eq!(range_i64(1, -1, 1), [1, 0, -1]);
//! assert_eq!(range_by_count_i64(1, 3, 7), [1, 1, 2, 2, 2, 3, 3]);
//!
//! let r = range_f64(0.0, 1.0, 0.1);
//! assert_eq!(r.first(), Some(&0.0));
//! assert_eq!(r.last(), Some(&1.0));
//! ```
#![cfg_attr(not(test), no_std)]

extern crate alloc;

mod error;
mod progression;
mod sequence;

pub use crate::error::*;
pub use crate::progression::*;
pub use crate::sequence::*;
