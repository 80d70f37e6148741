use core::{alloc::Layout, fmt};

/// A result type defaulting to this crate's [`Error`].
///
/// Only the `try_` entry points return it. Their infallible counterparts
/// treat an error the same way [`alloc::vec::Vec::with_capacity`] does.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All error variants that `numseq` can emit.
///
/// No combination of bounds, step or count is an error. Both variants describe
/// a sequence that is too large to hold in memory.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Error {
    /// The number of elements cannot be addressed on this platform for the
    /// element type.
    CapacityOverflow {
        /// The exact number of elements the operation would have produced.
        requested: u128,
    },

    /// The allocator could not satisfy the request.
    AllocFailed {
        /// The layout that was requested from the allocator.
        layout: Layout,
    },
}

impl Error {
    /// Reports the error the way the standard collections do, by panicking on
    /// capacity overflow or calling the global allocation error handler.
    pub(crate) fn raise(self) -> ! {
        match self {
            Self::CapacityOverflow { .. } => panic!("capacity overflow"),
            Self::AllocFailed { layout } => alloc::alloc::handle_alloc_error(layout),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::CapacityOverflow { requested } => {
                write!(fmt, "capacity overflow: {requested} elements requested")
            }
            Self::AllocFailed { layout } => {
                write!(fmt, "memory allocation of {} bytes failed", layout.size())
            }
        }
    }
}

impl core::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_capacity_overflow() {
        let err = Error::CapacityOverflow {
            requested: 1 << 64,
        };
        assert_eq!(
            err.to_string(),
            "capacity overflow: 18446744073709551616 elements requested"
        );
    }

    #[test]
    fn display_alloc_failed() {
        let layout = Layout::array::<i64>(4).unwrap();
        let err = Error::AllocFailed { layout };
        assert_eq!(err.to_string(), "memory allocation of 32 bytes failed");
    }

    #[test]
    #[should_panic(expected = "capacity overflow")]
    fn raise_capacity_overflow_panics() {
        Error::CapacityOverflow { requested: 3 }.raise();
    }
}
