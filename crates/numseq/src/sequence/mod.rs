mod buffer;
mod dup;
mod float;
mod int;
mod interface;

pub use dup::*;
pub use float::*;
pub use int::*;
pub use interface::*;
