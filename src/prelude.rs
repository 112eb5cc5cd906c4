//! The `wide128` prelude.
//!
//! This brings into scope the integer type, the kernel functions and the error type.

pub use crate::error::Error;
pub use crate::kernel::{add, lsh, lsh1, mul, quo_rem, rsh, rsh1, sub, twos_complement};
pub use crate::wide::Wide128;
