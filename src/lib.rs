//! A fixed-width 128-bit unsigned integer arithmetic kernel.
//!
//! The [`kernel`] module contains free functions over `(upper, lower)` pairs
//! of 64-bit words, while [`Wide128`] wraps such a pair into a small value type
//! with the same operations available as methods and operators.
//!
//! ```
//! use wide128::prelude::*;
//!
//! let (carry, upper, lower) = add(1, 20, 2, 40);
//! assert_eq!((carry, upper, lower), (0, 3, 60));
//!
//! let value = Wide128::widening_mul(u64::MAX, 10);
//! assert_eq!(value.quo_rem(10), Ok((Wide128::new(u64::MAX), 0)));
//! ```

macro_rules! ok {
    ($e:expr $(,)?) => {
        match $e {
            core::result::Result::Ok(val) => val,
            core::result::Result::Err(err) => return core::result::Result::Err(err),
        }
    };
}

pub use self::error::Error;
pub use self::wide::Wide128;

pub mod error;
pub mod kernel;
pub mod prelude;
pub mod wide;

#[cfg(feature = "arbitrary")]
pub mod arbitrary;
#[cfg(feature = "bigint")]
mod bigint;
#[cfg(feature = "serde")]
mod serde;

mod util;
