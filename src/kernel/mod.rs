//! Arithmetic over 128-bit integers given as pairs of 64-bit words.
//!
//! Every value is passed as `(upper, lower)` with a logical value of
//! `upper * 2^64 + lower`. All functions are pure and never allocate.
//!
//! Overflow is never an error here: [`add`] and [`lsh`] report the bits
//! which did not fit via an explicit carry, [`sub`] wraps around silently
//! and only [`quo_rem`] can fail (on a zero divisor).

pub use self::add::{add, sub, twos_complement};
pub use self::div::quo_rem;
pub use self::mul::mul;
pub use self::shift::{lsh, lsh1, rsh, rsh1};

mod add;
mod div;
mod mul;
mod shift;
