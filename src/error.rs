//! Common error types.

/// Error type for integer arithmetic related errors.
#[derive(Debug, Clone, Copy, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    /// Tried to divide by zero.
    #[error("attempt to divide by zero")]
    DivisionByZero,
    /// Underlying integer type does not fit into the target type.
    #[error("underlying integer is too large to fit in target type")]
    IntOverflow,
}

/// Error type for parsing a hex representation of a 128-bit integer.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ParseWideError {
    /// Failed to parse hex encoded bytes.
    #[error("invalid hex string")]
    InvalidHex(#[from] hex::FromHexError),
    /// Error for an unexpected string length.
    #[error("expected string of 32 hex chars")]
    UnexpectedStringLength,
}
