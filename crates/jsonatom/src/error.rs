use thiserror::Error;

/// Failure classification for a [`parse`](crate::parse) call.
///
/// Every error is reported synchronously at the point of failure; a failed
/// parse never yields a value, so callers cannot observe partially built
/// state.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The input was empty or contained only whitespace.
    #[error("expected a value")]
    ExpectValue,
    /// The lookahead character does not start a valid literal or number, a
    /// literal mismatched partway through, or the number grammar was violated.
    #[error("invalid value")]
    InvalidValue,
    /// A complete value was recognized but non-whitespace input remains
    /// after it.
    #[error("root not singular")]
    RootNotSingular,
}
