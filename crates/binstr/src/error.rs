//! Recoverable tokenizer errors.

use thiserror::Error;

/// Why [`split_args`](crate::split_args) rejected its input.
///
/// These are the recoverable parse failures of the argument grammar; the
/// whole call fails and no partial token array is produced. Offsets are
/// byte positions into the input line.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SplitArgsError {
    /// A quoted span was still open at end of input.
    #[error("unterminated quote at byte {offset}")]
    UnterminatedQuote {
        /// Byte position where the input ended.
        offset: usize,
    },
    /// A backslash escape inside double quotes was not one of the
    /// recognized forms (or a `\x` was not followed by two hex digits).
    #[error("invalid escape sequence at byte {offset}")]
    InvalidEscape {
        /// Byte position of the backslash.
        offset: usize,
    },
    /// A closing quote was followed by something other than whitespace or
    /// end of input.
    #[error("closing quote must be followed by whitespace at byte {offset}")]
    TrailingGarbage {
        /// Byte position of the offending character.
        offset: usize,
    },
}
