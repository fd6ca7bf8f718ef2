//! Contains the lexical error that stops the tokenization of the query text.

use getset::{CopyGetters, Getters};
use query_base::source_file::{SourcePosition, SourceRange};

/// Is an enumeration of the reasons the tokenization can stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorKind {
    /// The input ended in the middle of a lexeme.
    ///
    /// Every lexeme of the current grammar is complete after a single character, so the lexer
    /// never produces this kind. It is reserved for lexemes that need a terminator.
    UnexpectedEndOfInput,

    /// A character that starts no valid lexeme was found.
    UnknownToken,
}

/// The first lexical error found in the query text.
///
/// Displays as its diagnostic message, which is self-contained and includes the position.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Getters, CopyGetters, thiserror::Error,
)]
#[error("{message}")]
pub struct Error {
    /// Gets the reason the tokenization stopped.
    #[get_copy = "pub"]
    kind: ErrorKind,

    /// Gets the range of the offending text.
    #[get_copy = "pub"]
    range: SourceRange,

    /// Gets the human readable diagnostic message.
    #[get = "pub"]
    message: String,
}

impl Error {
    /// Creates an [`ErrorKind::UnknownToken`] error for the character found at the given position.
    #[must_use]
    pub fn unknown_literal(literal: char, position: SourcePosition) -> Self {
        Self {
            kind: ErrorKind::UnknownToken,
            range: SourceRange::single(position),
            message: format!(
                "unknown literal `{literal}` [{}:{}]",
                position.line, position.column
            ),
        }
    }
}
