//! Is a module containing the [`Token`] type and all of its related types.

use std::{collections::HashMap, fmt::Display, str::FromStr};

use derive_new::new;
use getset::CopyGetters;
use lazy_static::lazy_static;
use query_base::source_file::SourceRange;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;
use thiserror::Error;

/// Is an enumeration representing the reserved words of the query language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter)]
#[allow(missing_docs)]
pub enum KeywordKind {
    And,
    Or,
    True,
    False,
}

/// Is an error that is returned when a string cannot be parsed into a [`KeywordKind`] in
/// [`FromStr`] trait implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Error)]
#[error("invalid string representation of keyword.")]
pub struct KeywordParseError;

impl FromStr for KeywordKind {
    type Err = KeywordParseError;

    /// Matches the exact, case-sensitive spelling of the keyword.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lazy_static! {
            static ref STRING_KEYWORD_MAP: HashMap<&'static str, KeywordKind> =
                KeywordKind::iter().map(|keyword| (keyword.as_str(), keyword)).collect();
        }
        STRING_KEYWORD_MAP.get(s).copied().ok_or(KeywordParseError)
    }
}

impl KeywordKind {
    /// Gets the string representation of the keyword as a `&str`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::And => "and",
            Self::Or => "or",
            Self::True => "true",
            Self::False => "false",
        }
    }
}

/// Is an enumeration of the classifications a lexeme can have.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, strum_macros::Display,
)]
#[strum(serialize_all = "lowercase")]
#[allow(missing_docs)]
pub enum TokenKind {
    And,
    Or,
    True,
    False,

    LParen,
    RParen,

    Number,
    Identifier,
}

impl From<KeywordKind> for TokenKind {
    fn from(keyword: KeywordKind) -> Self {
        match keyword {
            KeywordKind::And => Self::And,
            KeywordKind::Or => Self::Or,
            KeywordKind::True => Self::True,
            KeywordKind::False => Self::False,
        }
    }
}

/// Represents a classified lexeme of the query text.
///
/// The text is borrowed from the query text the token was produced from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, CopyGetters, new)]
pub struct Token<'a> {
    /// Gets the classification of the lexeme.
    #[get_copy = "pub"]
    kind: TokenKind,

    /// Gets the exact source text of the lexeme.
    #[get_copy = "pub"]
    text: &'a str,

    /// Gets the range of the lexeme in the query text.
    #[get_copy = "pub"]
    range: SourceRange,
}

impl<'a> Display for Token<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{{:>10} | {} | {:?}}}",
            self.kind.to_string(),
            self.range,
            self.text
        )
    }
}
