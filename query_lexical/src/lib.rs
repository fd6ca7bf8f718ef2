//! This crate implements the lexical analysis of the query language. This phase is responsible
//! for tokenizing the query text into a list of tokens.
//!
//! The final output of this phase is a list of [`token::Token`]s borrowing from the query text,
//! or the first [`error::Error`] encountered.

#![deny(
    missing_debug_implementations,
    missing_copy_implementations,
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    clippy::missing_errors_doc
)]
#![allow(clippy::missing_panics_doc, clippy::missing_const_for_fn)]

use query_base::expected::Expected;

pub mod error;
pub mod lexer;
pub mod token;

/// Tokenizes the given query text.
///
/// Shorthand for creating a [`lexer::Lexer`] and calling [`lexer::Lexer::lex`] on it.
#[must_use]
pub fn lex(source: &str) -> Expected<Vec<token::Token<'_>>, error::Error> {
    lexer::Lexer::new(source).lex()
}
