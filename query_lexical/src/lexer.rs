//! Contains the [`Lexer`] which turns query text into [`Token`]s.

use std::str::FromStr;

use query_base::{
    expected::Expected,
    source_file::{SourcePosition, SourceRange},
};

use crate::{
    error::Error,
    token::{KeywordKind, Token, TokenKind},
};

/// The read position of a [`Lexer`] in the query text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct Cursor {
    /// Byte index of the next character to read.
    index: usize,

    /// Position of the next character to read.
    position: SourcePosition,
}

/// Scans query text from left to right, producing tokens or stopping at the first error.
///
/// [`Lexer::lex`] takes the lexer by value, so each scan owns its cursor.
#[derive(Debug, Clone)]
#[allow(missing_copy_implementations)]
pub struct Lexer<'a> {
    source: &'a str,
    cursor: Cursor,
}

fn is_number_character(character: char) -> bool { character.is_ascii_digit() }

fn is_keyword_character(character: char) -> bool {
    character == '_' || character == '-' || character.is_ascii_alphabetic()
}

fn is_number_or_keyword_character(character: char) -> bool {
    is_number_character(character) || is_keyword_character(character)
}

impl<'a> Lexer<'a> {
    /// Creates a lexer positioned at the first character of the given query text.
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            cursor: Cursor::default(),
        }
    }

    /// Tokenizes the whole query text.
    ///
    /// Whitespace (space, tab, carriage return and line feed) separates tokens and is not part
    /// of the output. The first character that starts no lexeme stops the scan, and the tokens
    /// collected before it are discarded.
    #[must_use]
    pub fn lex(mut self) -> Expected<Vec<Token<'a>>, Error> { self.lex_tokens().into() }

    fn lex_tokens(&mut self) -> Result<Vec<Token<'a>>, Error> {
        let mut tokens = Vec::new();

        while let Some(character) = self.current() {
            match character {
                ' ' | '\t' | '\r' | '\n' => {
                    self.advance();
                }
                '(' => tokens.push(self.lex_single(TokenKind::LParen)),
                ')' => tokens.push(self.lex_single(TokenKind::RParen)),
                character => tokens.push(self.lex_other(character)?),
            }
        }

        Ok(tokens)
    }

    fn lex_single(&mut self, kind: TokenKind) -> Token<'a> {
        let start = self.cursor;
        self.advance();

        let source = self.source;
        Token::new(
            kind,
            &source[start.index..self.cursor.index],
            SourceRange::single(start.position),
        )
    }

    fn lex_other(&mut self, character: char) -> Result<Token<'a>, Error> {
        if is_number_character(character) {
            Ok(self.lex_number())
        } else if is_keyword_character(character) {
            Ok(self.lex_keyword_or_identifier())
        } else {
            Err(Error::unknown_literal(character, self.cursor.position))
        }
    }

    fn lex_number(&mut self) -> Token<'a> {
        let (text, range) = self.walk(is_number_character);
        Token::new(TokenKind::Number, text, range)
    }

    fn lex_keyword_or_identifier(&mut self) -> Token<'a> {
        let (text, range) = self.walk(is_number_or_keyword_character);

        // keywords are identifier-shaped runs with a reserved spelling
        let kind = KeywordKind::from_str(text).map_or(TokenKind::Identifier, TokenKind::from);

        Token::new(kind, text, range)
    }

    /// Consumes characters while the predicate holds and returns the consumed text along with
    /// the range from the first to the last consumed character.
    fn walk(&mut self, predicate: impl Fn(char) -> bool) -> (&'a str, SourceRange) {
        let start = self.cursor;
        let mut end = start.position;

        while let Some(character) = self.current() {
            if !predicate(character) {
                break;
            }

            end = self.cursor.position;
            self.advance();
        }

        let source = self.source;
        (
            &source[start.index..self.cursor.index],
            SourceRange::new(start.position, end),
        )
    }

    fn is_at_end(&self) -> bool { self.cursor.index >= self.source.len() }

    /// Gets the character under the cursor, or [`None`] past the end of the query text.
    fn current(&self) -> Option<char> {
        if self.is_at_end() {
            return None;
        }

        self.source[self.cursor.index..].chars().next()
    }

    /// Moves the cursor past the current character.
    ///
    /// The character following a line feed is reported at the start of the next line.
    fn advance(&mut self) -> Option<char> {
        let character = self.current()?;

        self.cursor.index += character.len_utf8();

        if character == '\n' {
            self.cursor.position.line += 1;
            self.cursor.position.column = 1;
        } else {
            self.cursor.position.column += 1;
        }

        Some(character)
    }
}
