#![allow(clippy::future_not_send)]

//! Contains the code related to the source code input and to locating text within it.

use std::{
    fmt::{self, Debug},
    fs::File,
    ops::Range,
    path::PathBuf,
};

use derive_new::new;
use getset::Getters;
use memmap::MmapOptions;
use ouroboros::self_referencing;
use thiserror::Error;

/// Represents an error that occurs when loading/creating a source file.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum Error {
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    Utf8Error(#[from] std::str::Utf8Error),
}

/// Is a struct pointing to a particular character in the source text.
///
/// Displays as `[LL:CC]` with both numbers padded to two columns.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display, new,
)]
#[display(fmt = "[{:>2}:{:>2}]", line, column)]
pub struct SourcePosition {
    /// The line number of the position (starts at 1).
    pub line: usize,

    /// The column number of the position (starts at 1).
    pub column: usize,
}

impl Default for SourcePosition {
    fn default() -> Self { Self { line: 1, column: 1 } }
}

/// Represents an inclusive range of characters in the source text.
///
/// The `end` is the position of the last character covered by the range, so a single character
/// range has `start == end`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, derive_more::Display, new,
)]
#[display(fmt = "[{}-{}]", start, end)]
pub struct SourceRange {
    /// The position of the first character.
    pub start: SourcePosition,

    /// The position of the last character.
    pub end: SourcePosition,
}

impl SourceRange {
    /// Creates a range covering the single character at the given position.
    #[must_use]
    pub fn single(position: SourcePosition) -> Self {
        Self {
            start: position,
            end: position,
        }
    }

    /// Returns `true` if the range starts and ends on different lines.
    #[must_use]
    pub fn is_multiline(&self) -> bool { self.start.line != self.end.line }
}

/// Represents an source file input for the lexer.
#[derive(Getters)]
pub struct SourceFile {
    source: MappedSource,

    /// Gets the full path to the source file.
    #[get = "pub"]
    full_path: PathBuf,

    lines: Vec<Range<usize>>,
}

impl Debug for SourceFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceFile")
            .field("full_path", &self.full_path)
            .field("lines", &self.lines)
            .finish()
    }
}

#[self_referencing]
struct MappedSource {
    file: File,
    mapped: Option<memmap::Mmap>,

    #[borrows(mapped)]
    mapped_str: &'this str,
}

impl MappedSource {
    fn create(file: File) -> Result<Self, Error> {
        // mapping a zero-length file is an error on most platforms
        let mapped = if file.metadata()?.len() == 0 {
            None
        } else {
            Some(unsafe { MmapOptions::new().map(&file)? })
        };

        MappedSourceTryBuilder {
            file,
            mapped,
            mapped_str_builder: |mapped| {
                mapped
                    .as_ref()
                    .map_or(Ok(""), |mapped| std::str::from_utf8(mapped).map_err(Error::from))
            },
        }
        .try_build()
    }

    fn content(&self) -> &str { self.borrow_mapped_str() }
}

impl SourceFile {
    fn new(full_path: PathBuf, source: MappedSource) -> Self {
        let lines = get_line_byte_positions(source.content());
        Self {
            source,
            full_path,
            lines,
        }
    }

    /// Gets the content of the source file.
    #[must_use]
    pub fn content(&self) -> &str { self.source.content() }

    /// Gets the line of the source file at the given line number, including its terminator.
    ///
    /// The line number starts at 1.
    #[must_use]
    pub fn get_line(&self, line: usize) -> Option<&str> {
        let range = self.lines.get(line.checked_sub(1)?)?;
        Some(&self.content()[range.clone()])
    }

    /// Gets the number of lines in the source file.
    #[must_use]
    pub fn line_count(&self) -> usize { self.lines.len() }

    /// Loads the source file from the given file path.
    ///
    /// # Errors
    /// - [`Error::IoError`]: Error occurred when mapping the file to memory.
    /// - [`Error::Utf8Error`]: Error occurred when converting the mapped bytes to a string.
    pub fn load(file: File, path: PathBuf) -> Result<Self, Error> {
        let source = MappedSource::create(file)?;
        Ok(Self::new(path, source))
    }

    /// Creates a temporary source file and writes the given displayable object to it.
    ///
    /// # Errors
    /// - [`Error::IoError`]: Error occurred when creating the temporary file, writing to, and
    ///   mapping it to memory.
    /// - [`Error::Utf8Error`]: Error occurred when converting the mapped bytes to a string.
    pub fn temp(display: impl fmt::Display) -> Result<Self, Error> {
        use std::io::Write;

        let mut tempfile = tempfile::Builder::new()
            .prefix("query")
            .suffix(".query")
            .tempfile()?;

        write!(tempfile.as_file_mut(), "{display}")?;
        let path = tempfile.path().to_owned();

        Self::load(tempfile.into_file(), path)
    }
}

fn get_line_byte_positions(text: &str) -> Vec<Range<usize>> {
    let mut current_position = 0;
    let mut results = Vec::new();

    for (byte, char) in text.char_indices() {
        // only lf starts a new line, matching how the lexer counts lines
        if char == '\n' {
            #[allow(clippy::range_plus_one)]
            results.push(current_position..byte + 1);

            current_position = byte + 1;
        }
    }

    results.push(current_position..text.len());

    results
}

#[cfg(test)]
mod tests;
