//! Provides the functions related to logging/printing messages to the console.

use std::fmt::Display;

use derive_new::new;
use formatting::{Color, Style};

use crate::source_file::{SourceFile, SourceRange};

pub mod formatting;

/// Represents the severity of a log message to be printed to the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum Severity {
    Error,
    Info,
    Warning,
}

/// Is a struct implementing [`Display`] that represents a log message to be displayed to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, new)]
pub struct Message<T> {
    /// The severity of the log message.
    pub severity: Severity,

    /// The message to be displayed.
    pub display: T,
}

impl<T: Display> Display for Message<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let log_header = Style::Bold.with(match self.severity {
            Severity::Error => Color::Red.with("[error]:"),
            Severity::Info => Color::Green.with("[info]:"),
            Severity::Warning => Color::Yellow.with("[warning]:"),
        });

        let message_part = Style::Bold.with(&self.display);

        write!(f, "{log_header} {message_part}")
    }
}

fn get_digit(mut number: usize) -> usize {
    let mut digit = 0;

    while number > 0 {
        number /= 10;
        digit += 1;
    }

    digit
}

/// Structure implementing [`Display`] that prints the lines of the source code covered by a
/// [`SourceRange`] and highlights the covered characters.
#[derive(Debug, Clone, Copy, new)]
pub struct SourceCodeDisplay<'a, T> {
    /// The source file the range points into.
    pub source_file: &'a SourceFile,

    /// The range of the source code to be highlighted.
    pub range: &'a SourceRange,

    /// The help message to be displayed.
    pub help_display: Option<T>,
}

impl<'a, T> SourceCodeDisplay<'a, T> {
    fn is_in_range(&self, line: usize, column: usize) -> bool {
        let start = self.range.start;
        let end = self.range.end;

        (line, column) >= (start.line, start.column) && (line, column) <= (end.line, end.column)
    }

    fn write_gutter(
        f: &mut std::fmt::Formatter<'_>,
        width: usize,
        line: Option<usize>,
        separator: &str,
    ) -> std::fmt::Result {
        match line {
            Some(line) => write!(
                f,
                "{}{:width$}{} ",
                Style::Bold.with(Color::Cyan.with(line)),
                "",
                Style::Bold.with(Color::Cyan.with(separator)),
                width = width - get_digit(line) + 1
            ),
            None => write!(
                f,
                "{:width$}{} ",
                "",
                Style::Bold.with(Color::Cyan.with(separator)),
                width = width + 1
            ),
        }
    }
}

impl<'a, T: Display> Display for SourceCodeDisplay<'a, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let start_line = self.range.start.line;
        let end_line = self.range.end.line.min(self.source_file.line_count());
        let largest_line_number_digits = get_digit(end_line.max(start_line));

        // prints the source location
        writeln!(
            f,
            "{:width$}{} {}",
            "",
            Style::Bold.with(Color::Cyan.with("-->")),
            format_args!(
                "{}:{}:{}",
                self.source_file.full_path().display(),
                self.range.start.line,
                self.range.start.column
            ),
            width = largest_line_number_digits
        )?;

        Self::write_gutter(f, largest_line_number_digits, None, "┃")?;
        writeln!(f)?;

        for line_number in start_line..=end_line {
            let Some(line) = self.source_file.get_line(line_number) else {
                break;
            };

            Self::write_gutter(f, largest_line_number_digits, Some(line_number), "┃")?;

            for (index, char) in line.chars().enumerate() {
                if char == '\n' || char == '\r' {
                    continue;
                }

                let shown = if char == '\t' { ' ' } else { char };

                if self.is_in_range(line_number, index + 1) {
                    write!(
                        f,
                        "{}",
                        Style::Underline.with(Style::Bold.with(Color::Red.with(shown)))
                    )?;
                } else {
                    write!(f, "{shown}")?;
                }
            }

            writeln!(f)?;
        }

        if let Some(help_display) = &self.help_display {
            Self::write_gutter(f, largest_line_number_digits, None, "=")?;
            writeln!(f, "{}: {help_display}", Style::Bold.with("help"))?;
        }

        Ok(())
    }
}
