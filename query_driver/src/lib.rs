//! Drives the lexer from the command line: loads the query, tokenizes it and prints either the
//! tokens or the diagnostic.

#![deny(
    missing_docs,
    missing_debug_implementations,
    clippy::all,
    rustdoc::broken_intra_doc_links
)]

use std::{fmt::Write, fs::File, path::PathBuf, process::ExitCode};

pub use clap::Parser;
use query_base::{
    expected::Expected,
    log::{Message, Severity, SourceCodeDisplay},
    source_file::{self, SourceFile},
};
use query_lexical::{error::Error, token::Token};

/// The query tokenized when neither a file nor an expression is given.
pub const DEMO_QUERY: &str = "true some_thing 123 and 4 false 23 or (\ntrue or((())) true false )";

/// The arguments to the program.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, clap::Parser)]
#[clap(
    name = "query",
    about = "Tokenizes boolean queries and prints the tokens.",
    author = "66011245@kmitl.ac.th"
)]
pub struct Argument {
    /// The input file containing the query to tokenize.
    #[clap(conflicts_with = "expr")]
    pub file: Option<PathBuf>,

    /// Tokenizes the given query text instead of a file.
    #[clap(short, long)]
    pub expr: Option<String>,

    /// Prints out the debug representation of the tokens.
    #[clap(long = "dump-tokens")]
    pub dump_tokens: bool,
}

/// Loads the query selected by the arguments: the file, the expression, or [`DEMO_QUERY`].
///
/// # Errors
/// Any [`source_file::Error`] raised while opening, writing or mapping the query.
pub fn load(argument: &Argument) -> Result<SourceFile, source_file::Error> {
    match (&argument.file, &argument.expr) {
        (Some(path), _) => SourceFile::load(File::open(path)?, path.clone()),
        (None, Some(expr)) => SourceFile::temp(expr),
        (None, None) => SourceFile::temp(DEMO_QUERY),
    }
}

fn format_tokens(tokens: &[Token], dump_tokens: bool) -> String {
    if dump_tokens {
        return format!("{tokens:#?}\n");
    }

    tokens.iter().fold(String::new(), |mut listing, token| {
        // writing into a `String` cannot fail
        let _ = writeln!(listing, "{token}");
        listing
    })
}

fn format_error(source_file: &SourceFile, error: &Error) -> String {
    let range = error.range();

    format!(
        "{}\n{}",
        Message::new(Severity::Error, error),
        SourceCodeDisplay::new(
            source_file,
            &range,
            Some("this character does not start any token")
        )
    )
}

/// Tokenizes the content of the source file.
///
/// Returns the printable token listing, one token per line (or the debug dump when
/// `dump_tokens` is set), or the rendered diagnostic of the lexical error.
#[must_use]
pub fn render(source_file: &SourceFile, dump_tokens: bool) -> Expected<String, String> {
    match query_lexical::lex(source_file.content())
        .transform(|tokens| format_tokens(&tokens, dump_tokens))
    {
        Expected::Value(listing) => Expected::Value(listing),
        Expected::Error(error) => Expected::Error(format_error(source_file, &error)),
    }
}

/// Runs the program with the given arguments.
#[must_use]
pub fn run(argument: &Argument) -> ExitCode {
    let source_file = match load(argument) {
        Ok(source_file) => source_file,
        Err(error) => {
            let origin = argument
                .file
                .as_ref()
                .map_or_else(|| "<query>".to_string(), |path| path.display().to_string());

            eprintln!(
                "{}",
                Message::new(Severity::Error, format!("{origin}: {error}"))
            );
            return ExitCode::FAILURE;
        }
    };

    match render(&source_file, argument.dump_tokens) {
        Expected::Value(listing) => {
            print!("{listing}");
            ExitCode::SUCCESS
        }
        Expected::Error(diagnostic) => {
            eprint!("{diagnostic}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests;
