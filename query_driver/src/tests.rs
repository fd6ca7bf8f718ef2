use std::io::Write;

use query_base::source_file::SourceFile;

use super::{load, render, Argument, Parser, DEMO_QUERY};

fn parse(arguments: &[&str]) -> Result<Argument, clap::Error> {
    Argument::try_parse_from(std::iter::once("query").chain(arguments.iter().copied()))
}

#[test]
fn parse_arguments() {
    let argument = parse(&["--expr", "true and x", "--dump-tokens"]).unwrap();

    assert_eq!(argument.file, None);
    assert_eq!(argument.expr.as_deref(), Some("true and x"));
    assert!(argument.dump_tokens);

    let argument = parse(&["query.txt"]).unwrap();

    assert_eq!(argument.file, Some("query.txt".into()));
    assert!(!argument.dump_tokens);
}

#[test]
fn file_conflicts_with_expression() {
    assert!(parse(&["query.txt", "-e", "x"]).is_err());
}

#[test]
fn load_demo_query() {
    let source_file = load(&parse(&[]).unwrap()).unwrap();

    assert_eq!(source_file.content(), DEMO_QUERY);
}

#[test]
fn load_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "(a or b)").unwrap();

    let argument = parse(&[file.path().to_str().unwrap()]).unwrap();
    let source_file = load(&argument).unwrap();

    assert_eq!(source_file.content(), "(a or b)");
    assert_eq!(source_file.full_path(), file.path());
}

#[test]
fn load_missing_file() {
    let argument = parse(&["/this/path/does/not/exist.query"]).unwrap();

    assert!(load(&argument).is_err());
}

#[test]
fn render_tokens() {
    let source_file = SourceFile::temp("true\n(12)").unwrap();
    let listing = render(&source_file, false);

    assert_eq!(
        listing.value(),
        concat!(
            "{      true | [[ 1: 1]-[ 1: 4]] | \"true\"}\n",
            "{    lparen | [[ 2: 1]-[ 2: 1]] | \"(\"}\n",
            "{    number | [[ 2: 2]-[ 2: 3]] | \"12\"}\n",
            "{    rparen | [[ 2: 4]-[ 2: 4]] | \")\"}\n",
        )
    );
}

#[test]
fn render_empty_query() {
    let source_file = SourceFile::temp(" \n\t").unwrap();

    assert_eq!(render(&source_file, false).value(), "");
}

#[test]
fn render_debug_dump() {
    let source_file = SourceFile::temp("x").unwrap();
    let listing = render(&source_file, true);

    assert!(listing.value().contains("Identifier"));
    assert!(listing.value().contains("\"x\""));
}

#[test]
fn render_error() {
    let source_file = SourceFile::temp("true and\n#").unwrap();
    let diagnostic = render(&source_file, false);

    assert!(diagnostic.has_error());
    assert!(diagnostic.error().contains("unknown literal `#` [2:1]"));
    assert!(diagnostic.error().contains("this character does not start any token"));
}
