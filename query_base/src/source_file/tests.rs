use super::{SourceFile, SourcePosition, SourceRange};

#[test]
fn test_get_line_byte_positions() {
    let text = "true\nfalse\r\n\nor";
    let byte_positions = super::get_line_byte_positions(text);
    assert_eq!(byte_positions, vec![0..5, 5..12, 12..13, 13..15]);
}

#[test]
fn test_mapped_file() {
    const TEST_FILE: &str = "true and\n(false or x)";
    let source_file = SourceFile::temp(TEST_FILE).unwrap();

    assert_eq!(source_file.content(), TEST_FILE);
    assert_eq!(source_file.line_count(), 2);
    assert_eq!(source_file.get_line(1), Some("true and\n"));
    assert_eq!(source_file.get_line(2), Some("(false or x)"));
    assert_eq!(source_file.get_line(0), None);
    assert_eq!(source_file.get_line(3), None);
}

#[test]
fn test_empty_file() {
    let source_file = SourceFile::temp("").unwrap();

    assert_eq!(source_file.content(), "");
    assert_eq!(source_file.line_count(), 1);
    assert_eq!(source_file.get_line(1), Some(""));
}

#[test]
fn test_position_display() {
    assert_eq!(SourcePosition::new(1, 3).to_string(), "[ 1: 3]");
    assert_eq!(SourcePosition::new(12, 104).to_string(), "[12:104]");
}

#[test]
fn test_range_display() {
    let range = SourceRange::new(SourcePosition::new(1, 1), SourcePosition::new(1, 3));

    assert_eq!(range.to_string(), "[[ 1: 1]-[ 1: 3]]");
    assert!(!range.is_multiline());
    assert_eq!(
        SourceRange::single(SourcePosition::default()).to_string(),
        "[[ 1: 1]-[ 1: 1]]"
    );
}
