use super::{Location, SourceFile, Span};

#[test]
fn test_get_line_byte_positions() {
    let text = "Hello\nworld\r\n!\rtes";
    let byte_positions = super::get_line_byte_positions(text);
    assert_eq!(byte_positions, vec![0..6, 6..13, 13..18]);

    // a trailing newline opens an empty last line
    let byte_positions = super::get_line_byte_positions("a\n");
    assert_eq!(byte_positions, vec![0..2, 2..2]);
}

#[test]
fn test_mapped_file() {
    const TEST_FILE: &str = "print('test file')\n";
    let source_file = SourceFile::temp(TEST_FILE).unwrap();
    assert_eq!(source_file.content(), TEST_FILE);
}

#[test]
fn test_empty_mapped_file() {
    let source_file = SourceFile::temp("").unwrap();
    assert_eq!(source_file.content(), "");
    assert_eq!(source_file.line_count(), 1);
}

#[test]
fn test_get_line() {
    let source_file = SourceFile::in_memory("lines.py", "ab\ncd\n");
    assert_eq!(source_file.get_line(0), None);
    assert_eq!(source_file.get_line(1), Some("ab"));
    assert_eq!(source_file.get_line(2), Some("cd"));
    assert_eq!(source_file.get_line(3), Some(""));
    assert_eq!(source_file.get_line(4), None);
}

#[test]
fn test_get_location() {
    let source_file = SourceFile::in_memory("location.py", "ab\ncd");

    let location = |line, column| Some(Location { line, column });

    assert_eq!(source_file.get_location(0), location(1, 1));
    assert_eq!(source_file.get_location(2), location(1, 3));
    assert_eq!(source_file.get_location(3), location(2, 1));
    assert_eq!(source_file.get_location(5), location(2, 3));
    assert_eq!(source_file.get_location(6), None);
}

#[test]
fn test_location_after_trailing_newline() {
    let source_file = SourceFile::in_memory("trailing.py", "x\n");
    assert_eq!(
        source_file.get_location(2),
        Some(Location { line: 2, column: 1 })
    );
}

#[test]
fn test_span() {
    let source_file = SourceFile::in_memory("span.py", "x = 'é'\ny");

    let span = Span::new(source_file.clone(), 4, 8).unwrap();
    assert_eq!(span.str(), "'é'");
    assert_eq!(span.start_location(), Location { line: 1, column: 5 });
    assert_eq!(span.end_location(), Location { line: 1, column: 8 });

    // splits the two-byte character
    assert!(Span::new(source_file.clone(), 4, 6).is_none());
    assert!(Span::new(source_file.clone(), 3, 2).is_none());
    assert!(Span::new(source_file.clone(), 0, 100).is_none());

    let end = source_file.content().len();
    assert!(Span::new(source_file, end, end).unwrap().is_empty());
}

#[test]
fn test_location_display() {
    assert_eq!(Location { line: 3, column: 14 }.to_string(), "3:14");
}
