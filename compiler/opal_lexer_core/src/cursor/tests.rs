use super::*;
use pretty_assertions::assert_eq;

#[test]
fn empty_source_is_immediately_eof() {
    let cursor = Cursor::new("");
    assert!(cursor.is_eof());
    assert_eq!(cursor.current(), 0);
    assert_eq!(cursor.peek(), 0);
}

#[test]
fn bump_advances_and_saturates() {
    let mut cursor = Cursor::new("ab");
    assert_eq!(cursor.current(), b'a');
    cursor.bump();
    assert_eq!(cursor.current(), b'b');
    cursor.bump();
    assert!(cursor.is_eof());
    cursor.bump();
    assert_eq!(cursor.pos(), 2, "bump past end must not move");
}

#[test]
fn peek_looks_one_ahead() {
    let cursor = Cursor::new("xy");
    assert_eq!(cursor.peek(), b'y');

    let mut at_last = Cursor::new("xy");
    at_last.bump();
    assert_eq!(at_last.peek(), 0, "peek at last byte sees the sentinel");
}

#[test]
fn bounded_truncates_the_source() {
    let mut cursor = Cursor::bounded("hello world", 5);
    assert_eq!(cursor.limit(), 5);
    for _ in 0..5 {
        assert!(!cursor.is_eof());
        cursor.bump();
    }
    assert!(cursor.is_eof());
    assert_eq!(cursor.current(), 0);
}

#[test]
fn bounded_clamps_oversized_limit() {
    let cursor = Cursor::bounded("abc", 99);
    assert_eq!(cursor.limit(), 3);
}

#[test]
fn seek_moves_to_absolute_position() {
    let mut cursor = Cursor::new("0123456789");
    cursor.seek(7);
    assert_eq!(cursor.pos(), 7);
    assert_eq!(cursor.current(), b'7');
}

#[test]
fn interior_null_is_not_eof() {
    let source = "a\0b";
    let mut cursor = Cursor::new(source);
    cursor.bump();
    assert!(cursor.at_interior_null());
    assert!(!cursor.is_eof());
    cursor.bump();
    assert_eq!(cursor.current(), b'b');
    cursor.bump();
    assert!(cursor.is_eof());
    assert!(!cursor.at_interior_null());
}

#[test]
fn skip_to_line_end_stops_at_newline() {
    let mut cursor = Cursor::new("// comment\nnext");
    cursor.skip_to_line_end();
    assert_eq!(cursor.current(), b'\n');
    assert_eq!(cursor.pos(), 10);
}

#[test]
fn skip_to_line_end_without_newline_hits_eof() {
    let mut cursor = Cursor::new("// trailing");
    cursor.skip_to_line_end();
    assert!(cursor.is_eof());
}

#[test]
fn skip_to_line_end_respects_the_limit() {
    let mut cursor = Cursor::bounded("abcdef\nrest", 4);
    cursor.skip_to_line_end();
    assert_eq!(cursor.pos(), 4);
    assert!(cursor.is_eof());
}
