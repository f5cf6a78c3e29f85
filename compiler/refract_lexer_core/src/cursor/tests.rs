use crate::SourceBuffer;

#[test]
fn current_and_peek() {
    let buf = SourceBuffer::new("+=");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.current(), b'+');
    assert_eq!(cursor.peek(), b'=');
    cursor.advance_n(2);
    assert!(cursor.is_eof());
    assert_eq!(cursor.current(), 0);
}

#[test]
fn interior_null_is_not_eof() {
    let buf = SourceBuffer::new("a\0b");
    let mut cursor = buf.cursor();
    cursor.advance();
    assert_eq!(cursor.current(), 0);
    assert!(!cursor.is_eof());
}

#[test]
fn eat_while_stops_at_sentinel() {
    let buf = SourceBuffer::new("result");
    let mut cursor = buf.cursor();
    cursor.eat_while(|b| b.is_ascii_alphanumeric());
    assert_eq!(cursor.pos(), 6);
    assert_eq!(cursor.slice_from(0), "result");
}

#[test]
fn advance_char_skips_whole_code_point() {
    let buf = SourceBuffer::new("ñx");
    let mut cursor = buf.cursor();
    cursor.advance_char();
    assert_eq!(cursor.pos(), 2);
    assert_eq!(cursor.current(), b'x');
}

#[test]
fn current_char_decodes_whole_code_point() {
    let buf = SourceBuffer::new("名x");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.current_char(), Some('名'));
    cursor.advance_char();
    assert_eq!(cursor.current_char(), Some('x'));
    cursor.advance_char();
    assert_eq!(cursor.current_char(), None);
}

#[test]
fn eat_until_newline() {
    let buf = SourceBuffer::new("// note\nlet");
    let mut cursor = buf.cursor();
    cursor.eat_until_newline_or_eof();
    assert_eq!(cursor.pos(), 7);
    assert_eq!(cursor.current(), b'\n');

    let buf = SourceBuffer::new("// trailing");
    let mut cursor = buf.cursor();
    cursor.eat_until_newline_or_eof();
    assert!(cursor.is_eof());
}

#[test]
fn skip_to_string_delim_finds_earliest() {
    let buf = SourceBuffer::new("abc\\\"def\"");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.skip_to_string_delim(), b'\\');
    assert_eq!(cursor.pos(), 3);

    let buf = SourceBuffer::new("ab\r\n\"");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.skip_to_string_delim(), b'\r');

    let buf = SourceBuffer::new("no delimiter");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.skip_to_string_delim(), 0);
    assert!(cursor.is_eof());
}

#[test]
fn slice_outside_char_boundary_is_empty() {
    let buf = SourceBuffer::new("ñ");
    let cursor = buf.cursor();
    assert_eq!(cursor.slice(0, 1), "");
    assert_eq!(cursor.slice(0, 2), "ñ");
    assert_eq!(cursor.source_len(), 2);
}
