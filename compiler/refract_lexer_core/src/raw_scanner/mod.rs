//! Raw scanner producing `(RawTag, len)` pairs.
//!
//! The scanner never fails: malformed input becomes an error tag with a
//! positive length, so the token lengths always sum to the source length.

use crate::cursor::Cursor;
use crate::tag::{RawTag, RawToken};

/// Allocation-free scanner over a [`Cursor`].
pub struct RawScanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> RawScanner<'a> {
    pub fn new(cursor: Cursor<'a>) -> Self {
        RawScanner { cursor }
    }

    /// Byte offset of the next token.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.cursor.pos()
    }

    /// Source text in `start..end`.
    #[inline]
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        self.cursor.slice(start, end)
    }

    /// Produce the next raw token.
    ///
    /// Returns `Eof` with `len == 0` once the source is exhausted, and keeps
    /// returning it.
    pub fn next_token(&mut self) -> RawToken {
        let start = self.cursor.pos();
        match self.cursor.current() {
            0 => self.eof(start),
            b' ' | b'\t' => self.whitespace(start),
            b'\n' => self.single(start, RawTag::Newline),
            b'\r' => self.carriage_return(start),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.identifier(start),
            b'0'..=b'9' => self.number(start),
            b'"' => self.string(start),
            b'/' => self.slash_or_comment(start),
            b'+' => self.plus(start),
            b'(' => self.single(start, RawTag::LeftParen),
            b')' => self.single(start, RawTag::RightParen),
            b'{' => self.single(start, RawTag::LeftBrace),
            b'}' => self.single(start, RawTag::RightBrace),
            b':' => self.single(start, RawTag::Colon),
            b';' => self.single(start, RawTag::Semicolon),
            b'.' => self.single(start, RawTag::Dot),
            b'=' => self.single(start, RawTag::Equal),
            0x80..=0xFF if self.at_unicode_ident_start() => self.identifier(start),
            _ => self.invalid(start),
        }
    }

    #[inline]
    fn token(&self, tag: RawTag, start: u32) -> RawToken {
        RawToken {
            tag,
            len: self.cursor.pos() - start,
        }
    }

    fn eof(&mut self, start: u32) -> RawToken {
        if self.cursor.is_eof() {
            return self.token(RawTag::Eof, start);
        }
        self.cursor.advance();
        self.token(RawTag::InteriorNull, start)
    }

    #[inline]
    fn single(&mut self, start: u32, tag: RawTag) -> RawToken {
        self.cursor.advance();
        self.token(tag, start)
    }

    fn whitespace(&mut self, start: u32) -> RawToken {
        self.cursor.eat_while(|b| b == b' ' || b == b'\t');
        self.token(RawTag::Whitespace, start)
    }

    fn carriage_return(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        if self.cursor.current() == b'\n' {
            self.cursor.advance();
        }
        self.token(RawTag::Newline, start)
    }

    fn at_unicode_ident_start(&self) -> bool {
        self.cursor
            .current_char()
            .is_some_and(unicode_ident::is_xid_start)
    }

    /// Identifiers follow Rust's rules: XID start (or `_`) then XID continue.
    fn identifier(&mut self, start: u32) -> RawToken {
        loop {
            self.cursor
                .eat_while(|b| b.is_ascii_alphanumeric() || b == b'_');
            if self.cursor.current() < 0x80 {
                break;
            }
            match self.cursor.current_char() {
                Some(c) if unicode_ident::is_xid_continue(c) => self.cursor.advance_char(),
                _ => break,
            }
        }
        self.token(RawTag::Ident, start)
    }

    fn number(&mut self, start: u32) -> RawToken {
        self.cursor.eat_while(|b| b.is_ascii_digit());
        self.token(RawTag::Int, start)
    }

    fn string(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        loop {
            match self.cursor.skip_to_string_delim() {
                b'"' => {
                    self.cursor.advance();
                    return self.token(RawTag::String, start);
                }
                b'\\' => {
                    self.cursor.advance();
                    match self.cursor.current() {
                        // Leave line breaks to end the literal.
                        b'\n' | b'\r' => {}
                        _ if self.cursor.is_eof() => {}
                        _ => self.cursor.advance_char(),
                    }
                }
                // Line break or EOF.
                _ => return self.token(RawTag::UnterminatedString, start),
            }
        }
    }

    fn slash_or_comment(&mut self, start: u32) -> RawToken {
        if self.cursor.peek() == b'/' {
            self.cursor.eat_until_newline_or_eof();
            return self.token(RawTag::LineComment, start);
        }
        self.single(start, RawTag::Slash)
    }

    fn plus(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        if self.cursor.current() == b'=' {
            self.cursor.advance();
            return self.token(RawTag::PlusEqual, start);
        }
        self.token(RawTag::Plus, start)
    }

    fn invalid(&mut self, start: u32) -> RawToken {
        self.cursor.advance_char();
        self.token(RawTag::InvalidByte, start)
    }
}

impl Iterator for RawScanner<'_> {
    type Item = RawToken;

    /// Yields every token up to, but excluding, `Eof`.
    fn next(&mut self) -> Option<RawToken> {
        let token = self.next_token();
        (token.tag != RawTag::Eof).then_some(token)
    }
}
