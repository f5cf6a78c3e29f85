//! Raw token tags.

/// Kind of a raw token.
///
/// Discriminants are grouped by category: literals `0..16`, punctuation
/// `32..64`, trivia `112..`, errors `240..`, and `Eof` at 255.
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum RawTag {
    // Identifiers & literals
    /// Identifier or keyword; keywords are resolved when cooking.
    Ident = 0,
    /// Run of ASCII digits. Not part of the grammar; lets the parser report
    /// a number where an identifier was expected.
    Int = 1,
    /// Double-quoted string, quotes included. Escapes are not validated.
    String = 2,

    // Punctuation
    LeftParen = 32,
    RightParen = 33,
    LeftBrace = 34,
    RightBrace = 35,
    Colon = 36,
    Semicolon = 37,
    Dot = 38,
    Equal = 39,
    Plus = 40,
    PlusEqual = 41,
    Slash = 42,

    // Trivia
    Whitespace = 112,
    Newline = 113,
    LineComment = 114,

    // Errors
    /// A byte (or non-ASCII character) that starts no token.
    InvalidByte = 240,
    /// String literal that hit a newline or EOF before its closing quote.
    UnterminatedString = 241,
    InteriorNull = 242,

    Eof = 255,
}

impl RawTag {
    /// Fixed source text of punctuation tags.
    pub fn lexeme(self) -> Option<&'static str> {
        Some(match self {
            RawTag::LeftParen => "(",
            RawTag::RightParen => ")",
            RawTag::LeftBrace => "{",
            RawTag::RightBrace => "}",
            RawTag::Colon => ":",
            RawTag::Semicolon => ";",
            RawTag::Dot => ".",
            RawTag::Equal => "=",
            RawTag::Plus => "+",
            RawTag::PlusEqual => "+=",
            RawTag::Slash => "/",
            _ => return None,
        })
    }

    /// Whitespace, newlines and comments.
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            RawTag::Whitespace | RawTag::Newline | RawTag::LineComment
        )
    }

    #[inline]
    pub fn is_error(self) -> bool {
        (self as u8) >= 240 && self != RawTag::Eof
    }
}

/// A scanned token: its tag and its length in bytes.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct RawToken {
    pub tag: RawTag,
    pub len: u32,
}
