//! Cooking layer: raw tokens to spanned tokens.
//!
//! Drops trivia, resolves keywords, unescapes string literals, and turns
//! raw error tags into diagnostics. Lexing never stops early; every problem
//! is reported and scanning continues.

use std::borrow::Cow;
use std::fmt;

use refract_diagnostic::{Diagnostic, ErrorCode};
use refract_ir::Span;
use refract_lexer_core::{RawScanner, RawTag, SourceBuffer};

/// Kind of a cooked token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenKind<'src> {
    // Keywords
    Analyzer,
    Let,
    Return,

    Ident(&'src str),
    /// String literal, unescaped.
    Str(Cow<'src, str>),
    /// Digits; never valid, kept so the parser can name what it found.
    Int(&'src str),

    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Colon,
    Semicolon,
    Dot,
    Equal,
    PlusEqual,
    Plus,
    Slash,

    Eof,
}

impl fmt::Display for TokenKind<'_> {
    /// How the token is named in diagnostics.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Analyzer => f.write_str("`analyzer`"),
            TokenKind::Let => f.write_str("`let`"),
            TokenKind::Return => f.write_str("`return`"),
            TokenKind::Ident(name) => write!(f, "identifier `{name}`"),
            TokenKind::Str(_) => f.write_str("string literal"),
            TokenKind::Int(digits) => write!(f, "number `{digits}`"),
            TokenKind::LeftParen => f.write_str("`(`"),
            TokenKind::RightParen => f.write_str("`)`"),
            TokenKind::LeftBrace => f.write_str("`{`"),
            TokenKind::RightBrace => f.write_str("`}`"),
            TokenKind::Colon => f.write_str("`:`"),
            TokenKind::Semicolon => f.write_str("`;`"),
            TokenKind::Dot => f.write_str("`.`"),
            TokenKind::Equal => f.write_str("`=`"),
            TokenKind::PlusEqual => f.write_str("`+=`"),
            TokenKind::Plus => f.write_str("`+`"),
            TokenKind::Slash => f.write_str("`/`"),
            TokenKind::Eof => f.write_str("end of input"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token<'src> {
    pub kind: TokenKind<'src>,
    pub span: Span,
}

/// Tokens (always terminated by `Eof`) plus lexer diagnostics.
#[derive(Debug)]
pub struct LexOutput<'src> {
    pub tokens: Vec<Token<'src>>,
    pub diagnostics: Vec<Diagnostic>,
}

fn keyword(text: &str) -> Option<TokenKind<'static>> {
    match text {
        "analyzer" => Some(TokenKind::Analyzer),
        "let" => Some(TokenKind::Let),
        "return" => Some(TokenKind::Return),
        _ => None,
    }
}

/// Lex analyzer source into cooked tokens.
pub fn lex(source: &str) -> LexOutput<'_> {
    let buffer = SourceBuffer::new(source);
    let mut scanner = RawScanner::new(buffer.cursor());
    let mut tokens = Vec::new();
    let mut diagnostics = Vec::new();

    loop {
        let start = scanner.pos();
        let raw = scanner.next_token();
        let span = Span::new(start, start + raw.len);
        // Slice from `source` so tokens borrow the caller's text rather
        // than the local buffer.
        let text = source.get(span.to_range()).unwrap_or("");

        let kind = match raw.tag {
            RawTag::Whitespace | RawTag::Newline | RawTag::LineComment => continue,
            RawTag::Eof => {
                tokens.push(Token {
                    kind: TokenKind::Eof,
                    span,
                });
                break;
            }
            RawTag::Ident => keyword(text).unwrap_or(TokenKind::Ident(text)),
            RawTag::Int => TokenKind::Int(text),
            RawTag::String => {
                let content = text
                    .strip_prefix('"')
                    .and_then(|rest| rest.strip_suffix('"'))
                    .unwrap_or("");
                TokenKind::Str(unescape(content, start + 1, &mut diagnostics))
            }
            RawTag::UnterminatedString => {
                diagnostics.push(
                    Diagnostic::error(ErrorCode::E0001)
                        .with_message("unterminated string literal")
                        .with_label(span, "string starts here")
                        .with_suggestion("add a closing `\"`"),
                );
                let content = text.strip_prefix('"').unwrap_or("");
                TokenKind::Str(unescape(content, start + 1, &mut diagnostics))
            }
            RawTag::InvalidByte | RawTag::InteriorNull => {
                diagnostics.push(
                    Diagnostic::error(ErrorCode::E0002)
                        .with_message(format!("invalid character {text:?} in source"))
                        .with_label(span, "not valid here"),
                );
                continue;
            }
            RawTag::LeftParen => TokenKind::LeftParen,
            RawTag::RightParen => TokenKind::RightParen,
            RawTag::LeftBrace => TokenKind::LeftBrace,
            RawTag::RightBrace => TokenKind::RightBrace,
            RawTag::Colon => TokenKind::Colon,
            RawTag::Semicolon => TokenKind::Semicolon,
            RawTag::Dot => TokenKind::Dot,
            RawTag::Equal => TokenKind::Equal,
            RawTag::Plus => TokenKind::Plus,
            RawTag::PlusEqual => TokenKind::PlusEqual,
            RawTag::Slash => TokenKind::Slash,
        };
        tokens.push(Token { kind, span });
    }

    tracing::trace!(
        tokens = tokens.len(),
        errors = diagnostics.len(),
        "lexed analyzer source"
    );
    LexOutput {
        tokens,
        diagnostics,
    }
}

/// Resolve the escapes `\"` `\\` `\n` `\t` in string content.
///
/// Borrows when there is nothing to unescape. Invalid escapes are reported
/// and kept verbatim.
#[allow(
    clippy::cast_possible_truncation,
    reason = "offsets are bounded by the source length, which fits in u32"
)]
fn unescape<'src>(content: &'src str, base: u32, diagnostics: &mut Vec<Diagnostic>) -> Cow<'src, str> {
    if !content.contains('\\') {
        return Cow::Borrowed(content);
    }

    let mut out = String::with_capacity(content.len());
    let mut chars = content.char_indices();
    while let Some((i, c)) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some((_, '"')) => out.push('"'),
            Some((_, '\\')) => out.push('\\'),
            Some((_, 'n')) => out.push('\n'),
            Some((_, 't')) => out.push('\t'),
            Some((j, other)) => {
                let span = Span::new(base + i as u32, base + (j + other.len_utf8()) as u32);
                diagnostics.push(
                    Diagnostic::error(ErrorCode::E0003)
                        .with_message(format!("invalid escape sequence `\\{}`", other.escape_default()))
                        .with_label(span, "unknown escape")
                        .with_note("valid escapes are `\\\"`, `\\\\`, `\\n` and `\\t`"),
                );
                out.push('\\');
                out.push(other);
            }
            None => {
                let span = Span::new(base + i as u32, base + i as u32 + 1);
                diagnostics.push(
                    Diagnostic::error(ErrorCode::E0003)
                        .with_message("escape sequence at end of input")
                        .with_label(span, "nothing to escape"),
                );
                out.push('\\');
            }
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests;
