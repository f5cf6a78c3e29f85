use super::*;
use pretty_assertions::assert_eq;

fn kinds(source: &str) -> Vec<TokenKind<'_>> {
    lex(source).tokens.into_iter().map(|t| t.kind).collect()
}

fn codes(source: &str) -> Vec<ErrorCode> {
    lex(source).diagnostics.iter().map(|d| d.code).collect()
}

#[test]
fn test_keywords_and_identifiers() {
    assert_eq!(
        kinds("analyzer A(input: T) { let r = \"\"; return r; }"),
        vec![
            TokenKind::Analyzer,
            TokenKind::Ident("A"),
            TokenKind::LeftParen,
            TokenKind::Ident("input"),
            TokenKind::Colon,
            TokenKind::Ident("T"),
            TokenKind::RightParen,
            TokenKind::LeftBrace,
            TokenKind::Let,
            TokenKind::Ident("r"),
            TokenKind::Equal,
            TokenKind::Str(Cow::Borrowed("")),
            TokenKind::Semicolon,
            TokenKind::Return,
            TokenKind::Ident("r"),
            TokenKind::Semicolon,
            TokenKind::RightBrace,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_spans_point_into_source() {
    let source = "  result += input.Prop1;";
    let output = lex(source);
    let texts: Vec<_> = output
        .tokens
        .iter()
        .map(|t| &source[t.span.to_range()])
        .collect();
    assert_eq!(
        texts,
        vec!["result", "+=", "input", ".", "Prop1", ";", ""]
    );
    assert_eq!(output.tokens.last().map(|t| t.span), Some(Span::point(24)));
}

#[test]
fn test_comments_are_trivia() {
    assert_eq!(
        kinds("// generated analyzer for `T`\nreturn"),
        vec![TokenKind::Return, TokenKind::Eof]
    );
}

#[test]
fn test_escapes_are_resolved() {
    let output = lex(r#""a\"b\\c\nd\te""#);
    assert!(output.diagnostics.is_empty());
    assert_eq!(
        output.tokens[0].kind,
        TokenKind::Str(Cow::Owned("a\"b\\c\nd\te".to_string()))
    );
}

#[test]
fn test_invalid_escape() {
    let output = lex(r#""a\qb""#);
    assert_eq!(codes(r#""a\qb""#), vec![ErrorCode::E0003]);
    assert_eq!(output.diagnostics[0].primary_span(), Some(Span::new(2, 4)));
    assert_eq!(
        output.tokens[0].kind,
        TokenKind::Str(Cow::Owned("a\\qb".to_string()))
    );
}

#[test]
fn test_unterminated_string() {
    let output = lex("let r = \"abc\n;");
    assert_eq!(
        output.diagnostics.iter().map(|d| d.code).collect::<Vec<_>>(),
        vec![ErrorCode::E0001]
    );
    assert_eq!(output.tokens[3].kind, TokenKind::Str(Cow::Borrowed("abc")));
    assert_eq!(output.tokens[4].kind, TokenKind::Semicolon);
}

#[test]
fn test_invalid_characters_are_skipped() {
    assert_eq!(codes("let # r"), vec![ErrorCode::E0002]);
    assert_eq!(
        kinds("let # r"),
        vec![TokenKind::Let, TokenKind::Ident("r"), TokenKind::Eof]
    );
    assert_eq!(codes("€\0"), vec![ErrorCode::E0002, ErrorCode::E0002]);
}

#[test]
fn test_unicode_identifiers() {
    assert!(codes("input.größe 名前").is_empty());
    assert_eq!(
        kinds("input.größe 名前"),
        vec![
            TokenKind::Ident("input"),
            TokenKind::Dot,
            TokenKind::Ident("größe"),
            TokenKind::Ident("名前"),
            TokenKind::Eof
        ]
    );
}

#[test]
fn test_numbers_and_stray_operators() {
    assert_eq!(
        kinds("input.3 + /"),
        vec![
            TokenKind::Ident("input"),
            TokenKind::Dot,
            TokenKind::Int("3"),
            TokenKind::Plus,
            TokenKind::Slash,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_token_descriptions() {
    assert_eq!(TokenKind::Ident("x").to_string(), "identifier `x`");
    assert_eq!(TokenKind::Int("3").to_string(), "number `3`");
    assert_eq!(TokenKind::Eof.to_string(), "end of input");
    assert_eq!(TokenKind::PlusEqual.to_string(), "`+=`");
}
