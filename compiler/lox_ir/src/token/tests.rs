use super::*;
use pretty_assertions::assert_eq;

#[test]
fn keyword_lookup() {
    assert_eq!(TokenKind::keyword("while"), Some(TokenKind::While));
    assert_eq!(TokenKind::keyword("fun"), Some(TokenKind::Fun));
    assert_eq!(TokenKind::keyword("nil"), Some(TokenKind::Nil));
    assert_eq!(TokenKind::keyword("whilst"), None);
    assert_eq!(TokenKind::keyword(""), None);
}

#[test]
fn literal_display_uses_shortest_number_form() {
    assert_eq!(LiteralValue::Number(1.0).to_string(), "1");
    assert_eq!(LiteralValue::Number(2.5).to_string(), "2.5");
    assert_eq!(LiteralValue::Number(-0.25).to_string(), "-0.25");
}

#[test]
fn literal_display_strings_and_bools() {
    assert_eq!(LiteralValue::from("hi there").to_string(), "hi there");
    assert_eq!(LiteralValue::Bool(true).to_string(), "true");
    assert_eq!(LiteralValue::Bool(false).to_string(), "false");
}

#[test]
fn token_displays_lexeme_not_literal() {
    let token = Token::new(
        TokenKind::String,
        "\"abc\"",
        Some(LiteralValue::from("abc")),
        3,
    );
    assert_eq!(token.to_string(), "\"abc\"");
    assert_eq!(token.line, 3);
}

#[test]
fn identifier_helper() {
    let token = Token::identifier("count").at_line(7);
    assert_eq!(token.kind, TokenKind::Identifier);
    assert_eq!(token.lexeme, "count");
    assert_eq!(token.literal, None);
    assert_eq!(token.line, 7);
}
