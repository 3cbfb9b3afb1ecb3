// tests/lexer_tests.rs

use larch_lang::ast::Token;
use larch_lang::lexer::Tokenizer;
use larch_lang::source::StringSource;

fn scan(input: &str) -> Tokenizer {
    Tokenizer::new(Box::new(StringSource::new(input)))
}

// ============================================================================
// Single Character Tokens
// ============================================================================

#[test]
fn test_single_char_tokens() {
    let test_cases = vec![
        ("=", Token::Assign),
        ("{", Token::ArrayOpen),
        ("}", Token::ArrayClose),
    ];

    for (input, expected) in test_cases {
        let mut tokenizer = scan(input);
        assert_eq!(tokenizer.next_token(), expected, "Failed for input: {}", input);
        assert_eq!(tokenizer.next_token(), Token::None);
    }
}

// ============================================================================
// Names
// ============================================================================

#[test]
fn test_simple_name() {
    let mut tokenizer = scan("window");
    assert_eq!(tokenizer.next_token(), Token::Name("window".to_string()));
    assert_eq!(tokenizer.next_token(), Token::None);
}

#[test]
fn test_name_with_digits_and_underscores() {
    let mut tokenizer = scan("item_count2");
    assert_eq!(tokenizer.next_token(), Token::Name("item_count2".to_string()));
}

#[test]
fn test_name_leading_underscore() {
    let mut tokenizer = scan("_internal");
    assert_eq!(tokenizer.next_token(), Token::Name("_internal".to_string()));
}

#[test]
fn test_name_stops_at_symbol() {
    let mut tokenizer = scan("title=");
    assert_eq!(tokenizer.next_token(), Token::Name("title".to_string()));
    assert_eq!(tokenizer.next_token(), Token::Assign);
}

#[test]
fn test_name_cannot_start_with_digit() {
    let mut tokenizer = scan("123abc");
    assert_eq!(tokenizer.next_token(), Token::None);
}

#[test]
fn test_unexpected_symbol_is_rejected() {
    let mut tokenizer = scan("@widget");
    assert_eq!(tokenizer.next_token(), Token::None);
}

// ============================================================================
// Strings
// ============================================================================

#[test]
fn test_simple_string() {
    let mut tokenizer = scan("\"hello\"");
    assert_eq!(tokenizer.next_token(), Token::String("hello".to_string()));
    assert_eq!(tokenizer.next_token(), Token::None);
}

#[test]
fn test_empty_string() {
    let mut tokenizer = scan("\"\"");
    assert_eq!(tokenizer.next_token(), Token::String(String::new()));
}

#[test]
fn test_string_with_spaces_and_symbols() {
    let mut tokenizer = scan("\"a = { b }\"");
    assert_eq!(tokenizer.next_token(), Token::String("a = { b }".to_string()));
}

#[test]
fn test_unterminated_string() {
    let mut tokenizer = scan("\"unterminated");
    assert_eq!(tokenizer.next_token(), Token::None);
}

#[test]
fn test_string_with_raw_line_break() {
    let mut tokenizer = scan("\"line\nbreak\"");
    assert_eq!(tokenizer.next_token(), Token::None);
}

#[test]
fn test_string_with_raw_carriage_return() {
    let mut tokenizer = scan("\"line\rbreak\"");
    assert_eq!(tokenizer.next_token(), Token::None);
}

// ============================================================================
// Whitespace
// ============================================================================

#[test]
fn test_whitespace_between_tokens() {
    let mut tokenizer = scan("  \t title \r\n =  \"x\" ");
    assert_eq!(tokenizer.next_token(), Token::Name("title".to_string()));
    assert_eq!(tokenizer.next_token(), Token::Assign);
    assert_eq!(tokenizer.next_token(), Token::String("x".to_string()));
    assert_eq!(tokenizer.next_token(), Token::None);
}

#[test]
fn test_whitespace_only_input() {
    let mut tokenizer = scan(" \t\r\n ");
    assert_eq!(tokenizer.next_token(), Token::None);
}

#[test]
fn test_empty_input() {
    let mut tokenizer = scan("");
    assert_eq!(tokenizer.next_token(), Token::None);
    assert_eq!(tokenizer.next_token(), Token::None);
}

// ============================================================================
// Lookahead
// ============================================================================

#[test]
fn test_peek_does_not_consume() {
    let mut tokenizer = scan("a = \"x\"");

    assert_eq!(tokenizer.peek_token(), Token::Name("a".to_string()));
    assert_eq!(tokenizer.peek_token(), Token::Name("a".to_string()));
    assert_eq!(tokenizer.next_token(), Token::Name("a".to_string()));
    assert_eq!(tokenizer.peek_token(), Token::Assign);
    assert_eq!(tokenizer.next_token(), Token::Assign);
}

#[test]
fn test_peek_at_end_of_input() {
    let mut tokenizer = scan("a");
    tokenizer.next_token();

    assert_eq!(tokenizer.peek_token(), Token::None);
    assert_eq!(tokenizer.next_token(), Token::None);
}

// ============================================================================
// Full Declarations
// ============================================================================

#[test]
fn test_declaration_token_sequence() {
    let mut tokenizer = scan("a = { b = \"x\" }");

    assert_eq!(tokenizer.next_token(), Token::Name("a".to_string()));
    assert_eq!(tokenizer.next_token(), Token::Assign);
    assert_eq!(tokenizer.next_token(), Token::ArrayOpen);
    assert_eq!(tokenizer.next_token(), Token::Name("b".to_string()));
    assert_eq!(tokenizer.next_token(), Token::Assign);
    assert_eq!(tokenizer.next_token(), Token::String("x".to_string()));
    assert_eq!(tokenizer.next_token(), Token::ArrayClose);
    assert_eq!(tokenizer.next_token(), Token::None);
}
