//! Lexer behaviour and position tracking.

mod common;

use common::{kinds, texts};
use lexcalc::{Span, TokenCategory, TokenKind, tokenize};

// -----------------------------------------------------------
// Basic lexer behaviour.
// -----------------------------------------------------------

#[test]
fn lex_only_whitespace() {
    let tokens = tokenize("   \t  \n\n  ");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EndOfInput);
    assert_eq!(tokens[0].span, Span { line: 3, column: 3 });
}

#[test]
fn lex_only_comment() {
    assert_eq!(kinds("# nothing here"), vec![TokenKind::EndOfInput]);
}

#[test]
fn lex_comment_keeps_following_line() {
    let tokens = tokenize("# first\n# second\nx");
    assert_eq!(texts(&tokens), vec!["x"]);
    assert_eq!(tokens[0].span, Span { line: 3, column: 1 });
}

#[test]
fn lex_all_single_char_tokens() {
    assert_eq!(
        kinds("+-*/%^<>=(),;"),
        vec![
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Multiply,
            TokenKind::Divide,
            TokenKind::Modulo,
            TokenKind::Power,
            TokenKind::Less,
            TokenKind::Greater,
            TokenKind::Equal,
            TokenKind::LeftParen,
            TokenKind::RightParen,
            TokenKind::Comma,
            TokenKind::Semicolon,
            TokenKind::EndOfInput,
        ]
    );
}

#[test]
fn lex_adjacent_tokens_without_spaces() {
    let tokens = tokenize("sin(0.5)+x1_y*2");
    assert_eq!(
        texts(&tokens),
        vec!["sin", "(", "0.5", ")", "+", "x1_y", "*", "2"]
    );
}

#[test]
fn lex_identifier_may_start_with_underscore() {
    let tokens = tokenize("_tmp9");
    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].text, "_tmp9");
}

#[test]
fn lex_digits_then_letters_split() {
    let tokens = tokenize("2x");
    assert_eq!(tokens[0].kind, TokenKind::Integer);
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].span.column, 2);
}

#[test]
fn lex_float_followed_by_dot() {
    let tokens = tokenize("1.2.3");
    assert_eq!(texts(&tokens), vec!["1.2", ".3"]);
    assert!(tokens[..2].iter().all(|t| t.kind == TokenKind::Float));
}

#[test]
fn lex_lone_dot_is_unknown() {
    let tokens = tokenize("a . b");
    assert_eq!(tokens[1].kind, TokenKind::Unknown);
    assert_eq!(tokens[1].text, ".");
}

#[test]
fn lex_not_equal_is_never_produced() {
    let tokens = tokenize("1 != 2");
    assert!(tokens.iter().all(|t| t.kind != TokenKind::NotEqual));
    assert_eq!(tokens[1].kind, TokenKind::Unknown);
    assert_eq!(tokens[1].text, "!");
    assert_eq!(tokens[2].kind, TokenKind::Equal);
}

#[test]
fn lex_unknown_characters_do_not_stop_scanning() {
    let tokens = tokenize("1 @ $ 2");
    assert_eq!(
        tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
        vec![
            TokenKind::Integer,
            TokenKind::Unknown,
            TokenKind::Unknown,
            TokenKind::Integer,
            TokenKind::EndOfInput,
        ]
    );
}

// -----------------------------------------------------------
// Position tracking.
// -----------------------------------------------------------

#[test]
fn column_points_at_start_of_lexeme() {
    let tokens = tokenize("  foo");
    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].span, Span { line: 1, column: 3 });
}

#[test]
fn columns_in_expression() {
    let tokens = tokenize("12 + 3.75");
    let columns: Vec<_> = tokens.iter().map(|t| t.span.column).collect();
    assert_eq!(columns, vec![1, 4, 6, 10]);
}

#[test]
fn columns_reset_after_newline() {
    let tokens = tokenize("abc\n\tdef 1");
    assert_eq!(tokens[0].span, Span { line: 1, column: 1 });
    assert_eq!(tokens[1].span, Span { line: 2, column: 2 });
    assert_eq!(tokens[2].span, Span { line: 2, column: 6 });
}

#[test]
fn columns_count_characters_not_bytes() {
    let tokens = tokenize("ü + x");
    assert_eq!(tokens[0].kind, TokenKind::Unknown);
    assert_eq!(tokens[1].span.column, 3);
    assert_eq!(tokens[2].span.column, 5);
}

#[test]
fn end_of_input_sits_after_last_character() {
    let tokens = tokenize("ab\ncd");
    let eof = tokens.last().unwrap();
    assert_eq!(eof.kind, TokenKind::EndOfInput);
    assert_eq!(eof.span, Span { line: 2, column: 3 });
}

// -----------------------------------------------------------
// Toy-language source: keywords are lexed, not evaluated.
// -----------------------------------------------------------

#[test]
fn lex_function_definition_source() {
    let source = "
    # Define a function to calculate factorial
    def factorial(n)
        if n < 2 then
            1
        else
            n * factorial(n-1)

    extern sin(x);
    3.14159 * sin(0.5) + 2 * cos(0)
    ";
    let tokens = tokenize(source);

    let def = &tokens[0];
    assert_eq!(def.kind, TokenKind::Function);
    assert_eq!(def.span, Span { line: 3, column: 5 });

    let keywords: Vec<_> = tokens
        .iter()
        .filter(|t| t.kind.category() == TokenCategory::Keyword)
        .map(|t| t.kind)
        .collect();
    assert_eq!(
        keywords,
        vec![
            TokenKind::Function,
            TokenKind::If,
            TokenKind::Then,
            TokenKind::Else,
            TokenKind::Extern,
        ]
    );
    assert!(tokens.iter().all(|t| t.kind != TokenKind::Unknown));
    assert_eq!(
        tokens.iter().filter(|t| t.kind == TokenKind::EndOfInput).count(),
        1
    );
}

#[test]
fn lex_for_in_keywords() {
    assert_eq!(
        kinds("for i in 1"),
        vec![
            TokenKind::For,
            TokenKind::Identifier,
            TokenKind::In,
            TokenKind::Integer,
            TokenKind::EndOfInput,
        ]
    );
}

// -----------------------------------------------------------
// Token metadata.
// -----------------------------------------------------------

#[test]
fn kind_names() {
    assert_eq!(TokenKind::LeftParen.name(), "LEFT_PAREN");
    assert_eq!(TokenKind::NotEqual.to_string(), "NOT_EQUAL");
    assert_eq!(TokenKind::EndOfInput.name(), "END_OF_INPUT");
}

#[test]
fn kind_categories() {
    assert_eq!(TokenKind::In.category(), TokenCategory::Keyword);
    assert_eq!(TokenKind::Float.category(), TokenCategory::Literal);
    assert_eq!(TokenKind::Power.category(), TokenCategory::Operator);
    assert_eq!(TokenKind::NotEqual.category(), TokenCategory::Comparison);
    assert_eq!(TokenKind::Semicolon.category(), TokenCategory::Punctuation);
    assert_eq!(TokenKind::Unknown.category(), TokenCategory::Special);
}

#[test]
fn token_display() {
    let tokens = tokenize("  foo");
    assert_eq!(
        tokens[0].to_string(),
        "Token(type=IDENTIFIER, value='foo', position=(1, 3))"
    );
}

#[test]
fn tokenize_timed_matches_tokenize() {
    let timed = lexcalc::tokenize_timed("1 + 2");
    assert_eq!(timed.value, tokenize("1 + 2"));
    assert!(timed.elapsed_ms() >= 0.0);
}
