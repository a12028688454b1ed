use crate::timing::{Timed, measure};
use crate::token::{Span, Token, TokenKind};

/// Tokenize a source string into a sequence of tokens.
///
/// Never fails: characters that cannot start a token become
/// [`TokenKind::Unknown`] tokens. The returned sequence always ends
/// with exactly one [`TokenKind::EndOfInput`] token.
#[must_use]
pub fn tokenize(input: &str) -> Vec<Token> {
    Lexer::new(input).tokenize()
}

/// Tokenize and report how long the scan took.
#[must_use]
pub fn tokenize_timed(input: &str) -> Timed<Vec<Token>> {
    measure(|| tokenize(input))
}

struct Lexer<'a> {
    input: &'a str,
    pos: usize,
    line: usize,
    col: usize,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    const fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            line: 1,
            col: 1,
            tokens: Vec::new(),
        }
    }

    fn tokenize(mut self) -> Vec<Token> {
        while let Some(ch) = self.advance() {
            self.scan_token(ch);
        }

        let span = Span {
            line: self.line,
            column: self.col,
        };
        self.tokens.push(Token {
            kind: TokenKind::EndOfInput,
            text: TokenKind::EndOfInput.name().to_string(),
            span,
        });
        self.tokens
    }

    /// Dispatch on a character that has already been consumed.
    fn scan_token(&mut self, ch: char) {
        if ch.is_whitespace() {
            return;
        }

        if ch == '#' {
            self.skip_comment();
            return;
        }

        // `!` is not in the table, so `!=` lexes as UNKNOWN then EQUAL.
        if let Some(kind) = TokenKind::single_char(ch) {
            self.push_lexeme(kind, self.pos - ch.len_utf8());
            return;
        }

        if ch.is_ascii_alphabetic() || ch == '_' {
            self.identifier(self.pos - 1);
            return;
        }

        if ch.is_ascii_digit() || (ch == '.' && self.peek().is_some_and(|c| c.is_ascii_digit())) {
            self.number(self.pos - 1);
            return;
        }

        self.push_lexeme(TokenKind::Unknown, self.pos - ch.len_utf8());
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.input[self.pos..].chars().nth(offset)
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
        Some(ch)
    }

    fn advance_while(&mut self, pred: impl Fn(char) -> bool) {
        while self.peek().is_some_and(&pred) {
            self.advance();
        }
    }

    /// Push a token for `input[start..pos]`. The lexeme never spans a
    /// newline, so its column is recovered from the current one.
    fn push_lexeme(&mut self, kind: TokenKind, start: usize) {
        let text = &self.input[start..self.pos];
        let width = text.chars().count();
        self.tokens.push(Token {
            kind,
            text: text.to_string(),
            span: Span {
                line: self.line,
                column: self.col - width,
            },
        });
    }

    fn skip_comment(&mut self) {
        self.advance_while(|c| c != '\n');
    }

    fn identifier(&mut self, start: usize) {
        self.advance_while(|c| c.is_ascii_alphanumeric() || c == '_');
        let kind =
            TokenKind::keyword(&self.input[start..self.pos]).unwrap_or(TokenKind::Identifier);
        self.push_lexeme(kind, start);
    }

    fn number(&mut self, start: usize) {
        let leading_dot = self.input.as_bytes()[start] == b'.';
        self.advance_while(|c| c.is_ascii_digit());

        let mut kind = if leading_dot {
            TokenKind::Float
        } else {
            TokenKind::Integer
        };

        // fractional part only when a digit follows the dot
        if !leading_dot
            && self.peek() == Some('.')
            && self.peek_at(1).is_some_and(|c| c.is_ascii_digit())
        {
            self.advance();
            self.advance_while(|c| c.is_ascii_digit());
            kind = TokenKind::Float;
        }

        self.push_lexeme(kind, start);
    }
}
