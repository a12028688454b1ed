use std::fmt;

/// Source location for error reporting.
///
/// Both fields are 1-based. `column` counts characters and points at
/// the first character of the lexeme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub line: usize,
    pub column: usize,
}

/// Token kinds produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `def`.
    Function,
    /// `extern`.
    Extern,
    /// `if`.
    If,
    /// `then`.
    Then,
    /// `else`.
    Else,
    /// `for`.
    For,
    /// `in`.
    In,
    /// Digits without a decimal point.
    Integer,
    /// Digits with a decimal point (`1.5`, `.5`).
    Float,
    /// Name that is not a keyword.
    Identifier,
    /// `+`.
    Plus,
    /// `-`.
    Minus,
    /// `*`.
    Multiply,
    /// `/`.
    Divide,
    /// `%`.
    Modulo,
    /// `^`.
    Power,
    /// `<`.
    Less,
    /// `>`.
    Greater,
    /// `=`.
    Equal,
    /// `!=`. Never produced: `!` is not an operator character.
    NotEqual,
    /// `(`.
    LeftParen,
    /// `)`.
    RightParen,
    /// `,`.
    Comma,
    /// `;`.
    Semicolon,
    /// Synthetic end marker, always the last token.
    EndOfInput,
    /// Character that cannot start any token.
    Unknown,
}

/// Coarse grouping of token kinds, used when rendering tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenCategory {
    Keyword,
    Literal,
    Operator,
    Comparison,
    Punctuation,
    Special,
}

impl TokenKind {
    /// Upper-case name of the kind, e.g. `LEFT_PAREN`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Function => "FUNCTION",
            Self::Extern => "EXTERN",
            Self::If => "IF",
            Self::Then => "THEN",
            Self::Else => "ELSE",
            Self::For => "FOR",
            Self::In => "IN",
            Self::Integer => "INTEGER",
            Self::Float => "FLOAT",
            Self::Identifier => "IDENTIFIER",
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Multiply => "MULTIPLY",
            Self::Divide => "DIVIDE",
            Self::Modulo => "MODULO",
            Self::Power => "POWER",
            Self::Less => "LESS",
            Self::Greater => "GREATER",
            Self::Equal => "EQUAL",
            Self::NotEqual => "NOT_EQUAL",
            Self::LeftParen => "LEFT_PAREN",
            Self::RightParen => "RIGHT_PAREN",
            Self::Comma => "COMMA",
            Self::Semicolon => "SEMICOLON",
            Self::EndOfInput => "END_OF_INPUT",
            Self::Unknown => "UNKNOWN",
        }
    }

    #[must_use]
    pub const fn category(self) -> TokenCategory {
        match self {
            Self::Function
            | Self::Extern
            | Self::If
            | Self::Then
            | Self::Else
            | Self::For
            | Self::In => TokenCategory::Keyword,
            Self::Integer | Self::Float | Self::Identifier => TokenCategory::Literal,
            Self::Plus
            | Self::Minus
            | Self::Multiply
            | Self::Divide
            | Self::Modulo
            | Self::Power => TokenCategory::Operator,
            Self::Less | Self::Greater | Self::Equal | Self::NotEqual => {
                TokenCategory::Comparison
            }
            Self::LeftParen | Self::RightParen | Self::Comma | Self::Semicolon => {
                TokenCategory::Punctuation
            }
            Self::EndOfInput | Self::Unknown => TokenCategory::Special,
        }
    }

    /// Look up a keyword by its source spelling.
    #[must_use]
    pub fn keyword(word: &str) -> Option<Self> {
        match word {
            "def" => Some(Self::Function),
            "extern" => Some(Self::Extern),
            "if" => Some(Self::If),
            "then" => Some(Self::Then),
            "else" => Some(Self::Else),
            "for" => Some(Self::For),
            "in" => Some(Self::In),
            _ => None,
        }
    }

    /// Look up a single-character operator or punctuation token.
    #[must_use]
    pub const fn single_char(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Self::Plus),
            '-' => Some(Self::Minus),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            '%' => Some(Self::Modulo),
            '^' => Some(Self::Power),
            '<' => Some(Self::Less),
            '>' => Some(Self::Greater),
            '=' => Some(Self::Equal),
            '(' => Some(Self::LeftParen),
            ')' => Some(Self::RightParen),
            ',' => Some(Self::Comma),
            ';' => Some(Self::Semicolon),
            _ => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single token with its kind, text, and source location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Token(type={}, value='{}', position=({}, {}))",
            self.kind, self.text, self.span.line, self.span.column
        )
    }
}
