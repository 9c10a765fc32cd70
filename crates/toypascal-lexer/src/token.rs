use std::fmt;

/// Token classification for Toy Pascal source.
///
/// The set is closed: every lexable character sequence maps to exactly one
/// variant. The source text of a token lives on [`Token::text`], not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TokenKind {
    // Special
    EndOfInput,
    Illegal,

    // Identifiers and literals
    Identifier,
    IntegerLiteral,

    // Operators
    Assign,       // :=
    Plus,         // +
    Minus,        // -
    Asterisk,     // *
    Slash,        // /
    Caret,        // ^
    Dot,          // .
    Less,         // <
    Greater,      // >
    Equal,        // =
    NotEqual,     // <>
    LessEqual,    // <=
    GreaterEqual, // >=

    // Delimiters
    Comma,
    Semicolon,
    Colon,
    LeftParen,
    RightParen,

    // Keywords
    Function,
    Procedure,
    Type,
    Var,
    Record,
    If,
    Else,
    Then,
    While,
    Do,
    Begin,
    End,
    Nil,
}

impl TokenKind {
    /// Stable display name: the symbol for operators and delimiters,
    /// the upper-case spelling for keywords.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::EndOfInput => "EOF",
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Identifier => "IDENT",
            TokenKind::IntegerLiteral => "INT",

            TokenKind::Assign => ":=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Asterisk => "*",
            TokenKind::Slash => "/",
            TokenKind::Caret => "^",
            TokenKind::Dot => ".",
            TokenKind::Less => "<",
            TokenKind::Greater => ">",
            TokenKind::Equal => "=",
            TokenKind::NotEqual => "<>",
            TokenKind::LessEqual => "<=",
            TokenKind::GreaterEqual => ">=",

            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::Colon => ":",
            TokenKind::LeftParen => "(",
            TokenKind::RightParen => ")",

            TokenKind::Function => "FUNCTION",
            TokenKind::Procedure => "PROCEDURE",
            TokenKind::Type => "TYPE",
            TokenKind::Var => "VAR",
            TokenKind::Record => "RECORD",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::Then => "THEN",
            TokenKind::While => "WHILE",
            TokenKind::Do => "DO",
            TokenKind::Begin => "BEGIN",
            TokenKind::End => "END",
            TokenKind::Nil => "NIL",
        }
    }

    /// True for the reserved-word classes (`function` … `nil`).
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::Function
                | TokenKind::Procedure
                | TokenKind::Type
                | TokenKind::Var
                | TokenKind::Record
                | TokenKind::If
                | TokenKind::Else
                | TokenKind::Then
                | TokenKind::While
                | TokenKind::Do
                | TokenKind::Begin
                | TokenKind::End
                | TokenKind::Nil
        )
    }

    /// True for arithmetic, comparison, pointer and assignment operators.
    pub fn is_operator(self) -> bool {
        matches!(
            self,
            TokenKind::Assign
                | TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Asterisk
                | TokenKind::Slash
                | TokenKind::Caret
                | TokenKind::Dot
                | TokenKind::Less
                | TokenKind::Greater
                | TokenKind::Equal
                | TokenKind::NotEqual
                | TokenKind::LessEqual
                | TokenKind::GreaterEqual
        )
    }

    /// True for `,` `;` `:` `(` `)`.
    pub fn is_delimiter(self) -> bool {
        matches!(
            self,
            TokenKind::Comma
                | TokenKind::Semicolon
                | TokenKind::Colon
                | TokenKind::LeftParen
                | TokenKind::RightParen
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A token produced by the Toy Pascal lexer.
///
/// Owns its text, so it stays valid after the source buffer is dropped.
/// `line` and `column` are 1-based and point at the first character.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub line: usize,
    pub column: usize,
}

impl Token {
    /// Build a token at the 1-based position of its first character.
    pub fn new(kind: TokenKind, text: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
            column,
        }
    }

    /// True for the `EndOfInput` token.
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_categories_are_disjoint() {
        let all = [
            TokenKind::EndOfInput,
            TokenKind::Illegal,
            TokenKind::Identifier,
            TokenKind::IntegerLiteral,
            TokenKind::Assign,
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Asterisk,
            TokenKind::Slash,
            TokenKind::Caret,
            TokenKind::Dot,
            TokenKind::Less,
            TokenKind::Greater,
            TokenKind::Equal,
            TokenKind::NotEqual,
            TokenKind::LessEqual,
            TokenKind::GreaterEqual,
            TokenKind::Comma,
            TokenKind::Semicolon,
            TokenKind::Colon,
            TokenKind::LeftParen,
            TokenKind::RightParen,
            TokenKind::Function,
            TokenKind::Procedure,
            TokenKind::Type,
            TokenKind::Var,
            TokenKind::Record,
            TokenKind::If,
            TokenKind::Else,
            TokenKind::Then,
            TokenKind::While,
            TokenKind::Do,
            TokenKind::Begin,
            TokenKind::End,
            TokenKind::Nil,
        ];
        for kind in all {
            let hits = [kind.is_keyword(), kind.is_operator(), kind.is_delimiter()]
                .iter()
                .filter(|b| **b)
                .count();
            assert!(hits <= 1, "{kind:?} is in more than one category");
        }
        assert_eq!(all.iter().filter(|k| k.is_keyword()).count(), 13);
        assert_eq!(all.iter().filter(|k| k.is_operator()).count(), 13);
        assert_eq!(all.iter().filter(|k| k.is_delimiter()).count(), 5);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(TokenKind::Identifier.to_string(), "IDENT");
        assert_eq!(TokenKind::IntegerLiteral.to_string(), "INT");
        assert_eq!(TokenKind::NotEqual.to_string(), "<>");
        assert_eq!(TokenKind::Procedure.to_string(), "PROCEDURE");
        assert_eq!(TokenKind::EndOfInput.to_string(), "EOF");
    }

    #[test]
    fn test_token_equality_includes_position() {
        let a = Token::new(TokenKind::Identifier, "x", 1, 1);
        assert_eq!(a, Token::new(TokenKind::Identifier, "x", 1, 1));
        assert_ne!(a, Token::new(TokenKind::Identifier, "x", 1, 2));
        assert!(Token::new(TokenKind::EndOfInput, "", 3, 1).is_eof());
    }
}
