//! Toy Pascal Lexer
//!
//! Turns Toy Pascal source text into a stream of classified tokens, each
//! tagged with the 1-based line and column of its first character.
//! Handles two-character operators (`:=` `<>` `<=` `>=`), `//` line
//! comments, and exact-match keyword detection.
//!
//! # Example
//!
//! ```
//! use toypascal_lexer::{Scanner, TokenKind};
//!
//! let tokens = Scanner::tokenize("x := 5 + 3;");
//! assert_eq!(tokens[1].kind, TokenKind::Assign);
//! assert_eq!((tokens[1].line, tokens[1].column), (1, 3));
//! assert_eq!(tokens.last().unwrap().kind, TokenKind::EndOfInput);
//! ```

pub mod keyword;
pub mod scanner;
pub mod token;

pub use scanner::Scanner;
pub use token::{Token, TokenKind};

/// Lexer error with position information.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Lexer error at line {line}, column {column}: {message}")]
pub struct LexerError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}

impl LexerError {
    /// Report an `Illegal` token as an unexpected character.
    pub fn from_token(token: &Token) -> Self {
        Self {
            message: format!("unexpected character '{}'", token.text),
            line: token.line,
            column: token.column,
        }
    }
}
