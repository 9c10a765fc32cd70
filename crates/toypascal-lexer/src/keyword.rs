//! Reserved words.
//!
//! Matching is exact and case-sensitive: `if` is a keyword, `If` and `IF`
//! are identifiers.

use crate::token::TokenKind;

/// Every reserved spelling with its token class.
pub const KEYWORDS: &[(&str, TokenKind)] = &[
    ("function", TokenKind::Function),
    ("procedure", TokenKind::Procedure),
    ("type", TokenKind::Type),
    ("var", TokenKind::Var),
    ("record", TokenKind::Record),
    ("if", TokenKind::If),
    ("else", TokenKind::Else),
    ("then", TokenKind::Then),
    ("while", TokenKind::While),
    ("do", TokenKind::Do),
    ("begin", TokenKind::Begin),
    ("end", TokenKind::End),
    ("nil", TokenKind::Nil),
];

/// Look up a lexeme, returning the keyword class only on a match.
pub fn lookup(lexeme: &str) -> Option<TokenKind> {
    let kind = match lexeme {
        "function" => TokenKind::Function,
        "procedure" => TokenKind::Procedure,
        "type" => TokenKind::Type,
        "var" => TokenKind::Var,
        "record" => TokenKind::Record,
        "if" => TokenKind::If,
        "else" => TokenKind::Else,
        "then" => TokenKind::Then,
        "while" => TokenKind::While,
        "do" => TokenKind::Do,
        "begin" => TokenKind::Begin,
        "end" => TokenKind::End,
        "nil" => TokenKind::Nil,
        _ => return None,
    };
    Some(kind)
}

/// Classify an identifier-shaped lexeme as a keyword or [`TokenKind::Identifier`].
pub fn resolve(lexeme: &str) -> TokenKind {
    lookup(lexeme).unwrap_or(TokenKind::Identifier)
}
