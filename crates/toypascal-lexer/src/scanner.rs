use std::iter::FusedIterator;

use tracing::trace;

use crate::keyword;
use crate::token::{Token, TokenKind};
use crate::LexerError;

/// Toy Pascal source scanner.
///
/// Pull-based: each [`Scanner::next_token`] call scans exactly one token
/// and leaves the cursor on the character after it. Whitespace and `//`
/// line comments are skipped between tokens and never produce tokens.
///
/// `line` and `column` always describe the character about to be
/// consumed. A consumed `\n` bumps the line and resets the column to 1;
/// any other character advances the column by one.
///
/// The scanner never fails. Characters outside the language come back as
/// [`TokenKind::Illegal`] tokens and scanning continues after them.
pub struct Scanner<'a> {
    source: &'a str,
    pos: usize,
    line: usize,
    column: usize,
    finished: bool,
}

impl<'a> Scanner<'a> {
    /// Create a new scanner positioned at line 1, column 1.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            pos: 0,
            line: 1,
            column: 1,
            finished: false,
        }
    }

    /// Tokenize the entire source. The result always ends with a single
    /// [`TokenKind::EndOfInput`] token.
    pub fn tokenize(source: &str) -> Vec<Token> {
        Scanner::new(source).collect()
    }

    /// Tokenize the entire source, failing on the first illegal character.
    pub fn tokenize_strict(source: &str) -> Result<Vec<Token>, LexerError> {
        let mut tokens = Vec::new();
        for token in Scanner::new(source) {
            if token.kind == TokenKind::Illegal {
                return Err(LexerError::from_token(&token));
            }
            tokens.push(token);
        }
        Ok(tokens)
    }

    /// Current `(line, column)` of the character about to be consumed.
    pub fn position(&self) -> (usize, usize) {
        (self.line, self.column)
    }

    /// Scan the next token.
    ///
    /// Once the end of input is reached every further call returns an
    /// `EndOfInput` token at the same position.
    pub fn next_token(&mut self) -> Token {
        self.skip_trivia();

        let start_line = self.line;
        let start_col = self.column;
        let start_pos = self.pos;

        if self.is_at_end() {
            return Token::new(TokenKind::EndOfInput, "", start_line, start_col);
        }

        let kind = match self.peek() {
            '(' => self.single(TokenKind::LeftParen),
            ')' => self.single(TokenKind::RightParen),
            ',' => self.single(TokenKind::Comma),
            '+' => self.single(TokenKind::Plus),
            '-' => self.single(TokenKind::Minus),
            '*' => self.single(TokenKind::Asterisk),
            '^' => self.single(TokenKind::Caret),
            '.' => self.single(TokenKind::Dot),
            '=' => self.single(TokenKind::Equal),
            ';' => self.single(TokenKind::Semicolon),
            // `//` was already taken by skip_trivia
            '/' => self.single(TokenKind::Slash),

            ':' => self.pair('=', TokenKind::Assign, TokenKind::Colon),
            '<' => match self.peek_next() {
                '>' => self.double(TokenKind::NotEqual),
                '=' => self.double(TokenKind::LessEqual),
                _ => self.single(TokenKind::Less),
            },
            '>' => self.pair('=', TokenKind::GreaterEqual, TokenKind::Greater),

            c if is_ident_start(c) => self.scan_identifier(start_pos),
            c if c.is_ascii_digit() => self.scan_number(),

            _ => self.single(TokenKind::Illegal),
        };

        let token = Token::new(kind, &self.source[start_pos..self.pos], start_line, start_col);
        trace!(
            kind = %token.kind,
            text = %token.text,
            line = token.line,
            column = token.column,
            "token"
        );
        token
    }

    // --- Scanners ---

    /// Consume the maximal run of letters, digits and underscores, then
    /// classify it through the keyword table.
    fn scan_identifier(&mut self, start_pos: usize) -> TokenKind {
        while is_ident_continue(self.peek()) {
            self.advance();
        }
        keyword::resolve(&self.source[start_pos..self.pos])
    }

    /// Consume a run of decimal digits. The digits stay text; conversion
    /// and range checks are left to the parser.
    fn scan_number(&mut self) -> TokenKind {
        while self.peek().is_ascii_digit() {
            self.advance();
        }
        TokenKind::IntegerLiteral
    }

    /// Skip whitespace and `//` comments until a real token or the end.
    fn skip_trivia(&mut self) {
        loop {
            while matches!(self.peek(), ' ' | '\t' | '\r' | '\n') {
                self.advance();
            }
            if self.peek() == '/' && self.peek_next() == '/' {
                self.skip_comment();
                continue;
            }
            break;
        }
    }

    /// Skip a line comment up to, but not including, the newline.
    fn skip_comment(&mut self) {
        trace!(line = self.line, column = self.column, "skip comment");
        while !self.is_at_end() && self.peek() != '\n' {
            self.advance();
        }
    }

    // --- Helpers ---

    fn single(&mut self, kind: TokenKind) -> TokenKind {
        self.advance();
        kind
    }

    fn double(&mut self, kind: TokenKind) -> TokenKind {
        self.advance();
        self.advance();
        kind
    }

    /// One-character lookahead: `matched` if the next character is
    /// `second`, otherwise `fallback`.
    fn pair(&mut self, second: char, matched: TokenKind, fallback: TokenKind) -> TokenKind {
        if self.peek_next() == second {
            self.double(matched)
        } else {
            self.single(fallback)
        }
    }

    fn peek(&self) -> char {
        self.source[self.pos..].chars().next().unwrap_or('\0')
    }

    fn peek_next(&self) -> char {
        let mut chars = self.source[self.pos..].chars();
        chars.next();
        chars.next().unwrap_or('\0')
    }

    fn advance(&mut self) {
        let Some(c) = self.source[self.pos..].chars().next() else {
            return;
        };
        self.pos += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.source.len()
    }
}

/// Yields every token up to and including `EndOfInput`, then stops.
impl Iterator for Scanner<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        if token.is_eof() {
            self.finished = true;
        }
        Some(token)
    }
}

impl FusedIterator for Scanner<'_> {}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
