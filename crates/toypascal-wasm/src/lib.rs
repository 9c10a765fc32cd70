//! WASM bindings for the Toy Pascal lexer.
//!
//! Exposes tokenization to JavaScript via wasm-bindgen for the browser
//! playground. Tokens cross the boundary as plain objects
//! `{ kind, text, line, column }`.

use toypascal_lexer::{LexerError, Scanner, Token, TokenKind};
use wasm_bindgen::prelude::*;

/// Tokenize Toy Pascal source.
///
/// Returns a JS array of token objects ending with the `EndOfInput` token.
#[wasm_bindgen]
pub fn tokenize(source: &str) -> Result<JsValue, JsError> {
    let tokens = Scanner::tokenize(source);
    serde_wasm_bindgen::to_value(&tokens).map_err(|e| JsError::new(&e.to_string()))
}

/// List every illegal character as a `Lexer error at line L, column C: ...`
/// message. An empty array means the source lexes cleanly.
#[wasm_bindgen]
pub fn diagnostics(source: &str) -> js_sys::Array {
    diagnostic_messages(&Scanner::tokenize(source))
        .into_iter()
        .map(JsValue::from)
        .collect()
}

/// Get the lexer version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn diagnostic_messages(tokens: &[Token]) -> Vec<String> {
    tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Illegal)
        .map(|t| LexerError::from_token(t).to_string())
        .collect()
}
