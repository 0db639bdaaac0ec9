//! Lexer implementation using logos

mod token;

pub use token::Token;

use logos::Logos;
use serde::Serialize;
use std::ops::Range;

/// A token together with its byte range inside the word
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Lexeme {
    pub token: Token,
    pub start: usize,
    pub end: usize,
}

impl Lexeme {
    fn new(token: Token, span: Range<usize>) -> Self {
        Lexeme {
            token,
            start: span.start,
            end: span.end,
        }
    }
}

/// Tokenize a single whitespace-free word
///
/// A `-` is folded into the digit run that follows it when it is not itself
/// preceded by a digit, so `3-4` lexes as `3`, `-`, `4` while `--5` lexes as
/// `-`, `-5`.
pub fn tokenize(word: &str) -> Vec<Lexeme> {
    let mut lexemes: Vec<Lexeme> = Vec::new();
    let mut lexer = Token::lexer(word);
    let mut pending_minus: Option<Lexeme> = None;

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let token = result.unwrap_or_else(|_| Token::Other(lexer.slice().to_string()));

        if let Some(minus) = pending_minus.take() {
            match &token {
                Token::Digits(digits) if minus.end == span.start => {
                    lexemes.push(Lexeme::new(
                        Token::Digits(format!("-{digits}")),
                        minus.start..span.end,
                    ));
                    continue;
                }
                _ => lexemes.push(minus),
            }
        }

        let after_digits = lexemes.last().is_some_and(|l| l.token.is_digits());
        if token == Token::Minus && !after_digits {
            pending_minus = Some(Lexeme::new(token, span));
        } else {
            lexemes.push(Lexeme::new(token, span));
        }
    }

    if let Some(minus) = pending_minus {
        lexemes.push(minus);
    }

    lexemes
}
