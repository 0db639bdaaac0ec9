//! Token definitions

use logos::Logos;
use serde::Serialize;

/// SRPN Token
///
/// Words reach the lexer already split on whitespace, so every character of a
/// word lands in exactly one token: digit runs, the six operators, the three
/// commands, or `Other` for anything the calculator does not understand.
#[derive(Logos, Debug, Clone, PartialEq, Serialize)]
pub enum Token {
    /// Decimal digits, optionally carrying a folded-in unary minus
    #[regex(r"[0-9]+", |lex| lex.slice().to_string())]
    Digits(String),

    // Operators, highest precedence first
    #[token("^")]
    Caret,
    #[token("%")]
    Percent,
    #[token("/")]
    Slash,
    #[token("*")]
    Star,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,

    // Commands
    #[token("d")]
    Display,
    #[token("r")]
    Random,
    #[token("=")]
    Peek,

    /// Any single character that is neither a digit, operator nor command
    #[regex(r"[^0-9\^%/*+\-dr=]", |lex| lex.slice().to_string())]
    Other(String),
}

impl Token {
    /// Whether this token is a digit run
    pub fn is_digits(&self) -> bool {
        matches!(self, Token::Digits(_))
    }
}
