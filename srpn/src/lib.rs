//! SRPN Calculator Library
//!
//! Saturating reverse Polish notation calculator with infix operator
//! precedence, octal literals and a deterministic random generator.

pub mod error;
pub mod interp;
pub mod lexer;
pub mod repl;

pub use error::{Fatal, Result, SrpnError};
pub use interp::{Interpreter, LineOutput};
