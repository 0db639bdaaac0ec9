//! Recoverable calculator errors

use thiserror::Error;

/// A recoverable error, reported as one output line
///
/// The display text is exactly what the calculator prints; evaluation carries
/// on with the next token afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Diagnostic {
    #[error("Divide by 0.")]
    DivideByZero,

    #[error("Stack empty.")]
    StackEmpty,

    #[error("Negative power.")]
    NegativePower,

    #[error("Stack overflow.")]
    StackOverflow,

    #[error("Stack underflow.")]
    StackUnderflow,

    #[error("Unrecognised operator or operand \"{0}\".")]
    Unrecognised(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_catalog() {
        assert_eq!(Diagnostic::DivideByZero.to_string(), "Divide by 0.");
        assert_eq!(Diagnostic::StackEmpty.to_string(), "Stack empty.");
        assert_eq!(Diagnostic::NegativePower.to_string(), "Negative power.");
        assert_eq!(Diagnostic::StackOverflow.to_string(), "Stack overflow.");
        assert_eq!(Diagnostic::StackUnderflow.to_string(), "Stack underflow.");
    }

    #[test]
    fn test_unrecognised_quotes_token() {
        let err = Diagnostic::Unrecognised("x".to_string());
        assert_eq!(err.to_string(), "Unrecognised operator or operand \"x\".");
    }
}
