//! Expression evaluator

use super::Interpreter;
use super::error::Diagnostic;
use super::literal::parse_literal;
use super::stack::Operator;
use super::value::{MIN_NUM, Number};
use crate::error::Fatal;
use crate::lexer::{Token, tokenize};

/// Why an operator produced no result
#[derive(Debug, Clone, PartialEq)]
pub enum OpError {
    /// Operands go back on the stack and the message is printed
    Rejected(Diagnostic),
    /// The session ends
    Fatal(Fatal),
}

impl From<Fatal> for OpError {
    fn from(fatal: Fatal) -> Self {
        OpError::Fatal(fatal)
    }
}

/// Apply `op` to `(num_1, num_2)` where `num_2` was on top of the stack
pub fn apply_operator(op: Operator, num_1: Number, num_2: Number) -> Result<Number, OpError> {
    match op {
        Operator::Add => Ok(num_1.plus(num_2)),
        Operator::Subtract => Ok(num_1.minus(num_2)),
        Operator::Multiply => Ok(num_1.times(num_2)),
        Operator::Divide => divide(num_1, num_2),
        Operator::Power => power(num_1, num_2),
        Operator::Modulo => modulo(num_1, num_2),
    }
}

fn divide(num_1: Number, num_2: Number) -> Result<Number, OpError> {
    if num_2.is_zero() {
        return Err(OpError::Rejected(Diagnostic::DivideByZero));
    }
    Ok(Number::Real(num_1.as_f64() / num_2.as_f64()))
}

fn power(num_1: Number, num_2: Number) -> Result<Number, OpError> {
    if num_2.is_negative() {
        return Err(OpError::Rejected(Diagnostic::NegativePower));
    }
    // No real result: yields the minimum value
    if num_1.is_negative() && !num_2.is_integral() {
        return Ok(Number::Int(MIN_NUM));
    }
    match (num_1, num_2) {
        (Number::Int(base), Number::Int(exp)) => {
            let exp = u32::try_from(exp).unwrap_or(u32::MAX);
            Ok(Number::Int(base.saturating_pow(exp)))
        }
        (base, exp) => Ok(Number::Real(base.as_f64().powf(exp.as_f64()))),
    }
}

fn modulo(num_1: Number, num_2: Number) -> Result<Number, OpError> {
    if num_1.is_zero() {
        return Err(OpError::Rejected(Diagnostic::DivideByZero));
    }
    let (dividend, divisor) = (num_1.truncate(), num_2.truncate());
    if divisor == 0 {
        return Err(Fatal::ModuloByZero.into());
    }

    // Floored remainder (sign follows the divisor), then shifted per operand sign
    let mut result = dividend % divisor;
    if result != 0 && (result < 0) != (divisor < 0) {
        result += divisor;
    }
    if result != 0 {
        if dividend < 0 {
            result -= divisor.abs();
        }
        if divisor < 0 {
            result += divisor.abs();
        }
    }
    Ok(Number::Int(result))
}

impl Interpreter {
    /// Evaluate one whitespace-free word
    pub(super) fn read_word(&mut self, word: &str, out: &mut Vec<String>) -> Result<(), Fatal> {
        let mut precedence = Operator::LOWEST_RANK;

        for lexeme in tokenize(word) {
            match lexeme.token {
                Token::Digits(text) => {
                    if let Some(value) = parse_literal(&text) {
                        self.push(value, out);
                    } else {
                        log::debug!("discarding invalid octal literal {text:?}");
                    }
                }
                Token::Caret => precedence = self.precedence_checker(Operator::Power, precedence, out)?,
                Token::Percent => precedence = self.precedence_checker(Operator::Modulo, precedence, out)?,
                Token::Slash => precedence = self.precedence_checker(Operator::Divide, precedence, out)?,
                Token::Star => precedence = self.precedence_checker(Operator::Multiply, precedence, out)?,
                Token::Plus => precedence = self.precedence_checker(Operator::Add, precedence, out)?,
                Token::Minus => precedence = self.precedence_checker(Operator::Subtract, precedence, out)?,
                Token::Display => {
                    self.flush_operators(out)?;
                    self.display_stack(out);
                }
                Token::Random => {
                    let value = self.random.next_value();
                    self.push(Number::Int(value), out);
                }
                Token::Peek => match self.numbers.top() {
                    Some(top) => out.push(top.to_string()),
                    None => out.push(Diagnostic::StackEmpty.to_string()),
                },
                Token::Other(text) => out.push(Diagnostic::Unrecognised(text).to_string()),
            }
        }

        // Pending operators never leak into the next word
        self.flush_operators(out)
    }

    /// Flush pending operators if `op` binds looser than the current precedence,
    /// then queue `op`. Returns the new current precedence.
    fn precedence_checker(
        &mut self,
        op: Operator,
        precedence: usize,
        out: &mut Vec<String>,
    ) -> Result<usize, Fatal> {
        let rank = op.rank();
        if rank > precedence {
            self.flush_operators(out)?;
        }
        self.operators.push(op);
        Ok(rank)
    }

    /// Evaluate every pending operator, most recent first
    pub(super) fn flush_operators(&mut self, out: &mut Vec<String>) -> Result<(), Fatal> {
        while let Some(op) = self.operators.pop() {
            let Some((num_1, num_2)) = self.numbers.pop_pair() else {
                out.push(Diagnostic::StackUnderflow.to_string());
                continue;
            };
            log::trace!("applying {} to {num_1:?} {num_2:?}", op.symbol());
            match apply_operator(op, num_1, num_2) {
                Ok(result) => self.push(result, out),
                Err(OpError::Rejected(diag)) => {
                    self.push(num_1, out);
                    self.push(num_2, out);
                    out.push(diag.to_string());
                }
                Err(OpError::Fatal(fatal)) => return Err(fatal),
            }
        }
        Ok(())
    }

    fn push(&mut self, value: Number, out: &mut Vec<String>) {
        if let Err(diag) = self.numbers.push(value) {
            out.push(diag.to_string());
        }
    }

    /// Print the stack bottom to top; an empty stack shows the minimum value
    fn display_stack(&self, out: &mut Vec<String>) {
        if self.numbers.is_empty() {
            out.push(MIN_NUM.to_string());
            return;
        }
        out.extend(self.numbers.iter().map(Number::to_string));
    }
}
