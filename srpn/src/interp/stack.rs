//! Number and operator stacks

use super::error::Diagnostic;
use super::value::Number;

/// Maximum number of values the number stack holds
pub const MAX_STACK_DEPTH: usize = 23;

/// Binary operator, in decreasing precedence order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Power,
    Modulo,
    Divide,
    Multiply,
    Add,
    Subtract,
}

impl Operator {
    /// Rank used when no operator is pending: lower than every operator
    pub const LOWEST_RANK: usize = 6;

    /// Precedence rank, 0 is the highest
    pub fn rank(self) -> usize {
        match self {
            Operator::Power => 0,
            Operator::Modulo => 1,
            Operator::Divide => 2,
            Operator::Multiply => 3,
            Operator::Add => 4,
            Operator::Subtract => 5,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Power => '^',
            Operator::Modulo => '%',
            Operator::Divide => '/',
            Operator::Multiply => '*',
            Operator::Add => '+',
            Operator::Subtract => '-',
        }
    }
}

/// Bounded LIFO of saturated values
#[derive(Debug, Default)]
pub struct NumberStack {
    values: Vec<Number>,
}

impl NumberStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Saturate and push, rejecting the value when the stack is full
    pub fn push(&mut self, value: Number) -> Result<(), Diagnostic> {
        if self.values.len() == MAX_STACK_DEPTH {
            return Err(Diagnostic::StackOverflow);
        }
        self.values.push(value.saturate());
        Ok(())
    }

    /// Pop `(second-from-top, top)`, leaving the stack alone if it holds fewer than two
    pub fn pop_pair(&mut self) -> Option<(Number, Number)> {
        if self.values.len() < 2 {
            return None;
        }
        let top = self.values.pop()?;
        let below = self.values.pop()?;
        Some((below, top))
    }

    pub fn top(&self) -> Option<Number> {
        self.values.last().copied()
    }

    /// Values from bottom to top
    pub fn iter(&self) -> impl Iterator<Item = &Number> {
        self.values.iter()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Unbounded LIFO of operators awaiting evaluation
#[derive(Debug, Default)]
pub struct OperatorStack {
    pending: Vec<Operator>,
}

impl OperatorStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, op: Operator) {
        self.pending.push(op);
    }

    pub fn pop(&mut self) -> Option<Operator> {
        self.pending.pop()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
