//! Calculator session
//!
//! An [`Interpreter`] owns all state of one calculator session: the number and
//! operator stacks, the random generator and the comment flag. Lines are fed
//! in with [`Interpreter::eval_line`], which returns the printed lines instead
//! of writing them, together with a fatal condition if one ended the session.

mod error;
mod eval;
mod literal;
mod random;
mod stack;
mod value;

pub use error::Diagnostic;
pub use eval::{OpError, apply_operator};
pub use literal::{LiteralKind, classify, parse_literal};
pub use random::RandomState;
pub use stack::{MAX_STACK_DEPTH, NumberStack, Operator, OperatorStack};
pub use value::{MAX_NUM, MIN_NUM, Number};

use crate::error::Fatal;

/// Longest token accepted before the session crashes
pub const MAX_TOKEN_LENGTH: usize = 120;

/// Token that toggles comment mode
const COMMENT_TOGGLE: &str = "#";

/// Result of evaluating one input line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineOutput {
    /// Lines to print, in order, including those emitted before a fatal condition
    pub lines: Vec<String>,
    /// Set when the session must terminate
    pub fatal: Option<Fatal>,
}

/// The calculator
#[derive(Debug)]
pub struct Interpreter {
    numbers: NumberStack,
    operators: OperatorStack,
    random: RandomState,
    in_comment: bool,
    halted: Option<Fatal>,
}

impl Interpreter {
    pub fn new() -> Self {
        Interpreter {
            numbers: NumberStack::new(),
            operators: OperatorStack::new(),
            random: RandomState::new(),
            in_comment: false,
            halted: None,
        }
    }

    /// Evaluate one raw input line
    ///
    /// Once a fatal condition has been reported, every later call returns it
    /// again without evaluating anything.
    pub fn eval_line(&mut self, line: &str) -> LineOutput {
        if let Some(fatal) = self.halted {
            return LineOutput {
                lines: Vec::new(),
                fatal: Some(fatal),
            };
        }

        log::debug!("eval line {line:?}");
        let mut lines = Vec::new();
        let fatal = self.filter_comments(line, &mut lines).err();
        if let Some(fatal) = fatal {
            log::warn!("session terminated: {fatal:?}");
            self.halted = Some(fatal);
        }
        LineOutput { lines, fatal }
    }

    /// Skip commented tokens and evaluate the rest
    fn filter_comments(&mut self, line: &str, out: &mut Vec<String>) -> Result<(), Fatal> {
        for word in line.split_whitespace() {
            if word.chars().count() > MAX_TOKEN_LENGTH {
                return Err(Fatal::OversizedToken);
            }
            if word == COMMENT_TOGGLE {
                self.in_comment = !self.in_comment;
                continue;
            }
            if !self.in_comment {
                self.read_word(word, out)?;
            }
        }
        Ok(())
    }

    /// Stack contents bottom to top, truncated as they would be displayed
    pub fn stack(&self) -> Vec<i64> {
        self.numbers.iter().map(|n| n.truncate()).collect()
    }

    pub fn in_comment(&self) -> bool {
        self.in_comment
    }

    /// The fatal condition that ended this session, if any
    pub fn halted(&self) -> Option<Fatal> {
        self.halted
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
