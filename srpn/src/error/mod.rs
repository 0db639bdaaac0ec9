//! Error types and reporting

use thiserror::Error;

/// Result type alias for the driver
pub type Result<T> = std::result::Result<T, SrpnError>;

/// Exit status reported for a simulated floating point exception
pub const SIGFPE_STATUS: i32 = 136;
/// Exit status reported for a simulated segmentation fault
pub const SIGSEGV_STATUS: i32 = 139;

/// Unrecoverable condition that ends the calculator session
///
/// The display text is the crash signature printed to stdout; the driver is
/// responsible for actually terminating with [`Fatal::exit_code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Fatal {
    /// `%` with a (truncated) divisor of zero
    #[error("main.sh: line 5:    20 Floating point exception(core dumped) ./srpn/srpn")]
    ModuloByZero,

    /// A whitespace-delimited token longer than the input buffer
    #[error("main.sh: line 5:    34 Segmentation fault      (core dumped) ./srpn/srpn")]
    OversizedToken,
}

impl Fatal {
    pub fn exit_code(self) -> i32 {
        match self {
            Self::ModuloByZero => SIGFPE_STATUS,
            Self::OversizedToken => SIGSEGV_STATUS,
        }
    }

    /// Trailer line reported on stderr before exiting
    pub fn exit_message(self) -> String {
        format!("exit status {}", self.exit_code())
    }
}

/// Driver error (input, output, or line editor failure)
#[derive(Debug, Error)]
pub enum SrpnError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line editor error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
