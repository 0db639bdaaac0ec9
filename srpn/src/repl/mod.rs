//! REPL (Read-Eval-Print Loop) for SRPN
//!
//! Two front ends share one [`Interpreter`] contract: an interactive line
//! editor for terminals and a plain line reader for pipes and script files.

use crate::error::{Fatal, Result};
use crate::interp::{Interpreter, LineOutput};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::io::{BufRead, Write};
use std::path::PathBuf;

const PROMPT: &str = "";
const HISTORY_FILE: &str = ".srpn_history";

/// Interactive session backed by a line editor
pub struct Repl {
    editor: DefaultEditor,
    interpreter: Interpreter,
    history_path: Option<PathBuf>,
}

impl Repl {
    /// Create a new REPL, loading history unless `use_history` is false
    pub fn new(use_history: bool) -> Result<Self> {
        let editor = DefaultEditor::new()?;
        let history_path = if use_history {
            dirs_home().map(|h| h.join(HISTORY_FILE))
        } else {
            None
        };

        let mut repl = Repl {
            editor,
            interpreter: Interpreter::new(),
            history_path,
        };

        if let Some(ref path) = repl.history_path
            && let Err(err) = repl.editor.load_history(path)
        {
            log::debug!("no history loaded from {}: {err}", path.display());
        }

        Ok(repl)
    }

    /// Run until end of input or a fatal condition
    pub fn run(&mut self) -> Result<Option<Fatal>> {
        let stdout = std::io::stdout();
        let mut fatal = None;

        loop {
            match self.editor.readline(PROMPT) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        let _ = self.editor.add_history_entry(line.as_str());
                    }
                    let output = self.interpreter.eval_line(&line);
                    fatal = emit(&mut stdout.lock(), &output)?;
                    if fatal.is_some() {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    log::debug!("interrupted");
                    continue;
                }
                Err(ReadlineError::Eof) => break,
                Err(err) => return Err(err.into()),
            }
        }

        if let Some(ref path) = self.history_path
            && let Err(err) = self.editor.save_history(path)
        {
            log::warn!("could not save history to {}: {err}", path.display());
        }

        Ok(fatal)
    }
}

/// Evaluate every line of `reader`, writing results to `writer`
///
/// Stops at the first fatal condition, which is returned so the caller can
/// terminate with its exit status.
pub fn run_lines<R: BufRead, W: Write>(reader: R, writer: &mut W) -> Result<Option<Fatal>> {
    let mut interpreter = Interpreter::new();
    for line in reader.lines() {
        let output = interpreter.eval_line(&line?);
        if let Some(fatal) = emit(writer, &output)? {
            return Ok(Some(fatal));
        }
    }
    Ok(None)
}

/// Write printed lines, then the crash signature if the line was fatal
fn emit<W: Write>(writer: &mut W, output: &LineOutput) -> Result<Option<Fatal>> {
    for line in &output.lines {
        writeln!(writer, "{line}")?;
    }
    if let Some(fatal) = output.fatal {
        writeln!(writer, "{fatal}")?;
    }
    writer.flush()?;
    Ok(output.fatal)
}

/// Get home directory
fn dirs_home() -> Option<PathBuf> {
    #[cfg(windows)]
    {
        std::env::var("USERPROFILE").ok().map(PathBuf::from)
    }
    #[cfg(not(windows))]
    {
        std::env::var("HOME").ok().map(PathBuf::from)
    }
}
