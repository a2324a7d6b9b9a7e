use crate::error::BranchError;
use std::io::{self, BufRead, Write};

/// Trait for interactive terminal I/O
pub trait TerminalOperations: Send + Sync {
    /// Print `message` without a trailing newline and read one line of input.
    ///
    /// Returns `None` when input is closed before a line is read. The returned
    /// line has its line ending removed.
    fn prompt(&self, message: &str) -> Result<Option<String>, BranchError>;

    /// Print a full line to standard output
    fn print_line(&self, message: &str) -> Result<(), BranchError>;
}

/// Terminal operations backed by the process stdin and stdout
pub struct DefaultTerminalOperations;

impl DefaultTerminalOperations {
    /// Whether stdout is attached to a terminal
    pub fn stdout_is_tty() -> bool {
        atty::is(atty::Stream::Stdout)
    }
}

impl TerminalOperations for DefaultTerminalOperations {
    fn prompt(&self, message: &str) -> Result<Option<String>, BranchError> {
        {
            let mut stdout = io::stdout().lock();
            write!(stdout, "{message}")?;
            stdout.flush()?;
        }
        read_answer(&mut io::stdin().lock())
    }

    fn print_line(&self, message: &str) -> Result<(), BranchError> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{message}")?;
        Ok(())
    }
}

/// Read one line, stripping the line ending. `None` on end of input.
pub fn read_answer(reader: &mut impl BufRead) -> Result<Option<String>, BranchError> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed_len);
    Ok(Some(line))
}
