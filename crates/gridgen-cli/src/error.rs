use std::fmt;
use std::process::ExitCode;

/// Process exit status of `gridgen`; 0 is success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Rejected by clap, or a flag value out of range (`text --height 0`).
    Usage = 1,
    /// A board or catalog file is unreadable, unparseable, or fails
    /// validation (bad pitch, empty grid, duplicate footprint id).
    Input = 2,
    /// Rendered JSON could not be written to `--output` or stdout.
    Processing = 3,
}

impl ErrorCode {
    pub fn exit_code(self) -> ExitCode {
        ExitCode::from(self as u8)
    }
}

/// A failed subcommand. The message is printed once, prefixed with `Error:`.
#[derive(Debug)]
pub struct CliError {
    pub code: ErrorCode,
    pub message: String,
}

impl CliError {
    pub fn usage(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::Usage,
            message: message.into(),
        }
    }

    /// Flattens the `anyhow` context chain into `outer: inner` form so the
    /// offending file path and the parser error appear on one line.
    pub fn input(err: impl Into<anyhow::Error>) -> Self {
        Self::chained(ErrorCode::Input, err.into())
    }

    pub fn processing(err: impl Into<anyhow::Error>) -> Self {
        Self::chained(ErrorCode::Processing, err.into())
    }

    fn chained(code: ErrorCode, err: anyhow::Error) -> Self {
        Self {
            code,
            message: format!("{err:#}"),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}
