//! Error types for the echo-case library
//!
//! Argument parsing is the only step that can reject input. Writing the
//! result line is the only other fallible operation.

use clap::error::ErrorKind;
use thiserror::Error;

/// The main error type for all library operations
#[derive(Error, Debug)]
pub enum EchoError {
    /// Missing positional, unknown flag, malformed flag value, or a help
    /// request that short-circuits the run
    #[error("{0}")]
    Usage(#[from] clap::Error),

    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, EchoError>;

impl EchoError {
    /// True when the error is a help request rather than a failure
    pub fn is_help(&self) -> bool {
        match self {
            Self::Usage(err) => matches!(
                err.kind(),
                ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            ),
            Self::Io(_) => false,
        }
    }

    /// Process exit code this error maps to
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Usage(err) => err.exit_code(),
            Self::Io(_) => 1,
        }
    }

    /// Print the error the way the command line expects and terminate.
    ///
    /// Help goes to stdout with status 0, usage errors go to stderr with
    /// the usage-error status.
    pub fn exit(self) -> ! {
        match self {
            Self::Usage(err) => err.exit(),
            Self::Io(err) => {
                eprintln!("error: {err}");
                std::process::exit(1)
            }
        }
    }
}
