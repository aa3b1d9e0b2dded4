//! Command-line argument definitions and parsing
//!
//! One required positional and three independent case switches. Help and
//! usage text are derived by clap from the doc comments below.

use crate::error::Result;
use clap::{CommandFactory, Parser};
use std::ffi::OsString;

/// Name used as the program token when parsing an argument list that
/// excludes it.
pub const BIN_NAME: &str = "echo-case";

/// Parsed command line: the text and its case switches.
#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
#[command(
    name = BIN_NAME,
    about = "Perform transformation on input text.",
    long_about = None,
    args_override_self = true,
    infer_long_args = true
)]
pub struct EchoArgs {
    /// text to echo
    #[arg(allow_negative_numbers = true)]
    pub text: String,

    /// convert text to uppercase
    #[arg(short, long)]
    pub upper: bool,

    /// convert text to lowercase
    #[arg(short, long)]
    pub lower: bool,

    /// convert text to titlecase
    #[arg(short, long)]
    pub title: bool,
}

impl EchoArgs {
    /// Parse an argument list that does not include the program name.
    pub fn try_parse_args<I, T>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let argv = std::iter::once(OsString::from(BIN_NAME))
            .chain(args.into_iter().map(Into::into));
        Ok(Self::try_parse_from(argv)?)
    }

    /// Parse an argument list, printing help or a usage error and
    /// terminating the process when parsing does not yield arguments.
    pub fn parse_args_or_exit<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::try_parse_args(args).unwrap_or_else(|err| err.exit())
    }
}

/// Returns the configured parser for the command line surface.
pub fn create_parser() -> clap::Command {
    EchoArgs::command()
}
