//! Process entry point: parse the command line or exit, then print one line.

use anyhow::Result;
use std::io;

use echo_case::{emit, EchoArgs};

fn main() -> Result<()> {
    env_logger::init();

    let args = EchoArgs::parse_args_or_exit(std::env::args_os().skip(1));
    emit(&args, &mut io::stdout().lock())?;
    Ok(())
}
