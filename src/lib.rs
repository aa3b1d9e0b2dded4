//! echo-case: an enhanced `echo` with case transformations
//!
//! The crate prints its single text argument, optionally transformed by
//! `--upper`, `--lower` and `--title`. The switches are independent and may
//! be combined; they are always applied in the fixed order upper, lower,
//! title, each one working on the previous result.
//!
//! # Quick Start
//!
//! ```rust
//! use echo_case::{run_to_string, transform, Result};
//!
//! fn main() -> Result<()> {
//!     // Pure core, no parsing or output
//!     assert_eq!(transform("hello world", false, false, true), "Hello World");
//!
//!     // Full command line run against an in-memory buffer
//!     let line = run_to_string(["-tul", "hElLo wORld"])?;
//!     assert_eq!(line, "Hello World\n");
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - [`args`]: the clap-derived command line surface
//! - [`case`]: upper, lower and title case primitives
//! - [`ops`]: the transform pipeline and the runner entry points
//! - [`error`]: the error type shared by parsing and output

// Public API exports
pub use args::{create_parser, EchoArgs};
pub use case::{lowercase, titlecase, uppercase};
pub use error::{EchoError, Result};
pub use ops::{apply_args, emit, pipeline, run, run_to_string, transform, Transform};

pub mod args;
pub mod case;
pub mod error;
pub mod ops;
