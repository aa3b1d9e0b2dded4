//! Transform pipeline and runner entry points
//!
//! The requested transforms run in the fixed order upper, lower, title. Each
//! one reassigns the working text, so a later transform sees the result of
//! the earlier ones rather than the original input.

use crate::args::EchoArgs;
use crate::case::{lowercase, titlecase, uppercase};
use crate::error::Result;
use log::{debug, trace};
use std::ffi::OsString;
use std::io::Write;

/// A single case transformation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    Upper,
    Lower,
    Title,
}

impl Transform {
    /// Application order. Later transforms overwrite earlier ones, so title
    /// case wins whenever it is requested.
    pub const ORDER: [Transform; 3] = [Transform::Upper, Transform::Lower, Transform::Title];

    pub fn apply(self, text: &str) -> String {
        match self {
            Transform::Upper => uppercase(text),
            Transform::Lower => lowercase(text),
            Transform::Title => titlecase(text),
        }
    }

    fn requested(self, args: &EchoArgs) -> bool {
        match self {
            Transform::Upper => args.upper,
            Transform::Lower => args.lower,
            Transform::Title => args.title,
        }
    }
}

/// The transforms requested by `args`, in application order.
pub fn pipeline(args: &EchoArgs) -> Vec<Transform> {
    Transform::ORDER
        .into_iter()
        .filter(|t| t.requested(args))
        .collect()
}

/// Apply the requested transforms to `text`, each one working on the
/// previous result.
pub fn transform(text: &str, upper: bool, lower: bool, title: bool) -> String {
    let args = EchoArgs {
        text: text.to_string(),
        upper,
        lower,
        title,
    };
    apply_args(&args)
}

/// Run the pipeline for parsed `args` over their text.
pub fn apply_args(args: &EchoArgs) -> String {
    pipeline(args)
        .into_iter()
        .fold(args.text.clone(), |working, step| {
            let next = step.apply(&working);
            trace!("{:?}: {:?} -> {:?}", step, working, next);
            next
        })
}

/// Parse `args` (program name excluded) and write the transformed line to
/// `out`.
///
/// Never terminates the process: help requests and usage errors come back
/// as [`EchoError::Usage`](crate::EchoError::Usage).
pub fn run<I, T, W>(args: I, out: &mut W) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: Write,
{
    let args = EchoArgs::try_parse_args(args)?;
    emit(&args, out)
}

/// Write the transformed text of already parsed `args` as one line.
pub fn emit<W: Write>(args: &EchoArgs, out: &mut W) -> Result<()> {
    debug!("parsed arguments: {:?}", args);

    writeln!(out, "{}", apply_args(args))?;
    out.flush()?;
    Ok(())
}

/// Like [`run`], but returns the emitted line (newline included).
pub fn run_to_string<I, T>(args: I) -> Result<String>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let mut buf = Vec::new();
    run(args, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags(upper: bool, lower: bool, title: bool) -> EchoArgs {
        EchoArgs {
            text: String::new(),
            upper,
            lower,
            title,
        }
    }

    #[test]
    fn test_pipeline_order() {
        assert!(pipeline(&flags(false, false, false)).is_empty());
        assert_eq!(
            pipeline(&flags(true, true, true)),
            vec![Transform::Upper, Transform::Lower, Transform::Title]
        );
        assert_eq!(
            pipeline(&flags(false, true, true)),
            vec![Transform::Lower, Transform::Title]
        );
        assert_eq!(pipeline(&flags(true, false, false)), vec![Transform::Upper]);
    }

    #[test]
    fn test_transform_identity() {
        let text = "Was soll die ganze Aufregung?";
        assert_eq!(transform(text, false, false, false), text);
    }

    #[test]
    fn test_transform_single_flags() {
        assert_eq!(transform("hello world", true, false, false), "HELLO WORLD");
        assert_eq!(transform("HELLO WORLD", false, true, false), "hello world");
        assert_eq!(transform("hello world", false, false, true), "Hello World");
    }

    #[test]
    fn test_later_transforms_overwrite() {
        assert_eq!(transform("hElLo wORld", true, true, true), "Hello World");
        assert_eq!(transform("hello world", true, false, true), "Hello World");
        // Lower runs after upper.
        assert_eq!(transform("Hello World", true, true, false), "hello world");
    }

    #[test]
    fn test_lower_sees_previous_result() {
        // Uppercasing first expands 'ß', which lower case does not fold back.
        assert_eq!(transform("ß", true, true, false), "ss");
        assert_eq!(transform("ß", false, true, false), "ß");
        assert_eq!(transform("ßa", true, false, true), "Ssa");
    }

    #[test]
    fn test_run_writes_line() {
        let mut out = Vec::new();
        run(["-u", "hello world"], &mut out).unwrap();
        assert_eq!(out, b"HELLO WORLD\n");
    }

    #[test]
    fn test_run_usage_error_writes_nothing() {
        let mut out = Vec::new();
        let err = run(Vec::<String>::new(), &mut out).unwrap_err();
        assert!(!err.is_help());
        assert!(out.is_empty());
    }

    #[test]
    fn test_run_help_does_not_transform() {
        let mut out = Vec::new();
        let err = run(["--help", "-u", "text"], &mut out).unwrap_err();
        assert!(err.is_help());
        assert!(out.is_empty());
    }
}
