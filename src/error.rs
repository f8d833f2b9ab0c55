//! Error types for graph construction and configuration.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type used throughout the crate.
pub type Result<T, E = PipeError> = std::result::Result<T, E>;

/// Top-level error type.
///
/// Every failure is fatal for a run: nothing is recovered locally and no
/// partial graph or summary is produced once one of these is returned.
#[derive(Debug, Error)]
pub enum PipeError {
    /// The input file could not be read.
    #[error("failed to read input `{}`", path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// A line of the input does not follow `<root> <-> <n1>, <n2>, ...`.
    #[error("line {line}: {kind}")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// What was wrong with the line.
        kind: ParseErrorKind,
    },

    /// The configuration file could not be read.
    #[error("failed to read config `{}`", path.display())]
    ConfigIo {
        /// Path of the configuration file.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// The configuration file is not valid JSON for [`Config`](crate::Config).
    #[error("invalid config `{}`", path.display())]
    Config {
        /// Path of the configuration file.
        path: PathBuf,
        /// Deserialization failure.
        #[source]
        source: serde_json::Error,
    },

    /// A textual option did not name a known variant.
    #[error("unknown {what} `{value}` (expected one of: {expected})")]
    InvalidChoice {
        /// Name of the option kind.
        what: &'static str,
        /// Rejected value.
        value: String,
        /// Accepted spellings.
        expected: &'static str,
    },
}

/// Reasons a single input line is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// The line has no ` <-> ` separator.
    #[error("missing ` <-> ` separator")]
    MissingSeparator,
    /// The separator occurs more than once.
    #[error("more than one ` <-> ` separator")]
    ExtraSeparator,
}

impl ParseErrorKind {
    /// Attaches a 1-based line number.
    pub fn at_line(self, line: usize) -> PipeError {
        PipeError::Parse { line, kind: self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_message_includes_line() {
        let err = ParseErrorKind::MissingSeparator.at_line(7);
        assert_eq!(err.to_string(), "line 7: missing ` <-> ` separator");

        let err = ParseErrorKind::ExtraSeparator.at_line(2);
        assert_eq!(err.to_string(), "line 2: more than one ` <-> ` separator");
    }

    #[test]
    fn io_error_keeps_source() {
        let err = PipeError::Io {
            path: PathBuf::from("input.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(err.to_string(), "failed to read input `input.txt`");
        assert!(std::error::Error::source(&err).is_some());
    }
}
