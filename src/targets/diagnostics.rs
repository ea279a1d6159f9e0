//! Diagnostic events raised while resolving and scanning target directories.
//!
//! Nothing here aborts a scan. Events are handed to a [`DiagnosticSink`]
//! chosen by the caller: [`LogSink`] forwards them to the `log` facade and
//! a `Vec<Diagnostic>` simply collects them.

use std::fmt;
use std::path::PathBuf;

use log::Level;

use crate::error::format_candidates;
use crate::ip::InvalidAddress;

/// A single advisory event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// None of the candidate configuration roots exist
    ConfigDirectoryNotFound { candidates: Vec<PathBuf> },
    /// Entry name does not follow `<address>-<suffix>`
    UnrecognizedFilename { file_name: String },
    /// Entry name has an address prefix that is not an IP literal
    InvalidAddress {
        file_name: String,
        error: InvalidAddress,
    },
    /// A later entry replaced the path indexed for the same address
    DuplicateAddress {
        address: String,
        replaced: PathBuf,
        path: PathBuf,
    },
}

impl Diagnostic {
    /// Log level the event is reported at by [`LogSink`]
    pub fn level(&self) -> Level {
        match self {
            Diagnostic::ConfigDirectoryNotFound { .. } => Level::Error,
            Diagnostic::InvalidAddress { .. } => Level::Warn,
            Diagnostic::UnrecognizedFilename { .. } => Level::Info,
            Diagnostic::DuplicateAddress { .. } => Level::Debug,
        }
    }

    /// File name the event refers to, if any
    pub fn file_name(&self) -> Option<&str> {
        match self {
            Diagnostic::UnrecognizedFilename { file_name }
            | Diagnostic::InvalidAddress { file_name, .. } => Some(file_name),
            _ => None,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::ConfigDirectoryNotFound { candidates } => write!(
                f,
                "E: No configuration directory found in {}",
                format_candidates(candidates)
            ),
            Diagnostic::UnrecognizedFilename { file_name } => {
                write!(f, "I: Ignored target file '{}'", file_name)
            }
            Diagnostic::InvalidAddress { file_name, error } => {
                write!(f, "W: Skipped target file '{}': {}", file_name, error)
            }
            Diagnostic::DuplicateAddress {
                address,
                replaced,
                path,
            } => write!(
                f,
                "D: Target {} now uses '{}' instead of '{}'",
                address,
                path.display(),
                replaced.display()
            ),
        }
    }
}

/// Receiver for diagnostic events
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Collects every event, in the order reported
impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn report(&mut self, diagnostic: Diagnostic) {
        (**self).report(diagnostic);
    }
}

/// Forwards events to the `log` facade at [`Diagnostic::level`]
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        log::log!(diagnostic.level(), "{}", diagnostic);
    }
}
