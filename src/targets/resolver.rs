//! Configuration root resolution.
//!
//! The active root is the first candidate that exists on disk. Only
//! existence is checked; a candidate that exists but is unreadable is still
//! picked and the failure surfaces when it is indexed.

use std::path::{Path, PathBuf};

use log::debug;

use super::diagnostics::{Diagnostic, DiagnosticSink};
use crate::config::expand_home;
use crate::error::TargetError;

/// Return the first existing candidate, in list order.
///
/// A leading `~` is expanded against `$HOME` before checking. Returns `None`
/// when no candidate exists.
pub fn resolve_config_path<P: AsRef<Path>>(candidates: &[P]) -> Option<PathBuf> {
    candidates.iter().find_map(|candidate| {
        let path = expand_home(candidate.as_ref());
        if path.exists() {
            debug!("Using configuration directory {:?}", path);
            Some(path)
        } else {
            debug!("Configuration directory {:?} does not exist", path);
            None
        }
    })
}

/// Resolve the configuration root, turning absence into a hard error.
///
/// The absence is also reported to `sink` before the error is returned.
pub fn resolve_config_root<P, S>(candidates: &[P], mut sink: S) -> Result<PathBuf, TargetError>
where
    P: AsRef<Path>,
    S: DiagnosticSink,
{
    if let Some(path) = resolve_config_path(candidates) {
        return Ok(path);
    }

    let candidates: Vec<PathBuf> = candidates
        .iter()
        .map(|candidate| candidate.as_ref().to_path_buf())
        .collect();
    sink.report(Diagnostic::ConfigDirectoryNotFound {
        candidates: candidates.clone(),
    });
    Err(TargetError::ConfigDirectoryNotFound { candidates })
}
