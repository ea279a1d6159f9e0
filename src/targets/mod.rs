//! Target discovery module.
//!
//! This module locates the active configuration root among the candidate
//! directories and indexes the target files it contains by destination
//! address, one map per IP version.

pub mod diagnostics;
pub mod index;
pub mod resolver;

// Re-export key types and functions for easier access
pub use diagnostics::{Diagnostic, DiagnosticSink, LogSink};
pub use index::{address_token, index_targets, TargetIndex};
pub use resolver::{resolve_config_path, resolve_config_root};

use std::path::{Path, PathBuf};

use crate::error::TargetError;

/// Resolve the configuration root from `candidates` and index it.
///
/// Returns the root that was used alongside its index. Both resolution and
/// indexing report to the same `sink`.
pub fn discover_targets<P, S>(candidates: &[P], mut sink: S) -> Result<(PathBuf, TargetIndex), TargetError>
where
    P: AsRef<Path>,
    S: DiagnosticSink,
{
    let root = resolve_config_root(candidates, &mut sink)?;
    let index = index_targets(&root, &mut sink)?;
    Ok((root, index))
}
