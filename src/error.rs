//! Error types shared by the resolver and the indexer.

use std::path::PathBuf;

/// Hard failures while locating or scanning a configuration root.
///
/// Per-entry problems (unrecognized names, bad addresses) are never
/// returned here; they go to the [`DiagnosticSink`](crate::targets::DiagnosticSink).
#[derive(Debug, thiserror::Error)]
pub enum TargetError {
    #[error("No configuration directory found in {}", format_candidates(.candidates))]
    ConfigDirectoryNotFound { candidates: Vec<PathBuf> },

    #[error("Failed to list target directory '{}': {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read an entry of '{}': {source}", .path.display())]
    ReadEntry {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Render candidates the way they were attempted: `["./targets", ...]`.
pub(crate) fn format_candidates(candidates: &[PathBuf]) -> String {
    let quoted: Vec<String> = candidates
        .iter()
        .map(|path| format!("{:?}", path.display().to_string()))
        .collect();
    format!("[{}]", quoted.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_lists_every_candidate() {
        let err = TargetError::ConfigDirectoryNotFound {
            candidates: vec![PathBuf::from("./targets"), PathBuf::from("/etc/fakeroute/targets")],
        };
        assert_eq!(
            err.to_string(),
            r#"No configuration directory found in ["./targets", "/etc/fakeroute/targets"]"#
        );
    }

    #[test]
    fn test_not_found_with_no_candidates() {
        let err = TargetError::ConfigDirectoryNotFound { candidates: Vec::new() };
        assert_eq!(err.to_string(), "No configuration directory found in []");
    }
}
