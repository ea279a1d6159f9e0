//! Target directory indexing.
//!
//! Every entry directly inside the configuration root whose name looks like
//! `<address>-<suffix>` is a target file. The address token picks the map
//! (IPv4 or IPv6) and becomes the key, verbatim; the suffix is ignored.

use std::collections::BTreeMap;
use std::fs;
use std::net::IpAddr;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use log::debug;
use regex::Regex;
use serde::Serialize;

use super::diagnostics::{Diagnostic, DiagnosticSink};
use crate::error::TargetError;
use crate::ip::{classify, classify_addr, sort_ipv4, IpVersion, SortError};

static TARGET_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<ip>[0-9A-Za-z.:]+)-").expect("Invalid target name regex")
});

/// Address to target file mappings, one per IP version
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TargetIndex {
    ipv4: BTreeMap<String, PathBuf>,
    ipv6: BTreeMap<String, PathBuf>,
}

impl TargetIndex {
    /// IPv4 address token -> target file
    pub fn ipv4(&self) -> &BTreeMap<String, PathBuf> {
        &self.ipv4
    }

    /// IPv6 address token -> target file
    pub fn ipv6(&self) -> &BTreeMap<String, PathBuf> {
        &self.ipv6
    }

    /// Total number of indexed targets
    pub fn len(&self) -> usize {
        self.ipv4.len() + self.ipv6.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ipv4.is_empty() && self.ipv6.is_empty()
    }

    /// Split into the `(ipv4, ipv6)` mappings
    pub fn into_parts(self) -> (BTreeMap<String, PathBuf>, BTreeMap<String, PathBuf>) {
        (self.ipv4, self.ipv6)
    }

    /// Find the target file governing `addr`.
    ///
    /// A key spelled exactly like `addr`'s canonical form is preferred.
    /// Otherwise keys are compared as parsed addresses, so `0::1` finds a
    /// file indexed under `::1`, and the first match in key order wins.
    pub fn lookup(&self, addr: &IpAddr) -> Option<&Path> {
        let map = match addr {
            IpAddr::V4(_) => &self.ipv4,
            IpAddr::V6(_) => &self.ipv6,
        };
        if let Some(path) = map.get(&addr.to_string()) {
            return Some(path);
        }
        map.iter()
            .find(|(key, _)| classify_addr(key).is_ok_and(|parsed| parsed == *addr))
            .map(|(_, path)| path.as_path())
    }

    /// IPv4 keys in octet-string order (see [`crate::ip::sort`])
    pub fn sorted_ipv4_addresses(&self) -> Result<Vec<String>, SortError> {
        let keys: Vec<&str> = self.ipv4.keys().map(String::as_str).collect();
        sort_ipv4(&keys)
    }

    fn insert<S: DiagnosticSink>(
        &mut self,
        version: IpVersion,
        address: &str,
        path: PathBuf,
        sink: &mut S,
    ) {
        let map = match version {
            IpVersion::V4 => &mut self.ipv4,
            IpVersion::V6 => &mut self.ipv6,
        };
        if let Some(replaced) = map.insert(address.to_string(), path.clone()) {
            sink.report(Diagnostic::DuplicateAddress {
                address: address.to_string(),
                replaced,
                path,
            });
        }
    }
}

/// Extract the address token from a target file name.
///
/// Returns `None` when the name has no `-`, nothing before it, or characters
/// other than ASCII letters, digits, `.` and `:` before it.
pub fn address_token(file_name: &str) -> Option<&str> {
    TARGET_NAME
        .captures(file_name)
        .and_then(|caps| caps.name("ip"))
        .map(|m| m.as_str())
}

/// Scan `dir` (non-recursively) and index every target file in it.
///
/// Entries are processed in file name order, so when two files share an
/// address the one sorting last wins. Skipped entries are reported to `sink`;
/// only failing to list `dir` is an error.
pub fn index_targets<S: DiagnosticSink>(dir: &Path, mut sink: S) -> Result<TargetIndex, TargetError> {
    let entries = fs::read_dir(dir).map_err(|source| TargetError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| TargetError::ReadEntry {
            path: dir.to_path_buf(),
            source,
        })?;
        names.push(entry.file_name());
    }
    names.sort();

    let mut index = TargetIndex::default();
    for name in names {
        let Some(file_name) = name.to_str() else {
            sink.report(Diagnostic::UnrecognizedFilename {
                file_name: name.to_string_lossy().into_owned(),
            });
            continue;
        };

        let Some(address) = address_token(file_name) else {
            sink.report(Diagnostic::UnrecognizedFilename {
                file_name: file_name.to_string(),
            });
            continue;
        };

        match classify(address) {
            Ok(version) => {
                debug!("Indexed {} target {} -> {}", version, address, file_name);
                index.insert(version, address, dir.join(file_name), &mut sink);
            }
            Err(error) => sink.report(Diagnostic::InvalidAddress {
                file_name: file_name.to_string(),
                error,
            }),
        }
    }

    Ok(index)
}
