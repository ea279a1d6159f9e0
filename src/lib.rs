//! # fakeroute-targets - Target discovery for fakeroute topology simulations
//!
//! fakeroute intercepts traceroute-like probes and answers them as if they
//! had crossed a simulated topology, including per-flow load balancers. Each
//! simulated destination is described by a *target file* whose name starts
//! with the destination address, e.g. `127.1.1.2-lb` or `::1-double`.
//!
//! This library finds the active target directory and indexes the files in
//! it by address. The packet interception side consumes the resulting
//! [`TargetIndex`](targets::TargetIndex); the body of each target file is
//! opaque here.
//!
//! ## Architecture
//!
//! - `config`: Candidate target directories and their defaults
//! - `config_loader`: YAML settings loading
//! - `ip`: Address classification and octet-string sorting
//! - `targets`: Directory resolution, indexing and diagnostics
//! - `error`: Hard failures returned to callers
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use fakeroute_targets::config::Settings;
//! use fakeroute_targets::targets::{discover_targets, LogSink};
//!
//! let settings = Settings::default();
//! let (root, index) = discover_targets(&settings.target_dirs, LogSink)?;
//!
//! println!("{} targets in {}", index.len(), root.display());
//! for (address, path) in index.ipv4() {
//!     println!("{address} -> {}", path.display());
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Target Directories
//!
//! The first existing directory of the candidate list is used:
//!
//! ```text
//! ./targets
//! ~/.fakeroute/targets
//! /etc/fakeroute/targets
//! ```
//!
//! ## Error Handling
//!
//! Entries that are not target files, or whose address prefix is not an IP
//! literal, are skipped and reported to a [`DiagnosticSink`](targets::DiagnosticSink).
//! Only a missing configuration root or an unreadable directory is returned
//! as a [`TargetError`](error::TargetError).

pub mod config;
pub mod config_loader;
pub mod error;
pub mod ip;
pub mod targets;
