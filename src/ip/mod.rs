//! IP address helpers for target discovery.
//!
//! This module classifies target-name prefixes as IPv4 or IPv6 literals and
//! provides the octet-string ordering used when listing IPv4 targets.

pub mod classify;
pub mod sort;

// Re-export commonly used types
pub use classify::{classify, classify_addr, InvalidAddress, IpVersion};
pub use sort::{compare_octet_strings, sort_ipv4, SortError};
