//! Octet-string ordering for IPv4 address lists.
//!
//! Addresses are split on `.` and compared component by component **as
//! strings**, so `"10"` sorts before `"9"` and `1.1.1.10` sorts before
//! `1.1.1.2`. This is not numeric address order. Callers that need numeric
//! order should parse into [`std::net::Ipv4Addr`] and sort that instead.

use std::cmp::Ordering;

/// Errors raised while sorting address strings
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SortError {
    #[error("Cannot sort '{address}': expected dot-separated components")]
    Malformed { address: String },
}

/// Compare two addresses component-wise on their octet strings.
///
/// A shorter component list that is a prefix of the other sorts first.
pub fn compare_octet_strings(a: &str, b: &str) -> Ordering {
    a.split('.').cmp(b.split('.'))
}

/// Return a new list with `addresses` in octet-string order.
///
/// The sort is stable, so equal addresses keep their input order.
///
/// # Examples
/// ```
/// use fakeroute_targets::ip::sort_ipv4;
///
/// let sorted = sort_ipv4(&["10.0.0.1", "9.0.0.1", "1.1.1.2", "1.1.1.10"]).unwrap();
/// assert_eq!(sorted, ["1.1.1.10", "1.1.1.2", "10.0.0.1", "9.0.0.1"]);
/// ```
pub fn sort_ipv4<S: AsRef<str>>(addresses: &[S]) -> Result<Vec<String>, SortError> {
    let mut sorted = Vec::with_capacity(addresses.len());
    for address in addresses {
        let address = address.as_ref();
        check_components(address)?;
        sorted.push(address.to_string());
    }

    sorted.sort_by(|a, b| compare_octet_strings(a, b));
    Ok(sorted)
}

fn check_components(address: &str) -> Result<(), SortError> {
    if !address.contains('.') || address.split('.').any(str::is_empty) {
        return Err(SortError::Malformed {
            address: address.to_string(),
        });
    }
    Ok(())
}
