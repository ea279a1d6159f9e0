//! Address classification for target file names.
//!
//! A name prefix is classified by trying the IPv6 parser first and the IPv4
//! parser second. Both are the strict `std::net` presentation-format parsers,
//! so hostnames, zone ids and partial dotted quads are rejected and no DNS
//! lookup ever happens.

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// IP protocol version of a classified address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IpVersion {
    V4,
    V6,
}

impl fmt::Display for IpVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IpVersion::V4 => write!(f, "IPv4"),
            IpVersion::V6 => write!(f, "IPv6"),
        }
    }
}

/// A string that is neither an IPv4 nor an IPv6 literal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid IP address '{address}'")]
pub struct InvalidAddress {
    pub address: String,
}

/// Classify `s` as an IPv4 or IPv6 literal.
///
/// # Examples
/// ```
/// use fakeroute_targets::ip::{classify, IpVersion};
///
/// assert_eq!(classify("10.0.0.1"), Ok(IpVersion::V4));
/// assert_eq!(classify("::1"), Ok(IpVersion::V6));
/// assert!(classify("localhost").is_err());
/// ```
pub fn classify(s: &str) -> Result<IpVersion, InvalidAddress> {
    classify_addr(s).map(|addr| match addr {
        IpAddr::V4(_) => IpVersion::V4,
        IpAddr::V6(_) => IpVersion::V6,
    })
}

/// Same as [`classify`], but hands back the parsed address.
pub fn classify_addr(s: &str) -> Result<IpAddr, InvalidAddress> {
    if let Ok(v6) = s.parse::<Ipv6Addr>() {
        return Ok(IpAddr::V6(v6));
    }
    if let Ok(v4) = s.parse::<Ipv4Addr>() {
        return Ok(IpAddr::V4(v4));
    }
    Err(InvalidAddress {
        address: s.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ipv4_literals() {
        for ip in ["10.0.0.1", "127.1.1.1", "0.0.0.0", "255.255.255.255", "1.1.1.10"] {
            assert_eq!(classify(ip), Ok(IpVersion::V4), "{ip}");
        }
    }

    #[test]
    fn test_ipv6_literals() {
        for ip in ["::1", "::", "fe80::1", "2001:db8::ff00:42:8329", "::ffff:192.0.2.1"] {
            assert_eq!(classify(ip), Ok(IpVersion::V6), "{ip}");
        }
    }

    #[test]
    fn test_invalid_literals() {
        for s in ["hello", "1.2.3", "", "1.2.3.256", "1.2.3.4.5", "localhost", "::1%eth0", "1:2"] {
            let err = classify(s).unwrap_err();
            assert_eq!(err.address, s);
        }
    }

    #[test]
    fn test_invalid_address_message() {
        let err = classify("dead").unwrap_err();
        assert_eq!(err.to_string(), "Invalid IP address 'dead'");
    }

    #[test]
    fn test_classify_addr_returns_parsed_value() {
        assert_eq!(
            classify_addr("0::1").unwrap(),
            IpAddr::V6(Ipv6Addr::LOCALHOST)
        );
        assert_eq!(
            classify_addr("127.0.0.1").unwrap(),
            IpAddr::V4(Ipv4Addr::LOCALHOST)
        );
    }

    #[test]
    fn test_version_display() {
        assert_eq!(IpVersion::V4.to_string(), "IPv4");
        assert_eq!(IpVersion::V6.to_string(), "IPv6");
    }
}
