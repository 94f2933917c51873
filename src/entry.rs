//! Hosts entry value type and hostname validation.

use std::fmt;
use std::net::IpAddr;

use crate::error::{HostsError, Result};

const MAX_HOSTNAME_LEN: usize = 253;
const MAX_LABEL_LEN: usize = 63;

/// IP address family; half of an entry's identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    V4,
    V6,
}

impl Family {
    pub fn of(address: &IpAddr) -> Self {
        match address {
            IpAddr::V4(_) => Family::V4,
            IpAddr::V6(_) => Family::V6,
        }
    }
}

/// Deduplication identity: lowercased hostname plus address family.
pub type EntryKey = (String, Family);

/// One hostname -> address binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub hostname: String,
    pub address: IpAddr,
    pub enabled: bool,
}

impl Entry {
    /// Build an enabled entry, validating both hostname and address.
    pub fn new(hostname: &str, address: &str) -> Result<Self> {
        validate_hostname(hostname)?;
        let address = parse_address(address)?;
        Ok(Self {
            hostname: hostname.to_string(),
            address,
            enabled: true,
        })
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn family(&self) -> Family {
        Family::of(&self.address)
    }

    pub fn key(&self) -> EntryKey {
        (self.hostname.to_ascii_lowercase(), self.family())
    }

    /// Case-insensitive hostname match.
    pub fn matches(&self, hostname: &str) -> bool {
        self.hostname.eq_ignore_ascii_case(hostname)
    }
}

/// `hostname -> address (On|Off)`. A width pads the hostname column.
impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = if self.enabled { "On" } else { "Off" };
        let width = f.width().unwrap_or(0);
        write!(f, "{:<width$} -> {} ({state})", self.hostname, self.address)
    }
}

/// Parse an IPv4/IPv6 literal. Hostnames and zone-scoped addresses are rejected.
pub fn parse_address(address: &str) -> Result<IpAddr> {
    address
        .parse::<IpAddr>()
        .map_err(|_| HostsError::InvalidAddress(address.to_string()))
}

/// Validate DNS-style hostname format.
pub fn validate_hostname(hostname: &str) -> Result<()> {
    if hostname.is_empty() {
        return Err(HostsError::hostname(hostname, "empty hostname"));
    }
    if hostname.len() > MAX_HOSTNAME_LEN {
        return Err(HostsError::hostname(
            hostname,
            format!("longer than {MAX_HOSTNAME_LEN} bytes"),
        ));
    }
    if hostname.contains("..") {
        return Err(HostsError::hostname(hostname, "consecutive dots"));
    }
    for label in hostname.split('.') {
        if label.is_empty() {
            return Err(HostsError::hostname(hostname, "empty label"));
        }
        if label.len() > MAX_LABEL_LEN {
            return Err(HostsError::hostname(
                hostname,
                format!("label longer than {MAX_LABEL_LEN} bytes"),
            ));
        }
        for c in label.chars() {
            if !c.is_ascii_alphanumeric() && c != '-' && c != '_' {
                return Err(HostsError::hostname(hostname, format!("illegal char {c:?}")));
            }
        }
        if label.starts_with('-') || label.ends_with('-') {
            return Err(HostsError::hostname(
                hostname,
                "label cannot start/end with hyphen",
            ));
        }
    }
    Ok(())
}
