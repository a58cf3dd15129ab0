//! Socket-level checks: DNS resolution, single-port reachability, and
//! sequential port sweeps.

use std::net::{IpAddr, SocketAddr, TcpStream};
use std::str::FromStr;
use std::time::Duration;

use indicatif::ProgressBar;

use crate::error::{OpsError, Result};

/// Inclusive port range, parsed from `start-end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortRange {
    pub start: u16,
    pub end: u16,
}

impl PortRange {
    /// Number of ports covered, inclusive of both ends.
    pub fn count(&self) -> u32 {
        u32::from(self.end) - u32::from(self.start) + 1
    }

    pub fn iter(&self) -> impl Iterator<Item = u16> {
        self.start..=self.end
    }
}

impl FromStr for PortRange {
    type Err = OpsError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || OpsError::InvalidInput(format!("invalid port range '{s}', expected start-end"));
        let (start, end) = s.split_once('-').ok_or_else(invalid)?;
        let start: u16 = start.trim().parse().map_err(|_| invalid())?;
        let end: u16 = end.trim().parse().map_err(|_| invalid())?;
        if start > end {
            return Err(invalid());
        }
        Ok(PortRange { start, end })
    }
}

impl std::fmt::Display for PortRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Resolve a domain to its first address.
pub fn dns_lookup(domain: &str) -> Result<IpAddr> {
    Ok(super::resolve(domain, 0)?.ip())
}

/// Walk a port range sequentially, one connect attempt per port.
pub fn scan_ports(host: &str, range: PortRange, timeout: Duration) -> Result<Vec<u16>> {
    let ip = super::resolve(host, 0)?.ip();
    let bar = ProgressBar::new(u64::from(range.count()));

    let mut open = Vec::new();
    for port in range.iter() {
        if connects(ip, port, timeout) {
            open.push(port);
        }
        bar.inc(1);
    }
    bar.finish_and_clear();
    Ok(open)
}

/// Whether one TCP connection to `host:port` succeeds within the timeout.
pub fn tcp_check(host: &str, port: u16, timeout: Duration) -> Result<bool> {
    let ip = super::resolve(host, 0)?.ip();
    Ok(connects(ip, port, timeout))
}

fn connects(ip: IpAddr, port: u16, timeout: Duration) -> bool {
    TcpStream::connect_timeout(&SocketAddr::new(ip, port), timeout).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::TcpListener;

    #[test]
    fn parses_well_formed_range() {
        let range: PortRange = "20-80".parse().unwrap();
        assert_eq!(range, PortRange { start: 20, end: 80 });
        assert_eq!(range.count(), 61);
    }

    #[test]
    fn rejects_malformed_ranges() {
        assert!("80".parse::<PortRange>().is_err());
        assert!("x-80".parse::<PortRange>().is_err());
        assert!("80-20".parse::<PortRange>().is_err());
        assert!("1-99999".parse::<PortRange>().is_err());
    }

    #[test]
    fn finds_a_listening_port_and_nothing_else() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();

        let range = PortRange { start: port, end: port };
        let open = scan_ports("127.0.0.1", range, Duration::from_millis(200)).unwrap();
        assert_eq!(open, vec![port]);
    }

    #[test]
    fn closed_range_reports_no_open_ports() {
        // port 1 (tcpmux) is essentially never bound on loopback
        let range = PortRange { start: 1, end: 1 };
        let open = scan_ports("127.0.0.1", range, Duration::from_millis(200)).unwrap();
        assert!(open.is_empty());
    }

    #[test]
    fn tcp_check_reflects_listener_state() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        assert!(tcp_check("127.0.0.1", port, Duration::from_millis(200)).unwrap());

        drop(listener);
        assert!(!tcp_check("127.0.0.1", port, Duration::from_millis(200)).unwrap());
    }
}
