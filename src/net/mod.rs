//! Network diagnostics.
//!
//! Every operation stands alone. Subprocess-backed ones (`ping`,
//! `traceroute`, `arp`, interface listing) return the tool's stdout
//! verbatim; socket- and HTTP-backed ones map failures into typed errors.

pub mod bandwidth;
pub mod probe;
pub mod scan;
pub mod web;

pub use scan::PortRange;

use std::net::{SocketAddr, ToSocketAddrs};

use crate::error::{OpsError, Result};

/// Resolve a hostname (or literal address) to one socket address.
pub(crate) fn resolve(host: &str, port: u16) -> Result<SocketAddr> {
    let mut addrs = (host, port).to_socket_addrs()?;
    addrs
        .next()
        .ok_or_else(|| OpsError::InvalidInput(format!("could not resolve host '{host}'")))
}
