//! Network diagnostic commands.
//!
//! Subprocess-backed operations print the external tool's output verbatim;
//! library-backed ones render the adapter's typed result.

use std::time::Duration;

use anyhow::Result;

use crate::config::OpsConfig;
use crate::net::scan::PortRange;
use crate::net::{bandwidth, probe, scan, web};

#[derive(Debug, Clone)]
pub enum NetSubcommand {
    /// Ping a host.
    Ping { host: String, count: u32 },
    /// Resolve a domain name.
    Dns { domain: String },
    /// Scan a TCP port range.
    Scan { host: String, ports: PortRange },
    /// Trace the route to a host.
    Trace { host: String, max_hops: u32 },
    /// WHOIS registration lookup.
    Whois { domain: String },
    /// Geolocate an IP address.
    Geoip { ip: String },
    /// Fetch HTTP status and headers.
    Http { url: String },
    /// Measure download and upload bandwidth.
    Speedtest,
    /// Ping every host in a subnet.
    Sweep { subnet: String },
    /// Check one TCP port.
    Tcp { host: String, port: u16 },
    /// Show the ARP cache.
    Arp,
    /// Show network interfaces.
    Interfaces,
}

pub fn execute_net(config: &OpsConfig, command: NetSubcommand) -> Result<()> {
    match command {
        NetSubcommand::Ping { host, count } => {
            print!("{}", probe::ping(&host, count)?);
        }

        NetSubcommand::Dns { domain } => {
            let ip = scan::dns_lookup(&domain)?;
            println!("{domain} has IP address {ip}");
        }

        NetSubcommand::Scan { host, ports } => {
            println!("Scanning ports on {host}...");
            let timeout = Duration::from_millis(config.net.probe_timeout_ms);
            let open = scan::scan_ports(&host, ports, timeout)?;
            if open.is_empty() {
                println!("No open ports found on {host} in the range {ports}.");
            } else {
                let listing = open
                    .iter()
                    .map(u16::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                println!("Open ports on {host}: {listing}");
            }
        }

        NetSubcommand::Trace { host, max_hops } => {
            print!("{}", probe::traceroute(&host, max_hops)?);
        }

        NetSubcommand::Whois { domain } => {
            println!("{}", web::whois(&domain)?);
        }

        NetSubcommand::Geoip { ip } => {
            let info = web::geoip(&ip)?;
            println!("IP: {ip}");
            println!("Country: {}", info.country.unwrap_or_default());
            println!("Region: {}", info.region_name.unwrap_or_default());
            println!("City: {}", info.city.unwrap_or_default());
            println!("ISP: {}", info.isp.unwrap_or_default());
        }

        NetSubcommand::Http { url } => {
            let report = web::http_report(&url)?;
            println!("Status: {}", report.status);
            println!("Headers:");
            for (name, value) in report.headers {
                println!("{name}: {value}");
            }
        }

        NetSubcommand::Speedtest => {
            let report = bandwidth::measure()?;
            println!("Download speed: {:.2} Mbps", report.download_mbps);
            println!("Upload speed: {:.2} Mbps", report.upload_mbps);
        }

        NetSubcommand::Sweep { subnet } => {
            let hosts = probe::sweep(&subnet)?;
            if hosts.is_empty() {
                println!("No active hosts found in {subnet}.");
            } else {
                println!("Active hosts in {subnet}:");
                for host in hosts {
                    println!("{host}");
                }
            }
        }

        NetSubcommand::Tcp { host, port } => {
            let timeout = Duration::from_millis(config.net.check_timeout_ms);
            if scan::tcp_check(&host, port, timeout)? {
                println!("Connection to {host}:{port} succeeded!");
            } else {
                println!("Connection to {host}:{port} failed!");
            }
        }

        NetSubcommand::Arp => {
            print!("{}", probe::arp_cache()?);
        }

        NetSubcommand::Interfaces => {
            print!("{}", probe::interfaces()?);
        }
    }

    Ok(())
}
