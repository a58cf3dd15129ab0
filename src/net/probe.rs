//! Diagnostics that shell out to the standard network tools.

use std::process::{Command, Stdio};

use indicatif::ProgressBar;
use ipnet::IpNet;

use crate::error::{OpsError, Result};

/// Ping a host `count` times and return the tool's output.
pub fn ping(host: &str, count: u32) -> Result<String> {
    run_tool(Command::new("ping").args(["-c", &count.to_string(), host]))
}

/// Trace the route to a host with a hop limit.
pub fn traceroute(host: &str, max_hops: u32) -> Result<String> {
    run_tool(Command::new("traceroute").args(["-m", &max_hops.to_string(), host]))
}

/// Dump the ARP cache.
pub fn arp_cache() -> Result<String> {
    run_tool(Command::new("arp").arg("-a"))
}

/// List network interfaces. Prefers `ifconfig`, falls back to `ip addr`
/// on systems that no longer ship it.
pub fn interfaces() -> Result<String> {
    match Command::new("ifconfig").output() {
        Ok(output) => Ok(String::from_utf8_lossy(&output.stdout).into_owned()),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            run_tool(Command::new("ip").arg("addr"))
        }
        Err(err) => Err(err.into()),
    }
}

/// Ping every usable host in a subnet once and collect the responders.
pub fn sweep(subnet: &str) -> Result<Vec<String>> {
    let network: IpNet = subnet
        .parse()
        .map_err(|_| OpsError::InvalidInput(format!("invalid subnet '{subnet}'")))?;

    let total = network.hosts().count() as u64;
    let bar = ProgressBar::new(total);

    let mut active = Vec::new();
    for ip in network.hosts() {
        let status = Command::new("ping")
            .args(["-c", "1", "-W", "1", &ip.to_string()])
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()?;
        if status.success() {
            active.push(ip.to_string());
        }
        bar.inc(1);
    }
    bar.finish_and_clear();
    Ok(active)
}

fn run_tool(command: &mut Command) -> Result<String> {
    let output = command.output()?;
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
