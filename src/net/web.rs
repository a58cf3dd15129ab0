//! Lookups over HTTP and the whois protocol.

use std::io::{Read, Write};
use std::net::TcpStream;
use std::time::Duration;

use serde::Deserialize;

use crate::error::{OpsError, Result};

const WHOIS_ROOT: &str = "whois.iana.org";
const WHOIS_PORT: u16 = 43;

/// Geolocation record as served by ip-api.com.
#[derive(Debug, Deserialize)]
pub struct GeoInfo {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(rename = "regionName", default)]
    pub region_name: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub isp: Option<String>,
}

/// Status line and headers of an HTTP GET.
#[derive(Debug)]
pub struct HttpReport {
    pub status: u16,
    pub headers: Vec<(String, String)>,
}

/// Geolocate an IP address.
pub fn geoip(ip: &str) -> Result<GeoInfo> {
    let url = format!("http://ip-api.com/json/{ip}");
    let info: GeoInfo = ureq::get(&url).call()?.into_json()?;
    if info.status == "fail" {
        let reason = info
            .message
            .unwrap_or_else(|| "unknown reason".to_string());
        return Err(OpsError::Http(format!("geolocation lookup failed: {reason}")));
    }
    Ok(info)
}

/// Fetch a URL and report its status code and headers.
///
/// Non-2xx responses are still reports, not errors; only transport
/// failures (DNS, refused connection, TLS) error out.
pub fn http_report(url: &str) -> Result<HttpReport> {
    let response = match ureq::get(url).call() {
        Ok(response) => response,
        Err(ureq::Error::Status(_, response)) => response,
        Err(err) => return Err(err.into()),
    };

    let headers = response
        .headers_names()
        .into_iter()
        .map(|name| {
            let value = response.header(&name).unwrap_or_default().to_string();
            (name, value)
        })
        .collect();
    Ok(HttpReport {
        status: response.status(),
        headers,
    })
}

/// Whois lookup: query the IANA root, follow a single `refer:` hop when
/// the root points at a registry server.
pub fn whois(domain: &str) -> Result<String> {
    let root_answer = whois_query(WHOIS_ROOT, domain)?;
    for line in root_answer.lines() {
        if let Some(server) = line.trim().strip_prefix("refer:") {
            let server = server.trim();
            if !server.is_empty() {
                if let Ok(answer) = whois_query(server, domain) {
                    return Ok(answer);
                }
                break;
            }
        }
    }
    Ok(root_answer)
}

fn whois_query(server: &str, query: &str) -> Result<String> {
    let addr = super::resolve(server, WHOIS_PORT)?;
    let mut stream = TcpStream::connect_timeout(&addr, Duration::from_secs(5))?;
    stream.set_read_timeout(Some(Duration::from_secs(10)))?;
    stream.write_all(query.as_bytes())?;
    stream.write_all(b"\r\n")?;

    let mut raw = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        match stream.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => raw.extend_from_slice(&chunk[..n]),
            // a slow server that stops sending still yields what we got
            Err(err)
                if err.kind() == std::io::ErrorKind::WouldBlock
                    || err.kind() == std::io::ErrorKind::TimedOut =>
            {
                break
            }
            Err(err) => return Err(err.into()),
        }
    }
    Ok(String::from_utf8_lossy(&raw).into_owned())
}
