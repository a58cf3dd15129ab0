//! Bandwidth measurement against Cloudflare's public speed endpoints.
//!
//! One timed download and one timed upload, each a single blocking HTTP
//! transfer. A steady-tick spinner animates on its own thread while the
//! transfers block.

use std::io::Read;
use std::time::{Duration, Instant};

use indicatif::ProgressBar;

use crate::error::Result;

const DOWNLOAD_URL: &str = "https://speed.cloudflare.com/__down?bytes=25000000";
const UPLOAD_URL: &str = "https://speed.cloudflare.com/__up";
const UPLOAD_BYTES: usize = 8 * 1024 * 1024;

/// Measured throughput in megabits per second.
#[derive(Debug, Clone, Copy)]
pub struct SpeedReport {
    pub download_mbps: f64,
    pub upload_mbps: f64,
}

/// Run the download probe, then the upload probe.
pub fn measure() -> Result<SpeedReport> {
    let agent = ureq::builder().timeout(Duration::from_secs(120)).build();

    let spinner = ProgressBar::new_spinner();
    spinner.enable_steady_tick(Duration::from_millis(100));

    let outcome = run_probes(&agent, &spinner);
    spinner.finish_and_clear();
    outcome
}

fn run_probes(agent: &ureq::Agent, spinner: &ProgressBar) -> Result<SpeedReport> {
    spinner.set_message("Testing download speed");
    let download_mbps = measure_download(agent)?;
    spinner.set_message("Testing upload speed");
    let upload_mbps = measure_upload(agent)?;
    Ok(SpeedReport {
        download_mbps,
        upload_mbps,
    })
}

fn measure_download(agent: &ureq::Agent) -> Result<f64> {
    let started = Instant::now();
    let response = agent.get(DOWNLOAD_URL).call()?;
    let mut reader = response.into_reader();

    let mut chunk = [0u8; 64 * 1024];
    let mut total = 0usize;
    loop {
        let n = reader.read(&mut chunk)?;
        if n == 0 {
            break;
        }
        total += n;
    }
    Ok(mbps(total, started.elapsed()))
}

fn measure_upload(agent: &ureq::Agent) -> Result<f64> {
    let payload = vec![0u8; UPLOAD_BYTES];
    let started = Instant::now();
    agent.post(UPLOAD_URL).send_bytes(&payload)?;
    Ok(mbps(UPLOAD_BYTES, started.elapsed()))
}

fn mbps(bytes: usize, elapsed: Duration) -> f64 {
    let seconds = elapsed.as_secs_f64().max(0.001);
    (bytes as f64 * 8.0) / seconds / 1_000_000.0
}
