//! File digests: MD5, SHA-256, and SHA-512, streamed in fixed-size chunks
//! so large files never load into memory at once.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use sha2::{Digest, Sha256, Sha512};

use crate::error::{OpsError, Result};

/// Read size per update call.
const CHUNK_SIZE: usize = 4096;

/// Supported digest algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigestAlgorithm {
    Md5,
    Sha256,
    Sha512,
}

impl DigestAlgorithm {
    /// Uppercase label used in command output.
    pub fn label(&self) -> &'static str {
        match self {
            DigestAlgorithm::Md5 => "MD5",
            DigestAlgorithm::Sha256 => "SHA256",
            DigestAlgorithm::Sha512 => "SHA512",
        }
    }
}

/// Hex digest of a file's contents under the given algorithm.
pub fn digest_file(path: &Path, algorithm: DigestAlgorithm) -> Result<String> {
    let mut file = File::open(path)?;
    match algorithm {
        DigestAlgorithm::Md5 => {
            let mut context = md5::Context::new();
            let mut buf = [0u8; CHUNK_SIZE];
            loop {
                let n = file.read(&mut buf)?;
                if n == 0 {
                    break;
                }
                context.consume(&buf[..n]);
            }
            Ok(format!("{:x}", context.compute()))
        }
        DigestAlgorithm::Sha256 => digest_reader::<Sha256>(&mut file),
        DigestAlgorithm::Sha512 => digest_reader::<Sha512>(&mut file),
    }
}

/// Recompute the digest and compare against an expected hex string.
///
/// Comparison ignores case; a mismatch reports both values.
pub fn verify_file(path: &Path, algorithm: DigestAlgorithm, expected: &str) -> Result<()> {
    let actual = digest_file(path, algorithm)?;
    if actual.eq_ignore_ascii_case(expected.trim()) {
        Ok(())
    } else {
        Err(OpsError::DigestMismatch {
            path: path.display().to_string(),
            expected: expected.trim().to_lowercase(),
            actual,
        })
    }
}

fn digest_reader<D: Digest>(reader: &mut impl Read) -> Result<String> {
    let mut hasher = D::new();
    let mut buf = [0u8; CHUNK_SIZE];
    loop {
        let n = reader.read(&mut buf)?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    Ok(to_hex(&hasher.finalize()))
}

fn to_hex(bytes: &[u8]) -> String {
    use std::fmt::Write;
    bytes.iter().fold(String::with_capacity(bytes.len() * 2), |mut out, b| {
        // write! to a String cannot fail
        let _ = write!(out, "{b:02x}");
        out
    })
}
