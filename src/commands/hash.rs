//! File digest commands.

use std::path::PathBuf;

use anyhow::Result;
use console::style;

use crate::digest::{digest_file, verify_file, DigestAlgorithm};
use crate::error::OpsError;

#[derive(Debug, Clone)]
pub enum HashSubcommand {
    /// Compute a file digest.
    Generate {
        file: PathBuf,
        algorithm: DigestAlgorithm,
    },
    /// Compare a file digest against an expected value.
    Verify {
        file: PathBuf,
        hash: String,
        algorithm: DigestAlgorithm,
    },
}

pub fn execute_hash(command: HashSubcommand) -> Result<()> {
    match command {
        HashSubcommand::Generate { file, algorithm } => {
            let digest = digest_file(&file, algorithm)?;
            println!("{} hash for {}: {}", algorithm.label(), file.display(), digest);
        }

        HashSubcommand::Verify {
            file,
            hash,
            algorithm,
        } => match verify_file(&file, algorithm, &hash) {
            Ok(()) => {
                println!("{} Hash matches for {}.", style("✓").green(), file.display());
            }
            // Mismatch exits non-zero so scripts can gate on it.
            Err(OpsError::DigestMismatch { .. }) => {
                eprintln!(
                    "{} Hash does not match for {}.",
                    style("✗").red(),
                    file.display()
                );
                std::process::exit(1);
            }
            Err(err) => return Err(err.into()),
        },
    }

    Ok(())
}
