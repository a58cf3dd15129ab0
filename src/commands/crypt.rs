//! Encryption commands: fernet, base64, RSA.
//!
//! Plaintext comes from `--text` or `--input` (exactly one). Ciphertext goes
//! to `--output` as raw bytes, or to stdout printably (fernet tokens and
//! base64 are already ASCII; RSA ciphertext is base64-encoded for stdout).

use std::path::PathBuf;

use anyhow::Result;

use crate::crypto;
use crate::error::OpsError;

#[derive(Debug, Clone)]
pub enum CryptSubcommand {
    /// Symmetric authenticated encryption with a fernet key file.
    Fernet {
        text: Option<String>,
        input: Option<PathBuf>,
        output: Option<PathBuf>,
        key: PathBuf,
    },
    /// Base64 encoding.
    Base64 {
        text: Option<String>,
        input: Option<PathBuf>,
        output: Option<PathBuf>,
    },
    /// RSA public-key encryption (PKCS#1 v1.5).
    Rsa {
        text: Option<String>,
        input: Option<PathBuf>,
        output: Option<PathBuf>,
        key: PathBuf,
    },
}

pub fn execute_crypt(command: CryptSubcommand) -> Result<()> {
    match command {
        CryptSubcommand::Fernet {
            text,
            input,
            output,
            key,
        } => {
            let plaintext = read_plaintext(text, input)?;
            let key_text = std::fs::read_to_string(&key)?;
            let token = crypto::encrypt_fernet(key_text.trim(), &plaintext)?;
            emit(output, token.as_bytes(), &token)?;
        }

        CryptSubcommand::Base64 {
            text,
            input,
            output,
        } => {
            let plaintext = read_plaintext(text, input)?;
            let encoded = crypto::encode_base64(&plaintext);
            emit(output, encoded.as_bytes(), &encoded)?;
        }

        CryptSubcommand::Rsa {
            text,
            input,
            output,
            key,
        } => {
            let plaintext = read_plaintext(text, input)?;
            let public_key = std::fs::read(&key)?;
            let ciphertext = crypto::encrypt_rsa(&public_key, &plaintext)?;
            let printable = crypto::encode_base64(&ciphertext);
            emit(output, &ciphertext, &printable)?;
        }
    }

    Ok(())
}

fn read_plaintext(text: Option<String>, input: Option<PathBuf>) -> Result<Vec<u8>> {
    match (text, input) {
        (Some(text), None) => Ok(text.into_bytes()),
        (None, Some(path)) => Ok(std::fs::read(path)?),
        _ => Err(OpsError::InvalidInput(
            "provide exactly one of --text or --input".to_string(),
        )
        .into()),
    }
}

/// Raw bytes to the output file, or the printable form to stdout.
fn emit(output: Option<PathBuf>, raw: &[u8], printable: &str) -> Result<()> {
    match output {
        Some(path) => std::fs::write(path, raw)?,
        None => println!("Encrypted text: {printable}"),
    }
    Ok(())
}
