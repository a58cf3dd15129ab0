//! Signed token commands.

use std::path::PathBuf;

use anyhow::Result;
use console::style;

use crate::token::{load_claims, TokenSigner};

#[derive(Debug, Clone)]
pub enum TokenSubcommand {
    /// Issue a token from a claims file, tagged with an environment.
    Issue {
        env: String,
        key: PathBuf,
        claims: PathBuf,
        expires_in: i64,
    },
    /// Verify a token's signature and expiry.
    Verify { token: String, key: PathBuf },
}

pub fn execute_token(command: TokenSubcommand) -> Result<()> {
    match command {
        TokenSubcommand::Issue {
            env,
            key,
            claims,
            expires_in,
        } => {
            let secret = std::fs::read_to_string(&key)?;
            let claims = load_claims(&claims)?;
            let signer = TokenSigner::new(secret.trim());
            let token = signer.issue(&claims, &env, expires_in)?;
            println!("Generated JWT: {token}");
        }

        TokenSubcommand::Verify { token, key } => {
            let secret = std::fs::read_to_string(&key)?;
            let signer = TokenSigner::new(secret.trim());
            let claims = signer.verify(&token)?;
            println!(
                "{} Token is valid. Payload: {}",
                style("✓").green(),
                serde_json::Value::Object(claims)
            );
        }
    }

    Ok(())
}
