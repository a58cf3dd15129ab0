//! Signed token issuance and verification (HS256 JWTs).
//!
//! Callers supply arbitrary claims as a JSON object; the signer merges in
//! the reserved claims before signing. Reserved keys always win over
//! caller-supplied values of the same name.

use std::path::Path;

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde_json::Value;

use crate::error::{OpsError, Result};

/// Claim set carried inside a token.
pub type ClaimMap = serde_json::Map<String, Value>;

/// Reserved claim: expiry as a Unix timestamp, injected at issue time.
pub const EXPIRY_CLAIM: &str = "exp";

/// Reserved claim: environment tag, injected at issue time.
pub const ENVIRONMENT_CLAIM: &str = "env";

/// Issues and verifies tokens under one shared secret.
pub struct TokenSigner {
    secret: Vec<u8>,
    algorithm: Algorithm,
}

impl TokenSigner {
    pub fn new(secret: impl Into<Vec<u8>>) -> Self {
        Self {
            secret: secret.into(),
            algorithm: Algorithm::HS256,
        }
    }

    /// Sign `claims` plus the reserved environment and expiry claims.
    ///
    /// The expiry is `now + expires_in` seconds. Caller claims named `exp`
    /// or `env` are overwritten, never trusted.
    pub fn issue(&self, claims: &ClaimMap, environment: &str, expires_in: i64) -> Result<String> {
        let mut payload = claims.clone();
        payload.insert(
            ENVIRONMENT_CLAIM.to_string(),
            Value::String(environment.to_string()),
        );
        let expiry = Utc::now().timestamp() + expires_in;
        payload.insert(EXPIRY_CLAIM.to_string(), Value::from(expiry));

        encode(
            &Header::new(self.algorithm),
            &payload,
            &EncodingKey::from_secret(&self.secret),
        )
        .map_err(|e| OpsError::Crypto(e.to_string()))
    }

    /// Check signature and expiry, returning the embedded claims.
    ///
    /// Every failure mode (bad signature, malformed token, expired) folds
    /// into the single [`OpsError::TokenInvalid`] condition.
    pub fn verify(&self, token: &str) -> Result<ClaimMap> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;
        let data = decode::<ClaimMap>(
            token,
            &DecodingKey::from_secret(&self.secret),
            &validation,
        )
        .map_err(|_| OpsError::TokenInvalid)?;
        Ok(data.claims)
    }
}

/// Load a claim set from a JSON file. The top level must be an object.
pub fn load_claims(path: &Path) -> Result<ClaimMap> {
    let content = std::fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&content)?;
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(OpsError::InvalidInput(format!(
            "claims file {} must contain a JSON object",
            path.display()
        ))),
    }
}
