//! Token issuance and verification integration tests

use chrono::Utc;
use opskit::token::{load_claims, ClaimMap, TokenSigner, ENVIRONMENT_CLAIM, EXPIRY_CLAIM};
use opskit::OpsError;
use serde_json::{json, Value};

fn claims(pairs: &[(&str, Value)]) -> ClaimMap {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

#[test]
fn test_round_trip_preserves_caller_claims() {
    let signer = TokenSigner::new("integration-secret");
    let input = claims(&[("user_id", json!("u-1093")), ("role", json!("admin"))]);

    let token = signer.issue(&input, "prod", 3600).unwrap();
    let output = signer.verify(&token).unwrap();

    assert_eq!(output.get("user_id"), Some(&json!("u-1093")));
    assert_eq!(output.get("role"), Some(&json!("admin")));
    assert_eq!(output.get(ENVIRONMENT_CLAIM), Some(&json!("prod")));
}

#[test]
fn test_expiry_lands_at_now_plus_lifetime() {
    let signer = TokenSigner::new("integration-secret");
    let before = Utc::now().timestamp();

    let token = signer.issue(&ClaimMap::new(), "dev", 3600).unwrap();
    let output = signer.verify(&token).unwrap();

    let exp = output.get(EXPIRY_CLAIM).and_then(Value::as_i64).unwrap();
    assert!(exp >= before + 3600);
    assert!(exp <= Utc::now().timestamp() + 3600 + 5);
}

#[test]
fn test_reserved_claims_overwrite_caller_values() {
    let signer = TokenSigner::new("integration-secret");
    let input = claims(&[
        ("env", json!("forged")),
        ("exp", json!(9_999_999_999i64)),
        ("subject", json!("deploy-bot")),
    ]);

    let token = signer.issue(&input, "prod", 60).unwrap();
    let output = signer.verify(&token).unwrap();

    assert_eq!(output.get(ENVIRONMENT_CLAIM), Some(&json!("prod")));
    let exp = output.get(EXPIRY_CLAIM).and_then(Value::as_i64).unwrap();
    assert!(exp < 9_999_999_999);
    assert_eq!(output.get("subject"), Some(&json!("deploy-bot")));
}

#[test]
fn test_tampered_token_is_rejected() {
    let signer = TokenSigner::new("integration-secret");
    let token = signer.issue(&ClaimMap::new(), "prod", 3600).unwrap();

    // Flip a character in the payload segment.
    let mut parts: Vec<String> = token.split('.').map(str::to_string).collect();
    assert_eq!(parts.len(), 3);
    let mut payload: Vec<char> = parts[1].chars().collect();
    payload[0] = if payload[0] == 'A' { 'B' } else { 'A' };
    parts[1] = payload.into_iter().collect();
    let tampered = parts.join(".");

    assert!(matches!(
        signer.verify(&tampered),
        Err(OpsError::TokenInvalid)
    ));
}

#[test]
fn test_wrong_secret_is_rejected() {
    let issuer = TokenSigner::new("secret-a");
    let verifier = TokenSigner::new("secret-b");

    let token = issuer.issue(&ClaimMap::new(), "prod", 3600).unwrap();
    assert!(matches!(
        verifier.verify(&token),
        Err(OpsError::TokenInvalid)
    ));
}

#[test]
fn test_expired_token_is_rejected() {
    let signer = TokenSigner::new("integration-secret");
    let token = signer.issue(&ClaimMap::new(), "prod", -600).unwrap();

    assert!(matches!(signer.verify(&token), Err(OpsError::TokenInvalid)));
}

#[test]
fn test_garbage_token_is_rejected() {
    let signer = TokenSigner::new("integration-secret");
    assert!(matches!(
        signer.verify("not-a-token"),
        Err(OpsError::TokenInvalid)
    ));
}

mod claims_file_tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_load_claims_reads_a_json_object() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("claims.json");
        fs::write(&path, r#"{"user_id": "u-1093", "role": "admin"}"#).unwrap();

        let map = load_claims(&path).unwrap();
        assert_eq!(map.get("user_id"), Some(&json!("u-1093")));
        assert_eq!(map.get("role"), Some(&json!("admin")));
    }

    #[test]
    fn test_load_claims_rejects_non_objects() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("claims.json");
        fs::write(&path, r#"["not", "an", "object"]"#).unwrap();

        assert!(matches!(
            load_claims(&path),
            Err(OpsError::InvalidInput(_))
        ));
    }
}
