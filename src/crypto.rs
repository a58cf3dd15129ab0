//! Encryption primitives: fernet tokens (symmetric, authenticated),
//! base64 transport encoding, and RSA PKCS#1 v1.5 public-key encryption.
//!
//! Key material always arrives as bytes read by the caller; nothing here
//! touches the filesystem. Decryption functions are part of the library
//! surface even where no command exposes them yet.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use openssl::rsa::{Padding, Rsa};

use crate::error::{OpsError, Result};

/// Encrypt under a fernet key (urlsafe base64 of 32 bytes).
pub fn encrypt_fernet(key: &str, plaintext: &[u8]) -> Result<String> {
    Ok(fernet_for(key)?.encrypt(plaintext))
}

/// Decrypt a fernet token produced under the same key.
pub fn decrypt_fernet(key: &str, token: &str) -> Result<Vec<u8>> {
    fernet_for(key)?
        .decrypt(token.trim())
        .map_err(|_| OpsError::Crypto("fernet decryption failed".to_string()))
}

/// Standard base64 encoding.
pub fn encode_base64(data: &[u8]) -> String {
    BASE64.encode(data)
}

/// Strict standard base64 decoding.
pub fn decode_base64(text: &str) -> Result<Vec<u8>> {
    BASE64
        .decode(text.trim())
        .map_err(|e| OpsError::Crypto(format!("base64 decode failed: {e}")))
}

/// RSA PKCS#1 v1.5 encryption under a PEM public key.
///
/// Accepts both SubjectPublicKeyInfo (`BEGIN PUBLIC KEY`) and PKCS#1
/// (`BEGIN RSA PUBLIC KEY`) encodings.
pub fn encrypt_rsa(public_key_pem: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
    let rsa = Rsa::public_key_from_pem(public_key_pem)
        .or_else(|_| Rsa::public_key_from_pem_pkcs1(public_key_pem))?;
    // PKCS#1 v1.5 padding costs 11 bytes of the modulus
    let limit = rsa.size() as usize - 11;
    if plaintext.len() > limit {
        return Err(OpsError::InvalidInput(format!(
            "plaintext is {} bytes but this key can encrypt at most {limit}",
            plaintext.len()
        )));
    }
    let mut ciphertext = vec![0u8; rsa.size() as usize];
    let written = rsa.public_encrypt(plaintext, &mut ciphertext, Padding::PKCS1)?;
    ciphertext.truncate(written);
    Ok(ciphertext)
}

/// RSA PKCS#1 v1.5 decryption under a PEM private key.
pub fn decrypt_rsa(private_key_pem: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
    let rsa = Rsa::private_key_from_pem(private_key_pem)?;
    let mut plaintext = vec![0u8; rsa.size() as usize];
    let written = rsa.private_decrypt(ciphertext, &mut plaintext, Padding::PKCS1)?;
    plaintext.truncate(written);
    Ok(plaintext)
}

fn fernet_for(key: &str) -> Result<fernet::Fernet> {
    fernet::Fernet::new(key.trim())
        .ok_or_else(|| OpsError::Crypto("invalid fernet key".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fernet_round_trip() {
        let key = fernet::Fernet::generate_key();
        let token = encrypt_fernet(&key, b"attack at dawn").unwrap();
        assert_eq!(decrypt_fernet(&key, &token).unwrap(), b"attack at dawn");
    }

    #[test]
    fn fernet_rejects_garbled_key() {
        assert!(encrypt_fernet("not-a-key", b"x").is_err());
    }

    #[test]
    fn fernet_rejects_wrong_key() {
        let token = encrypt_fernet(&fernet::Fernet::generate_key(), b"x").unwrap();
        let other = fernet::Fernet::generate_key();
        assert!(decrypt_fernet(&other, &token).is_err());
    }

    #[test]
    fn base64_round_trip() {
        let encoded = encode_base64(b"hello world");
        assert_eq!(encoded, "aGVsbG8gd29ybGQ=");
        assert_eq!(decode_base64(&encoded).unwrap(), b"hello world");
    }

    #[test]
    fn rsa_round_trip() {
        let keypair = Rsa::generate(2048).unwrap();
        let public_pem = keypair.public_key_to_pem().unwrap();
        let private_pem = keypair.private_key_to_pem().unwrap();

        let ciphertext = encrypt_rsa(&public_pem, b"short secret").unwrap();
        assert_ne!(ciphertext, b"short secret");
        assert_eq!(
            decrypt_rsa(&private_pem, &ciphertext).unwrap(),
            b"short secret"
        );
    }

    #[test]
    fn rsa_rejects_oversized_plaintext() {
        let keypair = Rsa::generate(2048).unwrap();
        let public_pem = keypair.public_key_to_pem().unwrap();
        let oversized = vec![0u8; 2048 / 8 - 10];
        assert!(matches!(
            encrypt_rsa(&public_pem, &oversized),
            Err(OpsError::InvalidInput(_))
        ));
    }
}
