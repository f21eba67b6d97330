//! Secret encryption
//!
//! Password-typed fields (such as `aws_secret_access_key`) are never stored in
//! clear text. Each value is sealed with AES-256-GCM under a key derived from
//! the store's encryption key with PBKDF2, using a fresh salt and nonce.

mod versions;

pub use versions::{current_iterations, pbkdf2_iterations, CURRENT_SECRET_VERSION};

use aes_gcm::{
    aead::{Aead, KeyInit},
    Aes256Gcm, Nonce,
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use pbkdf2::pbkdf2_hmac_array;
use rand::RngCore;
use sha2::Sha256;

use crate::error::{CoreError, CoreResult};

const SALT_LENGTH: usize = 16;
const NONCE_LENGTH: usize = 12;
const KEY_LENGTH: usize = 32; // AES-256

/// A sealed secret as persisted by a store. All byte fields are base64.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptedSecret {
    pub salt: String,
    pub nonce: String,
    pub ciphertext: String,
    /// Key derivation version, see `pbkdf2_iterations`
    pub version: u32,
}

fn derive_key(encryption_key: &str, salt: &[u8], iterations: u32) -> [u8; KEY_LENGTH] {
    pbkdf2_hmac_array::<Sha256, KEY_LENGTH>(encryption_key.as_bytes(), salt, iterations)
}

fn cipher_for(key: &[u8; KEY_LENGTH]) -> CoreResult<Aes256Gcm> {
    Aes256Gcm::new_from_slice(key)
        .map_err(|e| CoreError::SecretError(format!("Failed to create cipher: {e}")))
}

/// Seal `plaintext` with the current key derivation version.
pub fn encrypt(plaintext: &[u8], encryption_key: &str) -> CoreResult<EncryptedSecret> {
    let mut salt = [0u8; SALT_LENGTH];
    let mut nonce_bytes = [0u8; NONCE_LENGTH];
    rand::rng().fill_bytes(&mut salt);
    rand::rng().fill_bytes(&mut nonce_bytes);

    let key = derive_key(encryption_key, &salt, current_iterations());
    let ciphertext = cipher_for(&key)?
        .encrypt(Nonce::from_slice(&nonce_bytes), plaintext)
        .map_err(|e| CoreError::SecretError(format!("Encryption failed: {e}")))?;

    Ok(EncryptedSecret {
        salt: BASE64.encode(salt),
        nonce: BASE64.encode(nonce_bytes),
        ciphertext: BASE64.encode(ciphertext),
        version: CURRENT_SECRET_VERSION,
    })
}

/// Open a sealed secret using the key derivation version it was written with.
pub fn decrypt(secret: &EncryptedSecret, encryption_key: &str) -> CoreResult<Vec<u8>> {
    let iterations = pbkdf2_iterations(secret.version).ok_or_else(|| {
        CoreError::SecretError(format!("Unsupported secret version: {}", secret.version))
    })?;

    let salt = BASE64
        .decode(&secret.salt)
        .map_err(|e| CoreError::SecretError(format!("Invalid salt: {e}")))?;
    let nonce_bytes = BASE64
        .decode(&secret.nonce)
        .map_err(|e| CoreError::SecretError(format!("Invalid nonce: {e}")))?;
    let ciphertext = BASE64
        .decode(&secret.ciphertext)
        .map_err(|e| CoreError::SecretError(format!("Invalid ciphertext: {e}")))?;
    if nonce_bytes.len() != NONCE_LENGTH {
        return Err(CoreError::SecretError("Invalid nonce length".to_string()));
    }

    let key = derive_key(encryption_key, &salt, iterations);
    cipher_for(&key)?
        .decrypt(Nonce::from_slice(&nonce_bytes), ciphertext.as_ref())
        .map_err(|_| {
            CoreError::SecretError(
                "Decryption failed: wrong encryption key or corrupted data".to_string(),
            )
        })
}
