//! AES-256-CBC envelope encryption and decryption
//!
//! Defines the on-wire byte layout: a fresh random 16-byte IV followed by the
//! PKCS7-padded CBC ciphertext (`IV || ciphertext`). There is no version tag,
//! checksum or authentication tag - the format is exactly these bytes and must
//! stay that way for compatibility with existing encrypted material.

use aes::Aes256;
use cbc::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use rand::rngs::OsRng;
use rand::TryRngCore;

use super::key::prepare_key;
use crate::error::{Result, SealError};
use crate::IV_SIZE;

type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

/// Encrypt plaintext under a password-derived key.
///
/// Generates a fresh random IV for every call, so encrypting the same input
/// twice yields different envelopes. Both decrypt back to the same plaintext.
///
/// # Arguments
///
/// * `plaintext` - The payload bytes to encrypt
/// * `password` - The raw password bytes (normalized via [`prepare_key`])
///
/// # Returns
///
/// The envelope `IV (16 bytes) || ciphertext` on success. The only failure
/// mode is the OS random source refusing to produce IV bytes, which is
/// surfaced as [`SealError::RandomSource`] and never worked around.
pub fn encrypt(plaintext: &[u8], password: &[u8]) -> Result<Vec<u8>> {
    let key = prepare_key(password);
    let iv = generate_iv()?;

    let encryptor = Aes256CbcEnc::new(&key.into(), &iv.into());
    let ciphertext = encryptor.encrypt_padded_vec_mut::<Pkcs7>(plaintext);

    let mut envelope = Vec::with_capacity(IV_SIZE + ciphertext.len());
    envelope.extend_from_slice(&iv);
    envelope.extend_from_slice(&ciphertext);

    Ok(envelope)
}

/// Decrypt an envelope produced by [`encrypt`].
///
/// The first 16 bytes are always interpreted as the IV; the remainder is the
/// ciphertext. Decryption is all-or-nothing: no partial plaintext is ever
/// returned on failure.
///
/// # Errors
///
/// * [`SealError::MalformedEnvelope`] if the input is shorter than the IV
/// * [`SealError::InvalidCiphertext`] if unpadding fails - wrong password,
///   corrupted ciphertext, or a length that is not a multiple of the block size
pub fn decrypt(envelope: &[u8], password: &[u8]) -> Result<Vec<u8>> {
    if envelope.len() < IV_SIZE {
        return Err(SealError::MalformedEnvelope(envelope.len()));
    }

    let mut iv = [0u8; IV_SIZE];
    iv.copy_from_slice(&envelope[..IV_SIZE]);
    let ciphertext = &envelope[IV_SIZE..];

    let key = prepare_key(password);

    let decryptor = Aes256CbcDec::new(&key.into(), &iv.into());
    let plaintext = decryptor
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| SealError::InvalidCiphertext)?;

    Ok(plaintext)
}

/// Generate a fresh IV from the OS random source.
///
/// A failing random source is fatal and propagated; a fixed IV is never
/// substituted (IV reuse under the same key breaks CBC confidentiality).
fn generate_iv() -> Result<[u8; IV_SIZE]> {
    let mut iv = [0u8; IV_SIZE];
    OsRng
        .try_fill_bytes(&mut iv)
        .map_err(|e| SealError::RandomSource(e.to_string()))?;
    Ok(iv)
}
