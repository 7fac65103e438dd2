//! Key preparation for AES-256 encryption
//!
//! Normalizes an arbitrary-length password byte sequence into a fixed-size
//! cipher key:
//! 1. Passwords of 32 bytes or more are truncated to the first 32 bytes
//! 2. Shorter passwords are right-padded with zero bytes
//!
//! **IMPORTANT**: This is *not* a key-derivation function. Short passwords
//! yield low-entropy keys and anything past the 32nd byte is discarded.
//! The exact truncate/pad behavior is required bit-for-bit for compatibility
//! with existing encrypted envelopes.

use crate::KEY_SIZE;

/// Prepare an encryption key from password bytes.
///
/// Pure and total: accepts any byte sequence, including empty (which yields
/// 32 zero bytes).
///
/// # Arguments
///
/// * `password` - The raw password bytes
///
/// # Returns
///
/// A 32-byte key suitable for AES-256 encryption
pub fn prepare_key(password: &[u8]) -> [u8; KEY_SIZE] {
    let mut key = [0u8; KEY_SIZE];

    // Copy up to KEY_SIZE bytes; the rest stays zero
    let copy_len = std::cmp::min(password.len(), KEY_SIZE);
    key[..copy_len].copy_from_slice(&password[..copy_len]);

    key
}
