//! # envseal
//!
//! A minimal symmetric-encryption helper around AES-256-CBC.
//!
//! The crate does two things:
//!
//! - **Key preparation**: normalizes an arbitrary-length password byte
//!   sequence into a fixed 32-byte cipher key by truncating or zero-padding.
//! - **Envelope codec**: encrypts a payload under a fresh random IV and emits
//!   `IV || ciphertext`; decrypts the same layout back to the payload.
//!
//! An interactive terminal flow (the `envseal` binary) lets a user seal a
//! secret without the plaintext ever touching the disk; only the hex-encoded
//! envelope may be saved.
//!
//! **Security note**: key preparation is deliberately *not* a key-derivation
//! function (no hashing, salting or stretching) and the envelope carries no
//! authentication tag. Both are required for interoperability with existing
//! encrypted material. Do not reuse this scheme where a modern AEAD is an
//! option.
//!
//! ## Example
//!
//! ```
//! let envelope = envseal::encrypt(b"Hello, Francis!", b"This is a weak key").unwrap();
//! let plaintext = envseal::decrypt(&envelope, b"This is a weak key").unwrap();
//! assert_eq!(plaintext, b"Hello, Francis!");
//! ```

pub mod cli;
pub mod crypto;
pub mod error;

// Re-export main types
pub use crypto::{decrypt, decrypt_async, encrypt, encrypt_async, prepare_key};
pub use error::{Result, SealError};

/// Key size for AES-256 (32 bytes = 256 bits)
pub const KEY_SIZE: usize = 32;

/// IV size for AES-CBC (16 bytes = 128 bits)
pub const IV_SIZE: usize = 16;

/// AES block size in bytes
pub const BLOCK_SIZE: usize = 16;

/// Passwords shorter than this trigger a soft warning in the terminal flow
pub const PASSWORD_WARN_LENGTH: usize = 8;
