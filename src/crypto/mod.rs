//! Cryptographic operations for envseal
//!
//! Implements the key-preparation and envelope protocol: an arbitrary-length
//! password is normalized to a 32-byte AES-256 key, and every encryption
//! prepends a fresh random 16-byte IV to the CBC ciphertext.

mod envelope;
mod key;
mod task;

pub use envelope::{decrypt, encrypt};
pub use key::prepare_key;
pub use task::{decrypt_async, encrypt_async};
