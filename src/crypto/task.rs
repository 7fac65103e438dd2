//! Asynchronous variants of the envelope operations
//!
//! Identical semantics, inputs, outputs and failure modes to the synchronous
//! [`encrypt`](super::encrypt) and [`decrypt`](super::decrypt); only the
//! scheduling differs. The whole payload is buffered before and after the
//! call, so the transform runs once on the blocking thread pool rather than
//! streaming in chunks.

use super::envelope;
use crate::error::{Result, SealError};

/// Encrypt on the blocking thread pool.
///
/// Lets a caller interleave the (CPU-bound, short, non-interruptible)
/// transform with other concurrent I/O work. See [`encrypt`](super::encrypt)
/// for the contract.
pub async fn encrypt_async(plaintext: Vec<u8>, password: Vec<u8>) -> Result<Vec<u8>> {
    tokio::task::spawn_blocking(move || envelope::encrypt(&plaintext, &password))
        .await
        .map_err(|e| SealError::TaskJoin(e.to_string()))?
}

/// Decrypt on the blocking thread pool.
///
/// See [`decrypt`](super::decrypt) for the contract and error taxonomy.
pub async fn decrypt_async(envelope: Vec<u8>, password: Vec<u8>) -> Result<Vec<u8>> {
    tokio::task::spawn_blocking(move || envelope::decrypt(&envelope, &password))
        .await
        .map_err(|e| SealError::TaskJoin(e.to_string()))?
}
