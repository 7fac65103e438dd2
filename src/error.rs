//! Error types for envseal

use thiserror::Error;

/// Main error type for envelope operations
#[derive(Error, Debug)]
pub enum SealError {
    /// Decrypt input shorter than the 16-byte IV prefix
    #[error("Malformed envelope: {0} bytes, need at least 16")]
    MalformedEnvelope(usize),

    /// Unpadding failed - wrong password, corrupted or misaligned ciphertext
    #[error("Decryption failed: invalid padding (wrong password or corrupted data)")]
    InvalidCiphertext,

    /// The OS random source could not produce IV bytes
    #[error("Random source failure: {0}")]
    RandomSource(String),

    /// A background task running the cipher did not complete
    #[error("Background task failed: {0}")]
    TaskJoin(String),

    /// IO error from the terminal or file system
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for envelope operations
pub type Result<T> = std::result::Result<T, SealError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SealError::MalformedEnvelope(15);
        assert!(err.to_string().contains("15 bytes"));

        let err = SealError::InvalidCiphertext;
        assert!(err.to_string().contains("invalid padding"));

        let err = SealError::RandomSource("entropy pool unavailable".to_string());
        assert!(err.to_string().contains("entropy pool unavailable"));

        let err = SealError::TaskJoin("cancelled".to_string());
        assert!(err.to_string().contains("cancelled"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "stream closed");
        let err: SealError = io_err.into();
        match err {
            SealError::Io(inner) => assert_eq!(inner.kind(), std::io::ErrorKind::UnexpectedEof),
            _ => panic!("Expected Io"),
        }
    }
}
