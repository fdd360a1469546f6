//! Error types for the SealTLS core.

use core::fmt;

/// Result type for SealTLS core operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur in the SealTLS core.
///
/// None of these are retriable at this layer; the caller decides what
/// to do with the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The factory cannot produce an instance for this suite or group
    /// (unknown registry value, or no backing implementation).
    UnsupportedSuite(String),

    /// The suite or group exists but its implementation was compiled
    /// out.
    NotImplemented(String),

    /// Key or IV material was rejected because its length does not
    /// match the algorithm.
    KeyLengthMismatch {
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// AEAD authentication failed. The context state is unchanged.
    AuthenticationFailed,

    /// The sequence counter reached its maximum for the AEAD's nonce
    /// width; the context cannot seal or open further messages.
    SequenceOverflow,

    /// The requested export length exceeds what the KDF can produce.
    ExportTooLarge {
        /// Requested output length
        requested: usize,
        /// Maximum output length (`255 * hash_len`)
        max: usize,
    },

    /// Cryptographic error from the provider layer.
    CryptoError(String),

    /// Internal error
    InternalError(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnsupportedSuite(msg) => write!(f, "Unsupported suite: {}", msg),
            Error::NotImplemented(msg) => write!(f, "Not implemented: {}", msg),
            Error::KeyLengthMismatch { expected, actual } => {
                write!(
                    f,
                    "Key length mismatch: expected {} bytes, got {}",
                    expected, actual
                )
            },
            Error::AuthenticationFailed => write!(f, "Authentication failed"),
            Error::SequenceOverflow => write!(f, "Sequence number overflow"),
            Error::ExportTooLarge { requested, max } => {
                write!(
                    f,
                    "Export length {} exceeds maximum of {} bytes",
                    requested, max
                )
            },
            Error::CryptoError(msg) => write!(f, "Cryptographic error: {}", msg),
            Error::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<sealtls_crypto::Error> for Error {
    fn from(e: sealtls_crypto::Error) -> Self {
        use sealtls_crypto::Error as CryptoError;
        match e {
            CryptoError::AuthenticationFailed => Error::AuthenticationFailed,
            CryptoError::UnsupportedAlgorithm(msg) => Error::UnsupportedSuite(msg),
            CryptoError::NotImplemented(msg) => Error::NotImplemented(msg),
            CryptoError::InvalidKeySize { expected, actual }
            | CryptoError::InvalidNonceSize { expected, actual } => {
                Error::KeyLengthMismatch { expected, actual }
            },
            other => Error::CryptoError(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crypto_error_conversion() {
        assert_eq!(
            Error::from(sealtls_crypto::Error::AuthenticationFailed),
            Error::AuthenticationFailed
        );
        assert_eq!(
            Error::from(sealtls_crypto::Error::InvalidKeySize {
                expected: 16,
                actual: 32
            }),
            Error::KeyLengthMismatch {
                expected: 16,
                actual: 32
            }
        );
        assert!(matches!(
            Error::from(sealtls_crypto::Error::KeyNotSet),
            Error::CryptoError(_)
        ));
    }
}
