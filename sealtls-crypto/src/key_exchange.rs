//! Key exchange algorithms.

use crate::Result;
use zeroize::Zeroize;

/// Key exchange algorithms supported by SealTLS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyExchangeAlgorithm {
    /// X25519 (Curve25519 ECDHE)
    X25519,
    /// secp256r1 (P-256, NIST curve)
    Secp256r1,
    /// secp384r1 (P-384, NIST curve)
    Secp384r1,
    /// secp521r1 (P-521, NIST curve)
    Secp521r1,

    /// Kyber-512 KEM (standalone, experimental)
    Kyber512,
    /// X25519 + Kyber-512 (hybrid, experimental)
    X25519Kyber512,
    /// P-256 + Kyber-512 (hybrid, experimental)
    Secp256r1Kyber512,
    /// X25519 + Kyber-768 (hybrid, experimental)
    X25519Kyber768,
    /// P-256 + Kyber-768 (hybrid, experimental)
    Secp256r1Kyber768,
}

impl KeyExchangeAlgorithm {
    /// Get the public key share size in bytes for this algorithm.
    ///
    /// For the KEM-based algorithms this is the encapsulation key size;
    /// hybrids concatenate the classical share and the KEM share.
    pub const fn public_key_size(self) -> usize {
        match self {
            KeyExchangeAlgorithm::X25519 => 32,
            KeyExchangeAlgorithm::Secp256r1 => 65, // Uncompressed point
            KeyExchangeAlgorithm::Secp384r1 => 97,
            KeyExchangeAlgorithm::Secp521r1 => 133,
            KeyExchangeAlgorithm::Kyber512 => 800,
            KeyExchangeAlgorithm::X25519Kyber512 => 32 + 800,
            KeyExchangeAlgorithm::Secp256r1Kyber512 => 65 + 800,
            KeyExchangeAlgorithm::X25519Kyber768 => 32 + 1184,
            KeyExchangeAlgorithm::Secp256r1Kyber768 => 65 + 1184,
        }
    }

    /// Get the shared secret size in bytes.
    pub const fn shared_secret_size(self) -> usize {
        match self {
            KeyExchangeAlgorithm::X25519 => 32,
            KeyExchangeAlgorithm::Secp256r1 => 32,
            KeyExchangeAlgorithm::Secp384r1 => 48,
            KeyExchangeAlgorithm::Secp521r1 => 66,
            KeyExchangeAlgorithm::Kyber512 => 32,
            // Hybrid secrets are the concatenation of both halves
            KeyExchangeAlgorithm::X25519Kyber512 => 64,
            KeyExchangeAlgorithm::Secp256r1Kyber512 => 64,
            KeyExchangeAlgorithm::X25519Kyber768 => 64,
            KeyExchangeAlgorithm::Secp256r1Kyber768 => 64,
        }
    }

    /// Get the algorithm name.
    pub const fn name(self) -> &'static str {
        match self {
            KeyExchangeAlgorithm::X25519 => "X25519",
            KeyExchangeAlgorithm::Secp256r1 => "secp256r1",
            KeyExchangeAlgorithm::Secp384r1 => "secp384r1",
            KeyExchangeAlgorithm::Secp521r1 => "secp521r1",
            KeyExchangeAlgorithm::Kyber512 => "Kyber512",
            KeyExchangeAlgorithm::X25519Kyber512 => "X25519Kyber512",
            KeyExchangeAlgorithm::Secp256r1Kyber512 => "SecP256r1Kyber512",
            KeyExchangeAlgorithm::X25519Kyber768 => "X25519Kyber768",
            KeyExchangeAlgorithm::Secp256r1Kyber768 => "SecP256r1Kyber768",
        }
    }

    /// Check if this is (or contains) a post-quantum algorithm.
    pub const fn is_post_quantum(self) -> bool {
        matches!(
            self,
            KeyExchangeAlgorithm::Kyber512
                | KeyExchangeAlgorithm::X25519Kyber512
                | KeyExchangeAlgorithm::Secp256r1Kyber512
                | KeyExchangeAlgorithm::X25519Kyber768
                | KeyExchangeAlgorithm::Secp256r1Kyber768
        )
    }
}

/// Private key for key exchange.
///
/// This type wraps the private key material and ensures it's zeroized
/// when dropped.
#[derive(Zeroize)]
#[zeroize(drop)]
pub struct PrivateKey {
    bytes: Vec<u8>,
}

impl std::fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrivateKey")
            .field("bytes", &"<redacted>")
            .finish()
    }
}

impl PrivateKey {
    /// Create a new private key from bytes.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Get the private key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// Public key for key exchange.
#[derive(Debug)]
pub struct PublicKey {
    bytes: Vec<u8>,
}

impl PublicKey {
    /// Create a new public key from bytes.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Get the public key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Convert to owned bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// Shared secret from key exchange.
///
/// This type wraps the shared secret and ensures it's zeroized when
/// dropped.
#[derive(Zeroize)]
#[zeroize(drop)]
pub struct SharedSecret {
    bytes: Vec<u8>,
}

impl std::fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedSecret")
            .field("bytes", &"<redacted>")
            .finish()
    }
}

impl SharedSecret {
    /// Create a new shared secret from bytes.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Get the shared secret bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Convert to owned bytes (consumes the SharedSecret).
    ///
    /// Note: The bytes are NOT zeroized when using this method,
    /// as ownership is transferred to the caller.
    pub fn into_bytes(mut self) -> Vec<u8> {
        core::mem::take(&mut self.bytes)
    }
}

/// Key exchange trait.
///
/// KEM-based algorithms fit the same interface asymmetrically: the
/// share passed to [`KeyExchange::exchange`] is the KEM ciphertext and
/// the call performs decapsulation.
pub trait KeyExchange: Send + Sync {
    /// Generate an ephemeral key pair.
    ///
    /// # Security
    ///
    /// The private key MUST be generated using a CSPRNG and is
    /// zeroized when dropped.
    fn generate_keypair(&self) -> Result<(PrivateKey, PublicKey)>;

    /// Compute the shared secret from our private key and the peer's
    /// share.
    ///
    /// # Errors
    ///
    /// - `InvalidPublicKey` if the peer's share is malformed
    /// - `KeyExchangeFailed` for other errors
    fn exchange(&self, private_key: &PrivateKey, peer_public_key: &[u8]) -> Result<SharedSecret>;

    /// Get the algorithm this key exchange implements.
    fn algorithm(&self) -> KeyExchangeAlgorithm;

    /// Get the expected public share size in bytes.
    fn public_key_size(&self) -> usize {
        self.algorithm().public_key_size()
    }

    /// Get the shared secret size in bytes.
    fn shared_secret_size(&self) -> usize {
        self.algorithm().shared_secret_size()
    }
}
