//! AEAD (Authenticated Encryption with Associated Data) cipher interface.

use zeroize::Zeroize;

use crate::Result;

/// AEAD cipher algorithms supported by SealTLS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AeadAlgorithm {
    /// AES-128-GCM (TLS 1.3 mandatory cipher)
    Aes128Gcm,
    /// AES-256-GCM (TLS 1.3 mandatory cipher)
    Aes256Gcm,
    /// ChaCha20-Poly1305 (TLS 1.3 mandatory cipher)
    ChaCha20Poly1305,
    /// AES-128-CCM (TLS 1.3 optional, for constrained devices)
    Aes128Ccm,
    /// AES-128-CCM-8 (TLS 1.3 optional, for IoT)
    Aes128Ccm8,
    /// AES-128-OCB (experimental)
    Aes128Ocb,
    /// AEGIS-128L (experimental, 16-byte nonce)
    Aegis128L,
    /// AEGIS-256 (experimental, 32-byte nonce)
    Aegis256,
}

impl AeadAlgorithm {
    /// Get the key size in bytes for this algorithm.
    pub const fn key_size(self) -> usize {
        match self {
            AeadAlgorithm::Aes128Gcm => 16,
            AeadAlgorithm::Aes256Gcm => 32,
            AeadAlgorithm::ChaCha20Poly1305 => 32,
            AeadAlgorithm::Aes128Ccm => 16,
            AeadAlgorithm::Aes128Ccm8 => 16,
            AeadAlgorithm::Aes128Ocb => 16,
            AeadAlgorithm::Aegis128L => 16,
            AeadAlgorithm::Aegis256 => 32,
        }
    }

    /// Get the nonce size in bytes for this algorithm.
    ///
    /// Most TLS 1.3 AEADs use 12-byte nonces; AEGIS uses wider ones.
    pub const fn nonce_size(self) -> usize {
        match self {
            AeadAlgorithm::Aes128Gcm
            | AeadAlgorithm::Aes256Gcm
            | AeadAlgorithm::ChaCha20Poly1305
            | AeadAlgorithm::Aes128Ccm
            | AeadAlgorithm::Aes128Ccm8
            | AeadAlgorithm::Aes128Ocb => 12,
            AeadAlgorithm::Aegis128L => 16,
            AeadAlgorithm::Aegis256 => 32,
        }
    }

    /// Get the authentication tag size in bytes for this algorithm.
    ///
    /// AEGIS also defines a 32-byte tag variant; SealTLS uses the
    /// 16-byte tag throughout.
    pub const fn tag_size(self) -> usize {
        match self {
            AeadAlgorithm::Aes128Gcm => 16,
            AeadAlgorithm::Aes256Gcm => 16,
            AeadAlgorithm::ChaCha20Poly1305 => 16,
            AeadAlgorithm::Aes128Ccm => 16,
            AeadAlgorithm::Aes128Ccm8 => 8,
            AeadAlgorithm::Aes128Ocb => 16,
            AeadAlgorithm::Aegis128L => 16,
            AeadAlgorithm::Aegis256 => 16,
        }
    }

    /// Get the name of this algorithm as used in TLS.
    pub const fn name(self) -> &'static str {
        match self {
            AeadAlgorithm::Aes128Gcm => "AES_128_GCM",
            AeadAlgorithm::Aes256Gcm => "AES_256_GCM",
            AeadAlgorithm::ChaCha20Poly1305 => "CHACHA20_POLY1305",
            AeadAlgorithm::Aes128Ccm => "AES_128_CCM",
            AeadAlgorithm::Aes128Ccm8 => "AES_128_CCM_8",
            AeadAlgorithm::Aes128Ocb => "AES_128_OCB",
            AeadAlgorithm::Aegis128L => "AEGIS_128L",
            AeadAlgorithm::Aegis256 => "AEGIS_256",
        }
    }
}

/// Key and IV material for an AEAD cipher.
///
/// `key` must match the algorithm's key size and `iv` its nonce size.
/// The material is zeroized when the struct is dropped; installing it
/// into a cipher via [`Aead::set_key`] consumes it.
#[derive(Zeroize)]
#[zeroize(drop)]
pub struct TrafficKey {
    /// AEAD key bytes.
    pub key: Vec<u8>,
    /// Implicit IV bytes, XORed with the per-message counter to form
    /// each nonce.
    pub iv: Vec<u8>,
}

impl TrafficKey {
    /// Create a traffic key from raw key and IV bytes.
    pub fn new(key: Vec<u8>, iv: Vec<u8>) -> Self {
        Self { key, iv }
    }
}

impl std::fmt::Debug for TrafficKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrafficKey")
            .field("key", &"<redacted>")
            .field("iv", &"<redacted>")
            .finish()
    }
}

/// AEAD cipher trait.
///
/// Instances are constructed unkeyed by a [`CryptoProvider`] and
/// transition to keyed exactly once via [`Aead::set_key`]; thereafter
/// they accept any number of `encrypt`/`decrypt` calls. Independent
/// instances may be used concurrently; a single instance is not
/// required to be re-entrant.
///
/// # Security Requirements
///
/// - Tag verification MUST be constant-time
/// - Nonces MUST NOT be reused with the same key
///
/// [`CryptoProvider`]: crate::CryptoProvider
pub trait Aead: Send {
    /// Install key and IV material.
    ///
    /// May be called exactly once per instance.
    ///
    /// # Errors
    ///
    /// - `InvalidKeySize` if the key length doesn't match the algorithm
    /// - `InvalidNonceSize` if the IV length doesn't match the algorithm
    /// - `Internal` if key material was already installed
    fn set_key(&mut self, key: TrafficKey) -> Result<()>;

    /// Get the installed IV, or `None` before [`Aead::set_key`].
    fn iv(&self) -> Option<&[u8]>;

    /// Encrypt and authenticate plaintext.
    ///
    /// The nonce is supplied by the caller; deriving a unique nonce per
    /// message (e.g. from a sequence counter) is the caller's job.
    ///
    /// # Returns
    ///
    /// Ciphertext with the authentication tag appended
    /// (`len(plaintext) + tag_size()` bytes).
    ///
    /// # Errors
    ///
    /// - `KeyNotSet` if no key material was installed
    /// - `InvalidNonceSize` if the nonce length doesn't match
    fn encrypt(&self, plaintext: &[u8], aad: &[u8], nonce: &[u8]) -> Result<Vec<u8>>;

    /// Decrypt and verify ciphertext (with trailing tag).
    ///
    /// # Errors
    ///
    /// - `KeyNotSet` if no key material was installed
    /// - `InvalidNonceSize` if the nonce length doesn't match
    /// - `AuthenticationFailed` if tag verification fails
    fn decrypt(&self, ciphertext: &[u8], aad: &[u8], nonce: &[u8]) -> Result<Vec<u8>>;

    /// Hint that buffers returned by [`Aead::encrypt`] should reserve
    /// `headroom` bytes of spare capacity in front of the ciphertext,
    /// so a caller prepending framing does not force a reallocation.
    ///
    /// Purely a layout optimization; the ciphertext bytes are
    /// unaffected and implementations remain correct if they ignore
    /// the hint.
    fn set_encrypted_buffer_headroom(&mut self, headroom: usize);

    /// Get the algorithm this cipher implements.
    fn algorithm(&self) -> AeadAlgorithm;

    /// Get the key size in bytes.
    fn key_size(&self) -> usize {
        self.algorithm().key_size()
    }

    /// Get the nonce size in bytes.
    fn nonce_size(&self) -> usize {
        self.algorithm().nonce_size()
    }

    /// Get the authentication tag size in bytes.
    fn tag_size(&self) -> usize {
        self.algorithm().tag_size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_algorithm_parameters() {
        assert_eq!(AeadAlgorithm::Aes128Gcm.key_size(), 16);
        assert_eq!(AeadAlgorithm::Aes256Gcm.key_size(), 32);
        assert_eq!(AeadAlgorithm::ChaCha20Poly1305.key_size(), 32);
        assert_eq!(AeadAlgorithm::Aes128Ocb.key_size(), 16);
        assert_eq!(AeadAlgorithm::Aes128Gcm.nonce_size(), 12);
        assert_eq!(AeadAlgorithm::Aegis128L.nonce_size(), 16);
        assert_eq!(AeadAlgorithm::Aegis256.nonce_size(), 32);
        assert_eq!(AeadAlgorithm::Aes128Ccm8.tag_size(), 8);
        assert_eq!(AeadAlgorithm::Aegis256.tag_size(), 16);
    }

    #[test]
    fn test_traffic_key_debug_redacted() {
        let key = TrafficKey::new(vec![0xAA; 16], vec![0xBB; 12]);
        let rendered = format!("{:?}", key);
        assert!(!rendered.contains("170")); // 0xAA
        assert!(rendered.contains("<redacted>"));
    }
}
