//! TLS-1.3-style key derivation (RFC 8446 Section 7.1).
//!
//! All secrets flow through HKDF with labeled info blocks:
//! ```text
//! HKDF-Expand-Label(Secret, Label, Context, Length) =
//!     HKDF-Expand(Secret, HkdfLabel, Length)
//!
//! struct {
//!     uint16 length = Length;
//!     opaque label<7..255> = "tls13 " + Label;
//!     opaque context<0..255> = Context;
//! } HkdfLabel;
//! ```

use sealtls_crypto::{HashAlgorithm, Kdf};

use crate::error::{Error, Result};

const LABEL_PREFIX: &[u8] = b"tls13 ";

/// Key deriver bound to one cipher suite's hash.
///
/// Holds the suite's HKDF instance and exposes the labeled expansion
/// and transcript-related helpers the key schedule is built from.
pub struct KeyDerivation {
    algorithm: HashAlgorithm,
    kdf: Box<dyn Kdf>,
}

impl std::fmt::Debug for KeyDerivation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyDerivation")
            .field("algorithm", &self.algorithm)
            .finish()
    }
}

impl KeyDerivation {
    /// Create a key deriver from a hash algorithm and its matching
    /// HKDF instance.
    pub fn new(algorithm: HashAlgorithm, kdf: Box<dyn Kdf>) -> Self {
        Self { algorithm, kdf }
    }

    /// The hash algorithm this deriver operates with.
    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    /// Hash output length in bytes.
    pub fn hash_len(&self) -> usize {
        self.algorithm.output_size()
    }

    /// Digest of the empty string, the default transcript value.
    pub fn blank_hash(&self) -> &'static [u8] {
        self.algorithm.blank_hash()
    }

    /// HKDF-Extract.
    pub fn extract(&self, salt: &[u8], ikm: &[u8]) -> Vec<u8> {
        self.kdf.extract(salt, ikm)
    }

    /// HKDF-Expand-Label per RFC 8446 Section 7.1.
    pub fn expand_label(
        &self,
        secret: &[u8],
        label: &[u8],
        context: &[u8],
        length: usize,
    ) -> Result<Vec<u8>> {
        if length > u16::MAX as usize {
            return Err(Error::InternalError(
                "expand-label length does not fit in u16".to_string(),
            ));
        }
        let full_label_len = LABEL_PREFIX.len() + label.len();
        if full_label_len > u8::MAX as usize || context.len() > u8::MAX as usize {
            return Err(Error::InternalError(
                "expand-label label or context too long".to_string(),
            ));
        }

        let mut info = Vec::with_capacity(2 + 1 + full_label_len + 1 + context.len());
        info.extend_from_slice(&(length as u16).to_be_bytes());
        info.push(full_label_len as u8);
        info.extend_from_slice(LABEL_PREFIX);
        info.extend_from_slice(label);
        info.push(context.len() as u8);
        info.extend_from_slice(context);

        Ok(self.kdf.expand(secret, &info, length)?)
    }

    /// Derive-Secret: `HKDF-Expand-Label(secret, label, transcript_hash,
    /// hash_len)`.
    pub fn derive_secret(
        &self,
        secret: &[u8],
        label: &[u8],
        transcript_hash: &[u8],
    ) -> Result<Vec<u8>> {
        self.expand_label(secret, label, transcript_hash, self.hash_len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sealtls_crypto::{CryptoProvider, HashAlgorithm};
    use sealtls_crypto_rustcrypto::RustCryptoProvider;

    fn deriver(algorithm: HashAlgorithm) -> KeyDerivation {
        let provider = RustCryptoProvider::new();
        let kdf = provider.kdf(algorithm.to_kdf_algorithm()).unwrap();
        KeyDerivation::new(algorithm, kdf)
    }

    #[test]
    fn test_rfc8448_early_secret() {
        // RFC 8448 section 3: Early Secret = HKDF-Extract(0, 0).
        let kd = deriver(HashAlgorithm::Sha256);
        let early_secret = kd.extract(&[0u8; 32], &[0u8; 32]);
        assert_eq!(
            early_secret,
            hex::decode("33ad0a1c607ec03b09e6cd9893680ce210adf300aa1f2660e1b22e10f170f92a")
                .unwrap()
        );
    }

    #[test]
    fn test_rfc8448_derived_secret() {
        // RFC 8448 section 3: Derive-Secret(Early Secret, "derived", "").
        let kd = deriver(HashAlgorithm::Sha256);
        let early_secret = kd.extract(&[0u8; 32], &[0u8; 32]);
        let derived = kd
            .derive_secret(&early_secret, b"derived", kd.blank_hash())
            .unwrap();
        assert_eq!(
            derived,
            hex::decode("6f2615a108c702c5678f54fc9dbab69716c076189c48250cebeac3576c3611ba")
                .unwrap()
        );
    }

    #[test]
    fn test_expand_label_deterministic() {
        let kd = deriver(HashAlgorithm::Sha256);
        let secret = [0x42u8; 32];

        let okm1 = kd.expand_label(&secret, b"key", b"context", 16).unwrap();
        let okm2 = kd.expand_label(&secret, b"key", b"context", 16).unwrap();
        assert_eq!(okm1, okm2);
        assert_eq!(okm1.len(), 16);

        let okm3 = kd.expand_label(&secret, b"iv", b"context", 16).unwrap();
        assert_ne!(okm1, okm3);
    }

    #[test]
    fn test_expand_label_larger_hashes() {
        for algorithm in [HashAlgorithm::Sha384, HashAlgorithm::Sha512] {
            let kd = deriver(algorithm);
            let secret = vec![0x42u8; kd.hash_len()];
            let derived = kd.derive_secret(&secret, b"derived", kd.blank_hash()).unwrap();
            assert_eq!(derived.len(), kd.hash_len());
        }
    }
}
