//! Labeled HKDF for HPKE.
//!
//! Every extract/expand call is domain-separated by a protocol-version
//! prefix (e.g. `"HPKE-05 "`) and the suite id of the context it
//! serves:
//!
//! ```text
//! LabeledExtract(salt, label, ikm) =
//!     Extract(salt, prefix || suite_id || label || ikm)
//! LabeledExpand(prk, label, info, L) =
//!     Expand(prk, I2OSP(L, 2) || prefix || suite_id || label || info, L)
//! ```

use sealtls_crypto::Kdf;

use crate::error::Result;

/// HKDF with an HPKE labeling prefix.
///
/// The prefix is fixed at construction; both peers must use the same
/// prefix (and suite id) to derive the same secrets.
pub struct Hkdf {
    prefix: Vec<u8>,
    kdf: Box<dyn Kdf>,
}

impl std::fmt::Debug for Hkdf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Hkdf")
            .field("prefix", &self.prefix)
            .field("algorithm", &self.kdf.algorithm())
            .finish()
    }
}

impl Hkdf {
    /// Create a labeled HKDF from a version prefix and an HKDF
    /// instance.
    pub fn new(prefix: impl Into<Vec<u8>>, kdf: Box<dyn Kdf>) -> Self {
        Self {
            prefix: prefix.into(),
            kdf,
        }
    }

    /// Hash output length of the underlying HKDF.
    pub fn hash_len(&self) -> usize {
        self.kdf.hash_output_size()
    }

    /// `LabeledExtract(salt, label, ikm)` with this context's suite id.
    pub fn labeled_extract(
        &self,
        salt: &[u8],
        label: &[u8],
        ikm: &[u8],
        suite_id: &[u8],
    ) -> Vec<u8> {
        let mut labeled_ikm =
            Vec::with_capacity(self.prefix.len() + suite_id.len() + label.len() + ikm.len());
        labeled_ikm.extend_from_slice(&self.prefix);
        labeled_ikm.extend_from_slice(suite_id);
        labeled_ikm.extend_from_slice(label);
        labeled_ikm.extend_from_slice(ikm);

        self.kdf.extract(salt, &labeled_ikm)
    }

    /// `LabeledExpand(prk, label, info, length)` with this context's
    /// suite id.
    pub fn labeled_expand(
        &self,
        prk: &[u8],
        label: &[u8],
        info: &[u8],
        length: usize,
        suite_id: &[u8],
    ) -> Result<Vec<u8>> {
        let mut labeled_info = Vec::with_capacity(
            2 + self.prefix.len() + suite_id.len() + label.len() + info.len(),
        );
        labeled_info.extend_from_slice(&(length as u16).to_be_bytes());
        labeled_info.extend_from_slice(&self.prefix);
        labeled_info.extend_from_slice(suite_id);
        labeled_info.extend_from_slice(label);
        labeled_info.extend_from_slice(info);

        Ok(self.kdf.expand(prk, &labeled_info, length)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sealtls_crypto::{CryptoProvider, KdfAlgorithm};
    use sealtls_crypto_rustcrypto::RustCryptoProvider;

    const PREFIX: &[u8] = b"HPKE-05 ";
    const SUITE_ID: &[u8] = b"HPKE\x00\x20\x00\x01\x00\x01";

    fn hkdf() -> Hkdf {
        let provider = RustCryptoProvider::new();
        Hkdf::new(PREFIX, provider.kdf(KdfAlgorithm::HkdfSha256).unwrap())
    }

    #[test]
    fn test_labeled_extract_deterministic() {
        let hkdf = hkdf();
        let prk1 = hkdf.labeled_extract(b"salt", b"psk_id_hash", b"ikm", SUITE_ID);
        let prk2 = hkdf.labeled_extract(b"salt", b"psk_id_hash", b"ikm", SUITE_ID);
        assert_eq!(prk1, prk2);
        assert_eq!(prk1.len(), 32);
    }

    #[test]
    fn test_labeled_extract_separates_labels() {
        let hkdf = hkdf();
        let prk1 = hkdf.labeled_extract(b"salt", b"psk_id_hash", b"ikm", SUITE_ID);
        let prk2 = hkdf.labeled_extract(b"salt", b"info_hash", b"ikm", SUITE_ID);
        assert_ne!(prk1, prk2);
    }

    #[test]
    fn test_labeled_expand_separates_suite_ids() {
        let hkdf = hkdf();
        let prk = vec![0x42u8; 32];
        let okm1 = hkdf
            .labeled_expand(&prk, b"sec", b"ctx", 32, SUITE_ID)
            .unwrap();
        let okm2 = hkdf
            .labeled_expand(&prk, b"sec", b"ctx", 32, b"HPKE\x00\x10\x00\x01\x00\x01")
            .unwrap();
        assert_ne!(okm1, okm2);
    }

    #[test]
    fn test_labeled_expand_matches_raw_expand() {
        // LabeledExpand is Expand over the assembled info block.
        let provider = RustCryptoProvider::new();
        let hkdf = hkdf();
        let prk = vec![0x42u8; 32];

        let okm = hkdf
            .labeled_expand(&prk, b"sec", b"ctx", 17, SUITE_ID)
            .unwrap();

        let mut info = Vec::new();
        info.extend_from_slice(&17u16.to_be_bytes());
        info.extend_from_slice(PREFIX);
        info.extend_from_slice(SUITE_ID);
        info.extend_from_slice(b"sec");
        info.extend_from_slice(b"ctx");
        let raw = provider
            .kdf(KdfAlgorithm::HkdfSha256)
            .unwrap()
            .expand(&prk, &info, 17)
            .unwrap();

        assert_eq!(okm, raw);
    }

    #[test]
    fn test_labeled_expand_length_bound() {
        let hkdf = hkdf();
        let prk = vec![0x42u8; 32];
        assert!(hkdf
            .labeled_expand(&prk, b"sec", b"", 255 * 32, SUITE_ID)
            .is_ok());
        assert!(hkdf
            .labeled_expand(&prk, b"sec", b"", 255 * 32 + 1, SUITE_ID)
            .is_err());
    }
}
