//! HPKE encryption context.

use sealtls_crypto::Aead;
use zeroize::Zeroizing;

use crate::error::{Error, Result};
use crate::hpke::Hkdf;

const EXPORTER_LABEL: &[u8] = b"sec";

/// HPKE encryption/decryption and key-export context.
///
/// Created by a higher-level key schedule with an already-keyed AEAD,
/// the exporter secret, a labeled HKDF, and the suite id. Each
/// successful `seal` or `open` advances the sequence counter by one;
/// both peers start at zero and therefore derive the same nonce for
/// the same message index.
///
/// A context is single-threaded: the mutable sequence counter makes
/// concurrent `seal`/`open` calls on one context unsound. Distinct
/// contexts are independent.
pub struct HpkeContext {
    aead: Box<dyn Aead>,
    exporter_secret: Zeroizing<Vec<u8>>,
    hkdf: Hkdf,
    suite_id: Vec<u8>,
    seq: u64,
}

impl std::fmt::Debug for HpkeContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HpkeContext")
            .field("algorithm", &self.aead.algorithm())
            .field("suite_id", &self.suite_id)
            .field("seq", &self.seq)
            .finish()
    }
}

impl HpkeContext {
    /// Create a context from its four parts. The AEAD must already
    /// hold its traffic key.
    pub fn new(
        aead: Box<dyn Aead>,
        exporter_secret: Vec<u8>,
        hkdf: Hkdf,
        suite_id: Vec<u8>,
    ) -> Self {
        Self {
            aead,
            exporter_secret: Zeroizing::new(exporter_secret),
            hkdf,
            suite_id,
            seq: 0,
        }
    }

    /// Encrypt `plaintext` with the next nonce in the sequence.
    ///
    /// The sequence counter advances only on success.
    ///
    /// # Errors
    ///
    /// - `SequenceOverflow` if the context is exhausted
    pub fn seal(&mut self, aad: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
        self.check_ready()?;
        let nonce = self.compute_nonce()?;
        let ciphertext = self.aead.encrypt(plaintext, aad, &nonce)?;
        self.seq += 1;
        Ok(ciphertext)
    }

    /// Decrypt `ciphertext` with the next nonce in the sequence.
    ///
    /// On authentication failure the sequence counter is left
    /// untouched, so a caller that misparsed framing may retry with
    /// the correct ciphertext.
    ///
    /// # Errors
    ///
    /// - `SequenceOverflow` if the context is exhausted
    /// - `AuthenticationFailed` if the tag check fails
    pub fn open(&mut self, aad: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
        self.check_ready()?;
        let nonce = self.compute_nonce()?;
        let plaintext = self.aead.decrypt(ciphertext, aad, &nonce)?;
        self.seq += 1;
        Ok(plaintext)
    }

    /// Derive an application secret of `length` bytes from the
    /// exporter secret:
    /// `LabeledExpand(exporter_secret, "sec", exporter_context, length)`.
    ///
    /// Independent of the sequence counter and of any prior
    /// `seal`/`open` traffic; repeated or overlapping exporter
    /// contexts are allowed.
    ///
    /// # Errors
    ///
    /// - `ExportTooLarge` if `length > 255 * hash_len`
    pub fn export_secret(&self, exporter_context: &[u8], length: usize) -> Result<Vec<u8>> {
        let max = 255 * self.hkdf.hash_len();
        if length > max {
            return Err(Error::ExportTooLarge {
                requested: length,
                max,
            });
        }
        self.hkdf.labeled_expand(
            &self.exporter_secret,
            EXPORTER_LABEL,
            exporter_context,
            length,
            &self.suite_id,
        )
    }

    /// The sequence number the next `seal`/`open` will use.
    pub fn sequence(&self) -> u64 {
        self.seq
    }

    /// Highest sequence number representable in the AEAD's nonce
    /// width, capped by the u64 counter.
    fn max_seq(&self) -> u64 {
        let nonce_len = self.aead.nonce_size();
        if nonce_len >= 8 {
            u64::MAX
        } else {
            (1u64 << (8 * nonce_len)) - 1
        }
    }

    fn check_ready(&self) -> Result<()> {
        if self.seq >= self.max_seq() {
            return Err(Error::SequenceOverflow);
        }
        Ok(())
    }

    /// Per-message nonce: the big-endian `nonce_len`-byte encoding of
    /// `seq`, XORed with the AEAD's installed IV.
    fn compute_nonce(&self) -> Result<Vec<u8>> {
        let iv = self
            .aead
            .iv()
            .ok_or_else(|| Error::InternalError("context AEAD has no key installed".to_string()))?;
        let nonce_len = iv.len();

        let mut nonce = vec![0u8; nonce_len];
        let seq_bytes = self.seq.to_be_bytes();
        let take = nonce_len.min(seq_bytes.len());
        nonce[nonce_len - take..].copy_from_slice(&seq_bytes[seq_bytes.len() - take..]);

        for (n, iv_byte) in nonce.iter_mut().zip(iv) {
            *n ^= iv_byte;
        }
        Ok(nonce)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hpke::generate_suite_id;
    use crate::suite::{CipherSuite, HashFunction, NamedGroup};
    use sealtls_crypto::{AeadAlgorithm, CryptoProvider, KdfAlgorithm, TrafficKey};
    use sealtls_crypto_rustcrypto::RustCryptoProvider;

    const PREFIX: &[u8] = b"HPKE-05 ";

    fn context(iv: Vec<u8>) -> HpkeContext {
        let provider = RustCryptoProvider::new();
        let mut aead = provider.aead(AeadAlgorithm::Aes128Gcm).unwrap();
        aead.set_key(TrafficKey::new(vec![0u8; 16], iv)).unwrap();
        let hkdf = Hkdf::new(PREFIX, provider.kdf(KdfAlgorithm::HkdfSha256).unwrap());
        let suite_id = generate_suite_id(
            NamedGroup::X25519,
            HashFunction::Sha256,
            CipherSuite::Aes128GcmSha256,
        )
        .unwrap();
        HpkeContext::new(aead, vec![0x42u8; 32], hkdf, suite_id)
    }

    #[test]
    fn test_nonce_is_iv_xor_sequence() {
        let iv = vec![0xA0, 0xA1, 0xA2, 0xA3, 0xA4, 0xA5, 0xA6, 0xA7, 0xA8, 0xA9, 0xAA, 0xAB];
        let mut ctx = context(iv.clone());

        // seq = 0: the nonce is the IV itself.
        assert_eq!(ctx.compute_nonce().unwrap(), iv);

        ctx.seq = 1;
        let nonce = ctx.compute_nonce().unwrap();
        assert_eq!(&nonce[..11], &iv[..11]);
        assert_eq!(nonce[11], iv[11] ^ 0x01);

        ctx.seq = 0x0102;
        let nonce = ctx.compute_nonce().unwrap();
        assert_eq!(nonce[10], iv[10] ^ 0x01);
        assert_eq!(nonce[11], iv[11] ^ 0x02);
    }

    #[test]
    fn test_sequence_advances_by_one() {
        let mut ctx = context(vec![0u8; 12]);
        assert_eq!(ctx.sequence(), 0);
        ctx.seal(b"", b"message").unwrap();
        assert_eq!(ctx.sequence(), 1);
        ctx.seal(b"", b"message").unwrap();
        assert_eq!(ctx.sequence(), 2);
    }

    #[test]
    fn test_exhausted_context_refuses_seal() {
        let mut ctx = context(vec![0u8; 12]);
        ctx.seq = u64::MAX;
        assert_eq!(ctx.seal(b"", b"message"), Err(Error::SequenceOverflow));
        assert_eq!(ctx.open(b"", b"junk"), Err(Error::SequenceOverflow));
    }

    #[test]
    fn test_export_ignores_sequence() {
        let mut ctx = context(vec![0u8; 12]);
        let before = ctx.export_secret(b"ctx", 32).unwrap();
        ctx.seal(b"", b"message").unwrap();
        let after = ctx.export_secret(b"ctx", 32).unwrap();
        assert_eq!(before, after);
        assert_eq!(ctx.sequence(), 1);
    }

    #[test]
    fn test_export_too_large() {
        let ctx = context(vec![0u8; 12]);
        assert!(ctx.export_secret(b"ctx", 255 * 32).is_ok());
        assert_eq!(
            ctx.export_secret(b"ctx", 255 * 32 + 1),
            Err(Error::ExportTooLarge {
                requested: 255 * 32 + 1,
                max: 255 * 32,
            })
        );
        assert!(matches!(
            ctx.export_secret(b"ctx", usize::MAX),
            Err(Error::ExportTooLarge { .. })
        ));
    }
}
