//! AEAD cipher implementations over the RustCrypto `aead` traits.

use aes_gcm::aead::{Aead as AeadCipher, KeyInit, Nonce, Payload};
use sealtls_crypto::{Aead, AeadAlgorithm, Error, Result, TrafficKey};
use zeroize::Zeroizing;

/// Create an unkeyed AEAD cipher instance for the specified algorithm.
pub fn create_aead(algorithm: AeadAlgorithm) -> Result<Box<dyn Aead>> {
    match algorithm {
        AeadAlgorithm::Aes128Gcm => Ok(Box::new(
            RustCryptoAead::<aes_gcm::Aes128Gcm>::unkeyed(algorithm),
        )),
        AeadAlgorithm::Aes256Gcm => Ok(Box::new(
            RustCryptoAead::<aes_gcm::Aes256Gcm>::unkeyed(algorithm),
        )),
        AeadAlgorithm::ChaCha20Poly1305 => Ok(Box::new(RustCryptoAead::<
            chacha20poly1305::ChaCha20Poly1305,
        >::unkeyed(algorithm))),
        AeadAlgorithm::Aes128Ccm | AeadAlgorithm::Aes128Ccm8 => Err(Error::UnsupportedAlgorithm(
            format!("AEAD algorithm {:?} not supported by this provider", algorithm),
        )),
        #[cfg(feature = "ocb")]
        AeadAlgorithm::Aes128Ocb => Ok(Box::new(
            RustCryptoAead::<ocb3::Ocb3<aes::Aes128>>::unkeyed(algorithm),
        )),
        #[cfg(not(feature = "ocb"))]
        AeadAlgorithm::Aes128Ocb => Err(Error::NotImplemented(
            "AES-128-OCB (enable the `ocb` feature)".to_string(),
        )),
        #[cfg(feature = "aegis")]
        AeadAlgorithm::Aegis128L => Ok(Box::new(aegis_impl::Aegis128LImpl::unkeyed())),
        #[cfg(feature = "aegis")]
        AeadAlgorithm::Aegis256 => Ok(Box::new(aegis_impl::Aegis256Impl::unkeyed())),
        #[cfg(not(feature = "aegis"))]
        AeadAlgorithm::Aegis128L | AeadAlgorithm::Aegis256 => Err(Error::NotImplemented(
            "AEGIS (enable the `aegis` feature)".to_string(),
        )),
    }
}

/// AEAD cipher over any RustCrypto `aead` implementation with matching
/// key and nonce sizes.
///
/// Holds the keyed-once state required by the [`Aead`] trait: the
/// cipher starts unkeyed, `set_key` installs key and IV exactly once,
/// and encrypt/decrypt take the per-message nonce from the caller.
struct RustCryptoAead<C> {
    algorithm: AeadAlgorithm,
    cipher: Option<C>,
    iv: Option<Zeroizing<Vec<u8>>>,
    headroom: usize,
}

impl<C> RustCryptoAead<C> {
    fn unkeyed(algorithm: AeadAlgorithm) -> Self {
        Self {
            algorithm,
            cipher: None,
            iv: None,
            headroom: 0,
        }
    }

    fn check_nonce(&self, nonce: &[u8]) -> Result<()> {
        if nonce.len() != self.algorithm.nonce_size() {
            return Err(Error::InvalidNonceSize {
                expected: self.algorithm.nonce_size(),
                actual: nonce.len(),
            });
        }
        Ok(())
    }

    /// Re-allocate `ciphertext` with `headroom` bytes of spare front
    /// capacity so the caller can insert framing without reallocating.
    fn with_headroom(&self, ciphertext: Vec<u8>) -> Vec<u8> {
        if self.headroom == 0 {
            return ciphertext;
        }
        let mut out = Vec::with_capacity(self.headroom + ciphertext.len());
        out.extend_from_slice(&ciphertext);
        out
    }
}

impl<C> Aead for RustCryptoAead<C>
where
    C: AeadCipher + KeyInit + Send,
{
    fn set_key(&mut self, key: TrafficKey) -> Result<()> {
        if self.cipher.is_some() {
            return Err(Error::Internal(
                "AEAD key material may only be installed once".to_string(),
            ));
        }
        if key.key.len() != self.algorithm.key_size() {
            return Err(Error::InvalidKeySize {
                expected: self.algorithm.key_size(),
                actual: key.key.len(),
            });
        }
        if key.iv.len() != self.algorithm.nonce_size() {
            return Err(Error::InvalidNonceSize {
                expected: self.algorithm.nonce_size(),
                actual: key.iv.len(),
            });
        }

        let cipher = C::new_from_slice(&key.key).map_err(|_| Error::InvalidKeyLength)?;
        self.cipher = Some(cipher);
        self.iv = Some(Zeroizing::new(key.iv.clone()));
        Ok(())
    }

    fn iv(&self) -> Option<&[u8]> {
        self.iv.as_deref().map(|iv| &iv[..])
    }

    fn encrypt(&self, plaintext: &[u8], aad: &[u8], nonce: &[u8]) -> Result<Vec<u8>> {
        let cipher = self.cipher.as_ref().ok_or(Error::KeyNotSet)?;
        self.check_nonce(nonce)?;

        let ciphertext = cipher
            .encrypt(
                Nonce::<C>::from_slice(nonce),
                Payload {
                    msg: plaintext,
                    aad,
                },
            )
            .map_err(|_| Error::EncryptionFailed)?;

        Ok(self.with_headroom(ciphertext))
    }

    fn decrypt(&self, ciphertext: &[u8], aad: &[u8], nonce: &[u8]) -> Result<Vec<u8>> {
        let cipher = self.cipher.as_ref().ok_or(Error::KeyNotSet)?;
        self.check_nonce(nonce)?;

        cipher
            .decrypt(
                Nonce::<C>::from_slice(nonce),
                Payload {
                    msg: ciphertext,
                    aad,
                },
            )
            .map_err(|_| Error::AuthenticationFailed)
    }

    fn set_encrypted_buffer_headroom(&mut self, headroom: usize) {
        self.headroom = headroom;
    }

    fn algorithm(&self) -> AeadAlgorithm {
        self.algorithm
    }
}

/// AEGIS cipher implementations.
///
/// AEGIS does not speak the RustCrypto `aead` traits (its nonces are
/// 16 or 32 bytes and the tag is returned separately), so the two
/// variants get their own keyed-once wrappers here.
#[cfg(feature = "aegis")]
mod aegis_impl {
    use aegis::aegis128l::Aegis128L;
    use aegis::aegis256::Aegis256;
    use sealtls_crypto::{Aead, AeadAlgorithm, Error, Result, TrafficKey};
    use zeroize::Zeroizing;

    const TAG_BYTES: usize = 16;

    fn split_tag(ciphertext: &[u8]) -> Result<(&[u8], [u8; TAG_BYTES])> {
        if ciphertext.len() < TAG_BYTES {
            return Err(Error::AuthenticationFailed);
        }
        let (body, tag) = ciphertext.split_at(ciphertext.len() - TAG_BYTES);
        let mut tag_arr = [0u8; TAG_BYTES];
        tag_arr.copy_from_slice(tag);
        Ok((body, tag_arr))
    }

    fn with_headroom(headroom: usize, body: Vec<u8>, tag: &[u8; TAG_BYTES]) -> Vec<u8> {
        let mut out = Vec::with_capacity(headroom + body.len() + TAG_BYTES);
        out.extend_from_slice(&body);
        out.extend_from_slice(tag);
        out
    }

    /// AEGIS-128L: 16-byte key, 16-byte nonce.
    pub(super) struct Aegis128LImpl {
        key: Option<Zeroizing<[u8; 16]>>,
        iv: Option<Zeroizing<Vec<u8>>>,
        headroom: usize,
    }

    impl Aegis128LImpl {
        pub(super) fn unkeyed() -> Self {
            Self {
                key: None,
                iv: None,
                headroom: 0,
            }
        }
    }

    impl Aead for Aegis128LImpl {
        fn set_key(&mut self, key: TrafficKey) -> Result<()> {
            if self.key.is_some() {
                return Err(Error::Internal(
                    "AEAD key material may only be installed once".to_string(),
                ));
            }
            let key_arr: [u8; 16] = key.key.as_slice().try_into().map_err(|_| {
                Error::InvalidKeySize {
                    expected: 16,
                    actual: key.key.len(),
                }
            })?;
            if key.iv.len() != 16 {
                return Err(Error::InvalidNonceSize {
                    expected: 16,
                    actual: key.iv.len(),
                });
            }
            self.key = Some(Zeroizing::new(key_arr));
            self.iv = Some(Zeroizing::new(key.iv.clone()));
            Ok(())
        }

        fn iv(&self) -> Option<&[u8]> {
            self.iv.as_deref().map(|iv| &iv[..])
        }

        fn encrypt(&self, plaintext: &[u8], aad: &[u8], nonce: &[u8]) -> Result<Vec<u8>> {
            let key = self.key.as_ref().ok_or(Error::KeyNotSet)?;
            let nonce_arr: [u8; 16] =
                nonce.try_into().map_err(|_| Error::InvalidNonceSize {
                    expected: 16,
                    actual: nonce.len(),
                })?;
            let (body, tag) = Aegis128L::<TAG_BYTES>::new(key, &nonce_arr).encrypt(plaintext, aad);
            Ok(with_headroom(self.headroom, body, &tag))
        }

        fn decrypt(&self, ciphertext: &[u8], aad: &[u8], nonce: &[u8]) -> Result<Vec<u8>> {
            let key = self.key.as_ref().ok_or(Error::KeyNotSet)?;
            let nonce_arr: [u8; 16] =
                nonce.try_into().map_err(|_| Error::InvalidNonceSize {
                    expected: 16,
                    actual: nonce.len(),
                })?;
            let (body, tag) = split_tag(ciphertext)?;
            Aegis128L::<TAG_BYTES>::new(key, &nonce_arr)
                .decrypt(body, &tag, aad)
                .map_err(|_| Error::AuthenticationFailed)
        }

        fn set_encrypted_buffer_headroom(&mut self, headroom: usize) {
            self.headroom = headroom;
        }

        fn algorithm(&self) -> AeadAlgorithm {
            AeadAlgorithm::Aegis128L
        }
    }

    /// AEGIS-256: 32-byte key, 32-byte nonce.
    pub(super) struct Aegis256Impl {
        key: Option<Zeroizing<[u8; 32]>>,
        iv: Option<Zeroizing<Vec<u8>>>,
        headroom: usize,
    }

    impl Aegis256Impl {
        pub(super) fn unkeyed() -> Self {
            Self {
                key: None,
                iv: None,
                headroom: 0,
            }
        }
    }

    impl Aead for Aegis256Impl {
        fn set_key(&mut self, key: TrafficKey) -> Result<()> {
            if self.key.is_some() {
                return Err(Error::Internal(
                    "AEAD key material may only be installed once".to_string(),
                ));
            }
            let key_arr: [u8; 32] = key.key.as_slice().try_into().map_err(|_| {
                Error::InvalidKeySize {
                    expected: 32,
                    actual: key.key.len(),
                }
            })?;
            if key.iv.len() != 32 {
                return Err(Error::InvalidNonceSize {
                    expected: 32,
                    actual: key.iv.len(),
                });
            }
            self.key = Some(Zeroizing::new(key_arr));
            self.iv = Some(Zeroizing::new(key.iv.clone()));
            Ok(())
        }

        fn iv(&self) -> Option<&[u8]> {
            self.iv.as_deref().map(|iv| &iv[..])
        }

        fn encrypt(&self, plaintext: &[u8], aad: &[u8], nonce: &[u8]) -> Result<Vec<u8>> {
            let key = self.key.as_ref().ok_or(Error::KeyNotSet)?;
            let nonce_arr: [u8; 32] =
                nonce.try_into().map_err(|_| Error::InvalidNonceSize {
                    expected: 32,
                    actual: nonce.len(),
                })?;
            let (body, tag) = Aegis256::<TAG_BYTES>::new(key, &nonce_arr).encrypt(plaintext, aad);
            Ok(with_headroom(self.headroom, body, &tag))
        }

        fn decrypt(&self, ciphertext: &[u8], aad: &[u8], nonce: &[u8]) -> Result<Vec<u8>> {
            let key = self.key.as_ref().ok_or(Error::KeyNotSet)?;
            let nonce_arr: [u8; 32] =
                nonce.try_into().map_err(|_| Error::InvalidNonceSize {
                    expected: 32,
                    actual: nonce.len(),
                })?;
            let (body, tag) = split_tag(ciphertext)?;
            Aegis256::<TAG_BYTES>::new(key, &nonce_arr)
                .decrypt(body, &tag, aad)
                .map_err(|_| Error::AuthenticationFailed)
        }

        fn set_encrypted_buffer_headroom(&mut self, headroom: usize) {
            self.headroom = headroom;
        }

        fn algorithm(&self) -> AeadAlgorithm {
            AeadAlgorithm::Aegis256
        }
    }
}
