//! # RustCrypto-based Cryptography Provider for SealTLS
//!
//! This crate implements the [`sealtls_crypto`] provider interface on
//! top of the RustCrypto crate family (`aes-gcm`, `chacha20poly1305`,
//! `sha2`, `hmac`, `hkdf`, the NIST P-curve crates and
//! `x25519-dalek`).
//!
//! ## Supported Algorithms
//!
//! - **AEAD**: AES-128-GCM, AES-256-GCM, ChaCha20-Poly1305;
//!   AES-128-OCB behind the `ocb` feature; AEGIS-128L and AEGIS-256
//!   behind the `aegis` feature
//! - **Hash**: SHA-256, SHA-384, SHA-512
//! - **HMAC**: with SHA-256, SHA-384, SHA-512
//! - **KDF**: HKDF extract/expand
//! - **Key Exchange**: X25519, ECDH P-256/P-384/P-521; Kyber-512 and
//!   the X25519/P-256 Kyber hybrids behind the `kyber` feature
//!
//! Algorithms gated behind a disabled feature fail with
//! `Error::NotImplemented`; there is no silent fallback.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use sealtls_crypto::{AeadAlgorithm, CryptoProvider};
//! use sealtls_crypto_rustcrypto::RustCryptoProvider;
//!
//! let provider = RustCryptoProvider::new();
//! let aead = provider.aead(AeadAlgorithm::Aes128Gcm).unwrap();
//! ```

#![deny(unsafe_code)]
#![warn(
    missing_docs,
    rust_2018_idioms,
    unused_qualifications,
    missing_debug_implementations
)]

use sealtls_crypto::{
    Aead, AeadAlgorithm, CryptoProvider, Hash, HashAlgorithm, Hmac, Kdf, KdfAlgorithm,
    KeyExchange, KeyExchangeAlgorithm, Result,
};

pub mod aead;
pub mod hash;
pub mod hkdf;
pub mod hmac;
#[cfg(feature = "kyber")]
pub mod hybrid;
pub mod kex;

/// Cryptography provider backed by the RustCrypto crates.
///
/// The provider is stateless and `Send + Sync`; a single instance can
/// be shared across threads.
#[derive(Debug, Default, Clone, Copy)]
pub struct RustCryptoProvider;

impl CryptoProvider for RustCryptoProvider {
    fn new() -> Self {
        Self
    }

    fn aead(&self, algorithm: AeadAlgorithm) -> Result<Box<dyn Aead>> {
        aead::create_aead(algorithm)
    }

    fn hash(&self, algorithm: HashAlgorithm) -> Result<Box<dyn Hash>> {
        hash::create_hash(algorithm)
    }

    fn hmac(&self, algorithm: HashAlgorithm, key: &[u8]) -> Result<Box<dyn Hmac>> {
        hmac::create_hmac(algorithm, key)
    }

    fn kdf(&self, algorithm: KdfAlgorithm) -> Result<Box<dyn Kdf>> {
        hkdf::create_kdf(algorithm)
    }

    fn key_exchange(&self, algorithm: KeyExchangeAlgorithm) -> Result<Box<dyn KeyExchange>> {
        kex::create_key_exchange(algorithm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aead_support() {
        let provider = RustCryptoProvider::new();
        assert!(provider.supports_aead(AeadAlgorithm::Aes128Gcm));
        assert!(provider.supports_aead(AeadAlgorithm::Aes256Gcm));
        assert!(provider.supports_aead(AeadAlgorithm::ChaCha20Poly1305));
        assert!(!provider.supports_aead(AeadAlgorithm::Aes128Ccm));
    }

    #[test]
    fn test_key_exchange_support() {
        let provider = RustCryptoProvider::new();
        assert!(provider.supports_key_exchange(KeyExchangeAlgorithm::X25519));
        assert!(provider.supports_key_exchange(KeyExchangeAlgorithm::Secp256r1));
    }

    #[test]
    fn test_feature_gated_algorithms() {
        let provider = RustCryptoProvider::new();
        assert_eq!(
            provider.supports_aead(AeadAlgorithm::Aes128Ocb),
            cfg!(feature = "ocb")
        );
        assert_eq!(
            provider.supports_aead(AeadAlgorithm::Aegis128L),
            cfg!(feature = "aegis")
        );
        assert_eq!(
            provider.supports_key_exchange(KeyExchangeAlgorithm::Kyber512),
            cfg!(feature = "kyber")
        );
    }
}
