//! # SealTLS Cryptographic Provider Interface
//!
//! This crate defines the cryptographic abstraction layer for SealTLS.
//! It provides trait-based interfaces that allow pluggable cryptographic
//! backends while the protocol layer stays backend-agnostic.
//!
//! ## Architecture
//!
//! ```text
//! CryptoProvider (main trait)
//! ├── Aead (AEAD ciphers: AES-GCM, ChaCha20-Poly1305, AES-OCB, AEGIS)
//! ├── Hash (SHA-256, SHA-384, SHA-512)
//! ├── Hmac (HMAC with various hash functions)
//! ├── Kdf (HKDF extract/expand)
//! └── KeyExchange (ECDHE, X25519, Kyber hybrids)
//! ```
//!
//! AEAD instances follow a keyed-once lifecycle: they are constructed
//! unkeyed by the provider, receive their key material exactly once via
//! [`Aead::set_key`], and from then on perform any number of
//! encrypt/decrypt calls with caller-supplied nonces.

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    rust_2018_idioms,
    unused_qualifications,
    missing_debug_implementations
)]

pub mod aead;
pub mod error;
pub mod hash;
pub mod hmac;
pub mod kdf;
pub mod key_exchange;

pub use aead::{Aead, AeadAlgorithm, TrafficKey};
pub use error::{Error, Result};
pub use hash::{Hash, HashAlgorithm};
pub use hmac::Hmac;
pub use kdf::{Kdf, KdfAlgorithm};
pub use key_exchange::{KeyExchange, KeyExchangeAlgorithm, PrivateKey, PublicKey, SharedSecret};

/// The main cryptographic provider trait.
///
/// Implementations of this trait construct all cryptographic primitives
/// needed by the SealTLS core. The provider itself carries no mutable
/// state; a single shared instance can serve concurrent callers.
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync` to allow use in
/// multi-threaded environments. Note that the *instances* a provider
/// hands out (in particular AEADs, which hold installed key material)
/// are only `Send`; a single instance is not required to be re-entrant.
pub trait CryptoProvider: Send + Sync + 'static {
    /// Create a new instance of the crypto provider.
    fn new() -> Self
    where
        Self: Sized;

    /// Get an unkeyed AEAD cipher instance.
    ///
    /// # Errors
    ///
    /// - `UnsupportedAlgorithm` if the backend has no implementation
    /// - `NotImplemented` if the implementation was compiled out
    fn aead(&self, algorithm: AeadAlgorithm) -> Result<Box<dyn Aead>>;

    /// Get a hash function instance.
    fn hash(&self, algorithm: HashAlgorithm) -> Result<Box<dyn Hash>>;

    /// Get an HMAC instance keyed with `key`.
    fn hmac(&self, algorithm: HashAlgorithm, key: &[u8]) -> Result<Box<dyn Hmac>>;

    /// Get a KDF (Key Derivation Function) instance.
    fn kdf(&self, algorithm: KdfAlgorithm) -> Result<Box<dyn Kdf>>;

    /// Get a key exchange instance.
    ///
    /// # Errors
    ///
    /// - `NotImplemented` if the algorithm was compiled out
    fn key_exchange(&self, algorithm: KeyExchangeAlgorithm) -> Result<Box<dyn KeyExchange>>;

    /// Check if the provider supports a specific AEAD algorithm.
    ///
    /// This can be used to query capabilities without instantiating.
    fn supports_aead(&self, algorithm: AeadAlgorithm) -> bool {
        self.aead(algorithm).is_ok()
    }

    /// Check if the provider supports a specific key exchange algorithm.
    fn supports_key_exchange(&self, algorithm: KeyExchangeAlgorithm) -> bool {
        self.key_exchange(algorithm).is_ok()
    }
}
