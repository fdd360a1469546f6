//! # SealTLS Core
//!
//! Cipher-suite factory, TLS-1.3-style key derivation, and the HPKE
//! context core, built over the [`sealtls_crypto`] provider interface.
//!
//! The pieces fit together like this: the [`SuiteFactory`] turns a
//! [`CipherSuite`] into a concrete AEAD, a [`KeyDerivation`] carrying
//! the suite's hash, and a [`TranscriptHash`]; a [`NamedGroup`] maps to
//! a key-exchange instance. A higher-level key schedule keys the AEAD
//! and builds an [`hpke::HpkeContext`], which then drives per-message
//! nonces from its sequence counter and serves `seal`/`open`/
//! `export_secret` for the lifetime of the session.
//!
//! ```rust,no_run
//! use sealtls_core::{CipherSuite, SuiteFactory};
//! use sealtls_crypto::{CryptoProvider, TrafficKey};
//! use sealtls_crypto_rustcrypto::RustCryptoProvider;
//!
//! let factory = SuiteFactory::new(RustCryptoProvider::new());
//! let mut aead = factory.aead(CipherSuite::Aes128GcmSha256)?;
//! aead.set_key(TrafficKey::new(vec![0u8; 16], vec![0u8; 12]))?;
//! # Ok::<(), sealtls_core::Error>(())
//! ```

#![deny(unsafe_code)]
#![warn(
    missing_docs,
    rust_2018_idioms,
    unused_qualifications,
    missing_debug_implementations
)]

pub mod error;
pub mod factory;
pub mod hpke;
pub mod key_derivation;
pub mod suite;
pub mod transcript;

pub use error::{Error, Result};
pub use factory::SuiteFactory;
pub use key_derivation::KeyDerivation;
pub use suite::{CipherSuite, HashFunction, NamedGroup, DEFAULT_CIPHER_SUITES};
pub use transcript::TranscriptHash;
