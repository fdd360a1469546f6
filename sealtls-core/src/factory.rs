//! Suite factory: dispatch from registry values to concrete crypto
//! instances.

use sealtls_crypto::{Aead, CryptoProvider, KeyExchange};

use crate::error::Result;
use crate::key_derivation::KeyDerivation;
use crate::suite::{CipherSuite, NamedGroup};
use crate::transcript::TranscriptHash;

/// Factory mapping cipher suites and named groups to the concrete
/// AEAD, key-deriver, transcript-hasher, and key-exchange instances of
/// one crypto provider.
///
/// The factory is stateless and side-effect free; a single shared
/// instance can serve concurrent callers. Every enum value either
/// yields a concrete instance or fails explicitly (`UnsupportedSuite`
/// for suites the provider has no implementation for,
/// `NotImplemented` for suites compiled out of the backend).
#[derive(Debug, Clone, Copy)]
pub struct SuiteFactory<P> {
    provider: P,
}

impl<P: CryptoProvider> SuiteFactory<P> {
    /// Create a factory over the given provider.
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Access the underlying provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Make an unkeyed AEAD for the suite.
    pub fn aead(&self, suite: CipherSuite) -> Result<Box<dyn Aead>> {
        Ok(self.provider.aead(suite.aead_algorithm())?)
    }

    /// Make a key deriver carrying the suite's hash.
    pub fn key_deriver(&self, suite: CipherSuite) -> Result<KeyDerivation> {
        let hash = suite.hash_algorithm();
        let kdf = self.provider.kdf(hash.to_kdf_algorithm())?;
        Ok(KeyDerivation::new(hash, kdf))
    }

    /// Make a transcript hasher in the suite's hash.
    pub fn transcript_hasher(&self, suite: CipherSuite) -> Result<TranscriptHash> {
        // Instantiate once so unsupported hashes fail here, not at
        // first use.
        self.provider.hash(suite.hash_algorithm())?;
        Ok(TranscriptHash::new(suite.hash_algorithm()))
    }

    /// Make a key exchange for the named group.
    pub fn key_exchange(&self, group: NamedGroup) -> Result<Box<dyn KeyExchange>> {
        Ok(self
            .provider
            .key_exchange(group.key_exchange_algorithm())?)
    }
}
