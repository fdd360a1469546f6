//! Transcript hash management.
//!
//! The transcript hash is a running hash of all handshake messages
//! exchanged so far, in the hash selected by the cipher suite. Both
//! peers must feed the same messages in the same order to derive the
//! same secrets from it.

use sealtls_crypto::{CryptoProvider, HashAlgorithm};

use crate::error::Result;

/// Transcript hash manager.
///
/// Messages are buffered and hashed lazily so the current hash can be
/// requested at any point without losing the ability to extend the
/// transcript.
#[derive(Debug, Clone)]
pub struct TranscriptHash {
    algorithm: HashAlgorithm,
    messages: Vec<Vec<u8>>,
    cached_hash: Option<Vec<u8>>,
}

impl TranscriptHash {
    /// Create a new transcript hash with the specified algorithm.
    pub fn new(algorithm: HashAlgorithm) -> Self {
        Self {
            algorithm,
            messages: Vec::new(),
            cached_hash: None,
        }
    }

    /// Get the hash algorithm being used.
    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    /// Add an encoded message to the transcript.
    pub fn update(&mut self, message: &[u8]) {
        self.messages.push(message.to_vec());
        self.cached_hash = None;
    }

    /// Compute the current transcript hash.
    ///
    /// With no messages this equals the hash of the empty string
    /// ([`HashAlgorithm::blank_hash`]).
    pub fn current_hash(&mut self, provider: &dyn CryptoProvider) -> Result<Vec<u8>> {
        if let Some(ref hash) = self.cached_hash {
            return Ok(hash.clone());
        }
        let hash = self.peek_hash(provider)?;
        self.cached_hash = Some(hash.clone());
        Ok(hash)
    }

    /// Compute the current hash without touching the cache.
    pub fn peek_hash(&self, provider: &dyn CryptoProvider) -> Result<Vec<u8>> {
        let mut hasher = provider.hash(self.algorithm)?;
        for msg in &self.messages {
            hasher.update(msg);
        }
        Ok(hasher.finalize())
    }

    /// Get the number of messages in the transcript.
    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    /// Check if the transcript is empty.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Create a snapshot of the transcript at this point.
    pub fn snapshot(&self) -> Self {
        self.clone()
    }
}
