//! Hash function implementations using `sha2`.

use sealtls_crypto::{Hash, HashAlgorithm, Result};
use sha2::Digest;

/// Create a hash instance for the specified algorithm.
pub fn create_hash(algorithm: HashAlgorithm) -> Result<Box<dyn Hash>> {
    match algorithm {
        HashAlgorithm::Sha256 => Ok(Box::new(Sha256Hash::new())),
        HashAlgorithm::Sha384 => Ok(Box::new(Sha384Hash::new())),
        HashAlgorithm::Sha512 => Ok(Box::new(Sha512Hash::new())),
    }
}

/// SHA-256 (FIPS 180-4), 32-byte digest.
struct Sha256Hash {
    hasher: sha2::Sha256,
}

impl Sha256Hash {
    fn new() -> Self {
        Self {
            hasher: sha2::Sha256::new(),
        }
    }
}

impl Hash for Sha256Hash {
    fn update(&mut self, data: &[u8]) {
        self.hasher.update(data);
    }

    fn finalize(self: Box<Self>) -> Vec<u8> {
        self.hasher.finalize().to_vec()
    }

    fn output_size(&self) -> usize {
        32
    }

    fn algorithm(&self) -> HashAlgorithm {
        HashAlgorithm::Sha256
    }
}

/// SHA-384 (FIPS 180-4), 48-byte digest.
struct Sha384Hash {
    hasher: sha2::Sha384,
}

impl Sha384Hash {
    fn new() -> Self {
        Self {
            hasher: sha2::Sha384::new(),
        }
    }
}

impl Hash for Sha384Hash {
    fn update(&mut self, data: &[u8]) {
        self.hasher.update(data);
    }

    fn finalize(self: Box<Self>) -> Vec<u8> {
        self.hasher.finalize().to_vec()
    }

    fn output_size(&self) -> usize {
        48
    }

    fn algorithm(&self) -> HashAlgorithm {
        HashAlgorithm::Sha384
    }
}

/// SHA-512 (FIPS 180-4), 64-byte digest.
struct Sha512Hash {
    hasher: sha2::Sha512,
}

impl Sha512Hash {
    fn new() -> Self {
        Self {
            hasher: sha2::Sha512::new(),
        }
    }
}

impl Hash for Sha512Hash {
    fn update(&mut self, data: &[u8]) {
        self.hasher.update(data);
    }

    fn finalize(self: Box<Self>) -> Vec<u8> {
        self.hasher.finalize().to_vec()
    }

    fn output_size(&self) -> usize {
        64
    }

    fn algorithm(&self) -> HashAlgorithm {
        HashAlgorithm::Sha512
    }
}
