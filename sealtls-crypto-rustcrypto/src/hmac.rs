//! HMAC implementations using the `hmac` crate.

use hmac::Mac;
use sealtls_crypto::{Error, HashAlgorithm, Hmac, Result};

type HmacSha256 = hmac::Hmac<sha2::Sha256>;
type HmacSha384 = hmac::Hmac<sha2::Sha384>;
type HmacSha512 = hmac::Hmac<sha2::Sha512>;

/// Create an HMAC instance keyed with `key` for the specified hash
/// algorithm.
pub fn create_hmac(algorithm: HashAlgorithm, key: &[u8]) -> Result<Box<dyn Hmac>> {
    match algorithm {
        HashAlgorithm::Sha256 => Ok(Box::new(HmacSha256Impl::new(key)?)),
        HashAlgorithm::Sha384 => Ok(Box::new(HmacSha384Impl::new(key)?)),
        HashAlgorithm::Sha512 => Ok(Box::new(HmacSha512Impl::new(key)?)),
    }
}

/// HMAC-SHA256 (RFC 2104), 32-byte tag.
struct HmacSha256Impl {
    mac: HmacSha256,
}

impl HmacSha256Impl {
    fn new(key: &[u8]) -> Result<Self> {
        let mac = HmacSha256::new_from_slice(key).map_err(|_| Error::InvalidKeyLength)?;
        Ok(Self { mac })
    }
}

impl Hmac for HmacSha256Impl {
    fn update(&mut self, data: &[u8]) {
        self.mac.update(data);
    }

    fn finalize(self: Box<Self>) -> Vec<u8> {
        self.mac.finalize().into_bytes().to_vec()
    }

    fn output_size(&self) -> usize {
        32
    }

    fn algorithm(&self) -> HashAlgorithm {
        HashAlgorithm::Sha256
    }
}

/// HMAC-SHA384 (RFC 2104), 48-byte tag.
struct HmacSha384Impl {
    mac: HmacSha384,
}

impl HmacSha384Impl {
    fn new(key: &[u8]) -> Result<Self> {
        let mac = HmacSha384::new_from_slice(key).map_err(|_| Error::InvalidKeyLength)?;
        Ok(Self { mac })
    }
}

impl Hmac for HmacSha384Impl {
    fn update(&mut self, data: &[u8]) {
        self.mac.update(data);
    }

    fn finalize(self: Box<Self>) -> Vec<u8> {
        self.mac.finalize().into_bytes().to_vec()
    }

    fn output_size(&self) -> usize {
        48
    }

    fn algorithm(&self) -> HashAlgorithm {
        HashAlgorithm::Sha384
    }
}

/// HMAC-SHA512 (RFC 2104), 64-byte tag.
struct HmacSha512Impl {
    mac: HmacSha512,
}

impl HmacSha512Impl {
    fn new(key: &[u8]) -> Result<Self> {
        let mac = HmacSha512::new_from_slice(key).map_err(|_| Error::InvalidKeyLength)?;
        Ok(Self { mac })
    }
}

impl Hmac for HmacSha512Impl {
    fn update(&mut self, data: &[u8]) {
        self.mac.update(data);
    }

    fn finalize(self: Box<Self>) -> Vec<u8> {
        self.mac.finalize().into_bytes().to_vec()
    }

    fn output_size(&self) -> usize {
        64
    }

    fn algorithm(&self) -> HashAlgorithm {
        HashAlgorithm::Sha512
    }
}
