//! HKDF implementations using the `hkdf` crate.

use sealtls_crypto::{Error, Kdf, KdfAlgorithm, Result};

/// Create a KDF instance for the specified algorithm.
pub fn create_kdf(algorithm: KdfAlgorithm) -> Result<Box<dyn Kdf>> {
    match algorithm {
        KdfAlgorithm::HkdfSha256 => Ok(Box::new(HkdfSha256Impl)),
        KdfAlgorithm::HkdfSha384 => Ok(Box::new(HkdfSha384Impl)),
        KdfAlgorithm::HkdfSha512 => Ok(Box::new(HkdfSha512Impl)),
    }
}

/// HKDF-SHA256 (RFC 5869).
#[derive(Debug, Clone, Copy)]
struct HkdfSha256Impl;

impl Kdf for HkdfSha256Impl {
    fn extract(&self, salt: &[u8], ikm: &[u8]) -> Vec<u8> {
        let (prk, _) = hkdf::Hkdf::<sha2::Sha256>::extract(Some(salt), ikm);
        prk.to_vec()
    }

    fn expand(&self, prk: &[u8], info: &[u8], length: usize) -> Result<Vec<u8>> {
        let hk = hkdf::Hkdf::<sha2::Sha256>::from_prk(prk).map_err(|_| Error::InvalidKeyLength)?;
        let mut okm = vec![0u8; length];
        hk.expand(info, &mut okm).map_err(|_| Error::InvalidLength)?;
        Ok(okm)
    }

    fn algorithm(&self) -> KdfAlgorithm {
        KdfAlgorithm::HkdfSha256
    }
}

/// HKDF-SHA384 (RFC 5869).
#[derive(Debug, Clone, Copy)]
struct HkdfSha384Impl;

impl Kdf for HkdfSha384Impl {
    fn extract(&self, salt: &[u8], ikm: &[u8]) -> Vec<u8> {
        let (prk, _) = hkdf::Hkdf::<sha2::Sha384>::extract(Some(salt), ikm);
        prk.to_vec()
    }

    fn expand(&self, prk: &[u8], info: &[u8], length: usize) -> Result<Vec<u8>> {
        let hk = hkdf::Hkdf::<sha2::Sha384>::from_prk(prk).map_err(|_| Error::InvalidKeyLength)?;
        let mut okm = vec![0u8; length];
        hk.expand(info, &mut okm).map_err(|_| Error::InvalidLength)?;
        Ok(okm)
    }

    fn algorithm(&self) -> KdfAlgorithm {
        KdfAlgorithm::HkdfSha384
    }
}

/// HKDF-SHA512 (RFC 5869).
#[derive(Debug, Clone, Copy)]
struct HkdfSha512Impl;

impl Kdf for HkdfSha512Impl {
    fn extract(&self, salt: &[u8], ikm: &[u8]) -> Vec<u8> {
        let (prk, _) = hkdf::Hkdf::<sha2::Sha512>::extract(Some(salt), ikm);
        prk.to_vec()
    }

    fn expand(&self, prk: &[u8], info: &[u8], length: usize) -> Result<Vec<u8>> {
        let hk = hkdf::Hkdf::<sha2::Sha512>::from_prk(prk).map_err(|_| Error::InvalidKeyLength)?;
        let mut okm = vec![0u8; length];
        hk.expand(info, &mut okm).map_err(|_| Error::InvalidLength)?;
        Ok(okm)
    }

    fn algorithm(&self) -> KdfAlgorithm {
        KdfAlgorithm::HkdfSha512
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hkdf_sha256_rfc5869_case1() {
        let kdf = create_kdf(KdfAlgorithm::HkdfSha256).unwrap();
        let ikm = [0x0b; 22];
        let salt = hex::decode("000102030405060708090a0b0c").unwrap();
        let info = hex::decode("f0f1f2f3f4f5f6f7f8f9").unwrap();

        let prk = kdf.extract(&salt, &ikm);
        assert_eq!(
            prk,
            hex::decode("077709362c2e32df0ddc3f0dc47bba6390b6c73bb50f9c3122ec844ad7c2b3e5")
                .unwrap()
        );

        let okm = kdf.expand(&prk, &info, 42).unwrap();
        assert_eq!(
            okm,
            hex::decode(
                "3cb25f25faacd57a90434f64d0362f2a2d2d0a90cf1a5a4c5db02d56ecc4c5bf34007208d5b887185865"
            )
            .unwrap()
        );
    }

    #[test]
    fn test_hkdf_derive_matches_extract_expand() {
        let kdf = create_kdf(KdfAlgorithm::HkdfSha384).unwrap();
        let prk = kdf.extract(b"salt", b"ikm");
        let okm1 = kdf.expand(&prk, b"info", 64).unwrap();
        let okm2 = kdf.derive(b"salt", b"ikm", b"info", 64).unwrap();
        assert_eq!(okm1, okm2);
    }

    #[test]
    fn test_hkdf_expand_too_long() {
        let kdf = create_kdf(KdfAlgorithm::HkdfSha256).unwrap();
        let prk = vec![0u8; 32];

        // 255 * 32 = 8160 is the SHA-256 ceiling.
        assert!(kdf.expand(&prk, b"", 8160).is_ok());
        assert_eq!(kdf.expand(&prk, b"", 8161), Err(Error::InvalidLength));
    }

    #[test]
    fn test_hkdf_empty_salt() {
        let kdf = create_kdf(KdfAlgorithm::HkdfSha256).unwrap();
        let prk = kdf.extract(&[], b"input key material");
        assert_eq!(prk.len(), 32);
    }

    #[test]
    fn test_hkdf_sha512_lengths() {
        let kdf = create_kdf(KdfAlgorithm::HkdfSha512).unwrap();
        assert_eq!(kdf.hash_output_size(), 64);
        let okm = kdf.derive(b"salt", b"ikm", b"info", 80).unwrap();
        assert_eq!(okm.len(), 80);
    }
}
