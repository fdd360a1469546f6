//! HPKE `suite_id` construction.
//!
//! The suite id is the ASCII bytes `"HPKE"` followed by the 2-byte
//! big-endian KEM, KDF, and AEAD identifiers from the HPKE registries,
//! in that order. It is mixed into every labeled HKDF call to
//! domain-separate suites.

use crate::error::{Error, Result};
use crate::suite::{CipherSuite, HashFunction, NamedGroup};

/// HPKE KEM identifier for a named group.
pub fn kem_id(group: NamedGroup) -> Result<u16> {
    match group {
        NamedGroup::Secp256r1 => Ok(0x0010),
        NamedGroup::Secp384r1 => Ok(0x0011),
        NamedGroup::Secp521r1 => Ok(0x0012),
        NamedGroup::X25519 => Ok(0x0020),
        _ => Err(Error::UnsupportedSuite(format!(
            "no HPKE KEM id for group {}",
            group.name()
        ))),
    }
}

/// HPKE KDF identifier for a hash function.
pub fn kdf_id(hash: HashFunction) -> Result<u16> {
    match hash {
        HashFunction::Sha256 => Ok(0x0001),
        HashFunction::Sha384 => Ok(0x0002),
        HashFunction::Sha512 => Ok(0x0003),
    }
}

/// HPKE AEAD identifier for a cipher suite.
///
/// The AEGIS identifiers follow the draft registry; CCM and OCB have
/// no HPKE identifier.
pub fn aead_id(suite: CipherSuite) -> Result<u16> {
    match suite {
        CipherSuite::Aes128GcmSha256 => Ok(0x0001),
        CipherSuite::Aes256GcmSha384 => Ok(0x0002),
        CipherSuite::ChaCha20Poly1305Sha256 => Ok(0x0003),
        CipherSuite::Aegis128LSha256 => Ok(0x0005),
        CipherSuite::Aegis256Sha512 => Ok(0x0006),
        CipherSuite::Aes128CcmSha256
        | CipherSuite::Aes128Ccm8Sha256
        | CipherSuite::Aes128OcbSha256Experimental => Err(Error::UnsupportedSuite(format!(
            "no HPKE AEAD id for suite {}",
            suite.name()
        ))),
    }
}

/// Build the HPKE `suite_id` for a (KEM, KDF, AEAD) triple:
/// `"HPKE" || kem_id || kdf_id || aead_id`.
pub fn generate_suite_id(
    group: NamedGroup,
    hash: HashFunction,
    suite: CipherSuite,
) -> Result<Vec<u8>> {
    let mut suite_id = Vec::with_capacity(10);
    suite_id.extend_from_slice(b"HPKE");
    suite_id.extend_from_slice(&kem_id(group)?.to_be_bytes());
    suite_id.extend_from_slice(&kdf_id(hash)?.to_be_bytes());
    suite_id.extend_from_slice(&aead_id(suite)?.to_be_bytes());
    Ok(suite_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suite_id_p256_sha256_aes128gcm() {
        let suite_id = generate_suite_id(
            NamedGroup::Secp256r1,
            HashFunction::Sha256,
            CipherSuite::Aes128GcmSha256,
        )
        .unwrap();
        assert_eq!(hex::encode(&suite_id), "48504b45001000010001");
    }

    #[test]
    fn test_suite_id_x25519_sha256_aes128gcm() {
        let suite_id = generate_suite_id(
            NamedGroup::X25519,
            HashFunction::Sha256,
            CipherSuite::Aes128GcmSha256,
        )
        .unwrap();
        assert_eq!(hex::encode(&suite_id), "48504b45002000010001");
    }

    #[test]
    fn test_suite_id_shape() {
        let suite_id = generate_suite_id(
            NamedGroup::Secp521r1,
            HashFunction::Sha512,
            CipherSuite::ChaCha20Poly1305Sha256,
        )
        .unwrap();
        assert_eq!(suite_id.len(), 10);
        assert_eq!(&suite_id[..4], b"HPKE");
        assert_eq!(&suite_id[4..], &[0x00, 0x12, 0x00, 0x03, 0x00, 0x03]);
    }

    #[test]
    fn test_unmapped_inputs_fail() {
        assert!(matches!(
            aead_id(CipherSuite::Aes128OcbSha256Experimental),
            Err(Error::UnsupportedSuite(_))
        ));
        assert!(matches!(
            aead_id(CipherSuite::Aes128CcmSha256),
            Err(Error::UnsupportedSuite(_))
        ));
        assert!(matches!(
            kem_id(NamedGroup::X25519Kyber768Draft00),
            Err(Error::UnsupportedSuite(_))
        ));
    }

    #[test]
    fn test_aegis_ids() {
        assert_eq!(aead_id(CipherSuite::Aegis128LSha256).unwrap(), 0x0005);
        assert_eq!(aead_id(CipherSuite::Aegis256Sha512).unwrap(), 0x0006);
    }
}
