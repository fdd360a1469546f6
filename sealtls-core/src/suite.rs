//! Cipher suite, named group, and hash function registry values.

use sealtls_crypto::{AeadAlgorithm, HashAlgorithm, KeyExchangeAlgorithm};

/// Cipher suite for TLS 1.3 and HPKE.
///
/// TLS 1.3 cipher suites only specify the AEAD and hash algorithm; key
/// exchange is negotiated separately via [`NamedGroup`]. The AEGIS and
/// OCB entries use the experimental code points carried by the original
/// registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum CipherSuite {
    /// TLS_AES_128_GCM_SHA256 (mandatory to implement)
    Aes128GcmSha256 = 0x1301,

    /// TLS_AES_256_GCM_SHA384
    Aes256GcmSha384 = 0x1302,

    /// TLS_CHACHA20_POLY1305_SHA256
    ChaCha20Poly1305Sha256 = 0x1303,

    /// TLS_AES_128_CCM_SHA256
    Aes128CcmSha256 = 0x1304,

    /// TLS_AES_128_CCM_8_SHA256
    Aes128Ccm8Sha256 = 0x1305,

    /// TLS_AEGIS_256_SHA512 (experimental)
    Aegis256Sha512 = 0x1306,

    /// TLS_AEGIS_128L_SHA256 (experimental)
    Aegis128LSha256 = 0x1307,

    /// TLS_AES_128_OCB_SHA256_EXPERIMENTAL
    Aes128OcbSha256Experimental = 0x1DFB,
}

impl CipherSuite {
    /// Create from wire format (u16).
    pub const fn from_u16(value: u16) -> Option<Self> {
        match value {
            0x1301 => Some(CipherSuite::Aes128GcmSha256),
            0x1302 => Some(CipherSuite::Aes256GcmSha384),
            0x1303 => Some(CipherSuite::ChaCha20Poly1305Sha256),
            0x1304 => Some(CipherSuite::Aes128CcmSha256),
            0x1305 => Some(CipherSuite::Aes128Ccm8Sha256),
            0x1306 => Some(CipherSuite::Aegis256Sha512),
            0x1307 => Some(CipherSuite::Aegis128LSha256),
            0x1DFB => Some(CipherSuite::Aes128OcbSha256Experimental),
            _ => None,
        }
    }

    /// Convert to wire format (u16).
    pub const fn to_u16(self) -> u16 {
        self as u16
    }

    /// Get the AEAD algorithm for this cipher suite.
    pub const fn aead_algorithm(self) -> AeadAlgorithm {
        match self {
            CipherSuite::Aes128GcmSha256 => AeadAlgorithm::Aes128Gcm,
            CipherSuite::Aes256GcmSha384 => AeadAlgorithm::Aes256Gcm,
            CipherSuite::ChaCha20Poly1305Sha256 => AeadAlgorithm::ChaCha20Poly1305,
            CipherSuite::Aes128CcmSha256 => AeadAlgorithm::Aes128Ccm,
            CipherSuite::Aes128Ccm8Sha256 => AeadAlgorithm::Aes128Ccm8,
            CipherSuite::Aegis256Sha512 => AeadAlgorithm::Aegis256,
            CipherSuite::Aegis128LSha256 => AeadAlgorithm::Aegis128L,
            CipherSuite::Aes128OcbSha256Experimental => AeadAlgorithm::Aes128Ocb,
        }
    }

    /// Get the hash algorithm for this cipher suite.
    pub const fn hash_algorithm(self) -> HashAlgorithm {
        match self {
            CipherSuite::Aes128GcmSha256
            | CipherSuite::ChaCha20Poly1305Sha256
            | CipherSuite::Aes128CcmSha256
            | CipherSuite::Aes128Ccm8Sha256
            | CipherSuite::Aegis128LSha256
            | CipherSuite::Aes128OcbSha256Experimental => HashAlgorithm::Sha256,
            CipherSuite::Aes256GcmSha384 => HashAlgorithm::Sha384,
            CipherSuite::Aegis256Sha512 => HashAlgorithm::Sha512,
        }
    }

    /// Get the AEAD key length for this cipher suite.
    pub const fn key_length(self) -> usize {
        self.aead_algorithm().key_size()
    }

    /// Get the AEAD IV length for this cipher suite.
    ///
    /// Not constant across suites: AEGIS uses 16- and 32-byte nonces.
    pub const fn iv_length(self) -> usize {
        self.aead_algorithm().nonce_size()
    }

    /// Get the AEAD tag length for this cipher suite.
    pub const fn tag_length(self) -> usize {
        self.aead_algorithm().tag_size()
    }

    /// Get the cipher suite name.
    pub const fn name(self) -> &'static str {
        match self {
            CipherSuite::Aes128GcmSha256 => "TLS_AES_128_GCM_SHA256",
            CipherSuite::Aes256GcmSha384 => "TLS_AES_256_GCM_SHA384",
            CipherSuite::ChaCha20Poly1305Sha256 => "TLS_CHACHA20_POLY1305_SHA256",
            CipherSuite::Aes128CcmSha256 => "TLS_AES_128_CCM_SHA256",
            CipherSuite::Aes128Ccm8Sha256 => "TLS_AES_128_CCM_8_SHA256",
            CipherSuite::Aegis256Sha512 => "TLS_AEGIS_256_SHA512",
            CipherSuite::Aegis128LSha256 => "TLS_AEGIS_128L_SHA256",
            CipherSuite::Aes128OcbSha256Experimental => "TLS_AES_128_OCB_SHA256_EXPERIMENTAL",
        }
    }
}

/// Named group for key exchange (TLS `supported_groups` code points).
///
/// The Kyber hybrids use the draft00 code points where they exist and
/// private-use values for the Kyber-512 family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum NamedGroup {
    /// secp256r1 (P-256)
    Secp256r1 = 0x0017,

    /// secp384r1 (P-384)
    Secp384r1 = 0x0018,

    /// secp521r1 (P-521)
    Secp521r1 = 0x0019,

    /// x25519
    X25519 = 0x001D,

    /// X25519 + Kyber-768 (draft00 code point, experimental)
    X25519Kyber768Draft00 = 0x6399,

    /// P-256 + Kyber-768 (draft00 code point, experimental)
    Secp256r1Kyber768Draft00 = 0x639A,

    /// X25519 + Kyber-512 (private use, experimental)
    X25519Kyber512 = 0xFE30,

    /// P-256 + Kyber-512 (private use, experimental)
    Secp256r1Kyber512 = 0xFE31,

    /// Kyber-512 standalone KEM (private use, experimental)
    Kyber512 = 0xFE32,
}

impl NamedGroup {
    /// Create from wire format (u16).
    pub const fn from_u16(value: u16) -> Option<Self> {
        match value {
            0x0017 => Some(NamedGroup::Secp256r1),
            0x0018 => Some(NamedGroup::Secp384r1),
            0x0019 => Some(NamedGroup::Secp521r1),
            0x001D => Some(NamedGroup::X25519),
            0x6399 => Some(NamedGroup::X25519Kyber768Draft00),
            0x639A => Some(NamedGroup::Secp256r1Kyber768Draft00),
            0xFE30 => Some(NamedGroup::X25519Kyber512),
            0xFE31 => Some(NamedGroup::Secp256r1Kyber512),
            0xFE32 => Some(NamedGroup::Kyber512),
            _ => None,
        }
    }

    /// Convert to wire format (u16).
    pub const fn to_u16(self) -> u16 {
        self as u16
    }

    /// Get the key exchange algorithm backing this group.
    pub const fn key_exchange_algorithm(self) -> KeyExchangeAlgorithm {
        match self {
            NamedGroup::Secp256r1 => KeyExchangeAlgorithm::Secp256r1,
            NamedGroup::Secp384r1 => KeyExchangeAlgorithm::Secp384r1,
            NamedGroup::Secp521r1 => KeyExchangeAlgorithm::Secp521r1,
            NamedGroup::X25519 => KeyExchangeAlgorithm::X25519,
            NamedGroup::X25519Kyber768Draft00 => KeyExchangeAlgorithm::X25519Kyber768,
            NamedGroup::Secp256r1Kyber768Draft00 => KeyExchangeAlgorithm::Secp256r1Kyber768,
            NamedGroup::X25519Kyber512 => KeyExchangeAlgorithm::X25519Kyber512,
            NamedGroup::Secp256r1Kyber512 => KeyExchangeAlgorithm::Secp256r1Kyber512,
            NamedGroup::Kyber512 => KeyExchangeAlgorithm::Kyber512,
        }
    }

    /// Get the group name.
    pub const fn name(self) -> &'static str {
        match self {
            NamedGroup::Secp256r1 => "secp256r1",
            NamedGroup::Secp384r1 => "secp384r1",
            NamedGroup::Secp521r1 => "secp521r1",
            NamedGroup::X25519 => "x25519",
            NamedGroup::X25519Kyber768Draft00 => "x25519_kyber768_draft00",
            NamedGroup::Secp256r1Kyber768Draft00 => "secp256r1_kyber768_draft00",
            NamedGroup::X25519Kyber512 => "x25519_kyber512",
            NamedGroup::Secp256r1Kyber512 => "secp256r1_kyber512",
            NamedGroup::Kyber512 => "kyber512",
        }
    }
}

/// Hash function identifier for the suite's KDF.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashFunction {
    /// SHA-256
    Sha256,
    /// SHA-384
    Sha384,
    /// SHA-512
    Sha512,
}

impl HashFunction {
    /// Get the provider-layer hash algorithm.
    pub const fn hash_algorithm(self) -> HashAlgorithm {
        match self {
            HashFunction::Sha256 => HashAlgorithm::Sha256,
            HashFunction::Sha384 => HashAlgorithm::Sha384,
            HashFunction::Sha512 => HashAlgorithm::Sha512,
        }
    }

    /// Get the hash function name.
    pub const fn name(self) -> &'static str {
        self.hash_algorithm().name()
    }
}

/// Default cipher suite preference order.
pub const DEFAULT_CIPHER_SUITES: &[CipherSuite] = &[
    CipherSuite::Aes128GcmSha256,
    CipherSuite::ChaCha20Poly1305Sha256,
    CipherSuite::Aes256GcmSha384,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cipher_suite_conversion() {
        assert_eq!(
            CipherSuite::from_u16(0x1301),
            Some(CipherSuite::Aes128GcmSha256)
        );
        assert_eq!(CipherSuite::Aes128GcmSha256.to_u16(), 0x1301);
        assert_eq!(
            CipherSuite::from_u16(0x1DFB),
            Some(CipherSuite::Aes128OcbSha256Experimental)
        );
        assert_eq!(CipherSuite::from_u16(0x1300), None);
    }

    #[test]
    fn test_cipher_suite_properties() {
        let suite = CipherSuite::Aes128GcmSha256;
        assert_eq!(suite.aead_algorithm(), AeadAlgorithm::Aes128Gcm);
        assert_eq!(suite.hash_algorithm(), HashAlgorithm::Sha256);
        assert_eq!(suite.key_length(), 16);
        assert_eq!(suite.iv_length(), 12);
        assert_eq!(suite.tag_length(), 16);
        assert_eq!(suite.name(), "TLS_AES_128_GCM_SHA256");
    }

    #[test]
    fn test_aegis_suite_properties() {
        assert_eq!(CipherSuite::Aegis128LSha256.iv_length(), 16);
        assert_eq!(CipherSuite::Aegis128LSha256.key_length(), 16);
        assert_eq!(
            CipherSuite::Aegis128LSha256.hash_algorithm(),
            HashAlgorithm::Sha256
        );
        assert_eq!(CipherSuite::Aegis256Sha512.iv_length(), 32);
        assert_eq!(CipherSuite::Aegis256Sha512.key_length(), 32);
        assert_eq!(
            CipherSuite::Aegis256Sha512.hash_algorithm(),
            HashAlgorithm::Sha512
        );
    }

    #[test]
    fn test_named_group_conversion() {
        assert_eq!(NamedGroup::from_u16(0x0017), Some(NamedGroup::Secp256r1));
        assert_eq!(NamedGroup::from_u16(0x001D), Some(NamedGroup::X25519));
        assert_eq!(NamedGroup::X25519Kyber768Draft00.to_u16(), 0x6399);
        assert_eq!(NamedGroup::from_u16(0x0000), None);
    }

    #[test]
    fn test_named_group_roundtrip() {
        for group in [
            NamedGroup::Secp256r1,
            NamedGroup::Secp384r1,
            NamedGroup::Secp521r1,
            NamedGroup::X25519,
            NamedGroup::X25519Kyber768Draft00,
            NamedGroup::Secp256r1Kyber768Draft00,
            NamedGroup::X25519Kyber512,
            NamedGroup::Secp256r1Kyber512,
            NamedGroup::Kyber512,
        ] {
            assert_eq!(NamedGroup::from_u16(group.to_u16()), Some(group));
        }
    }
}
