//! Key exchange implementations over `x25519-dalek` and the NIST
//! P-curve crates.

use p256::elliptic_curve::sec1::ToEncodedPoint;
use rand::rngs::OsRng;
use rand::RngCore;
use sealtls_crypto::{
    key_exchange::{KeyExchangeAlgorithm, PrivateKey, PublicKey, SharedSecret},
    Error, KeyExchange, Result,
};

/// Create a key exchange instance for the specified algorithm.
pub fn create_key_exchange(algorithm: KeyExchangeAlgorithm) -> Result<Box<dyn KeyExchange>> {
    match algorithm {
        // Classical key exchange
        KeyExchangeAlgorithm::X25519 => Ok(Box::new(X25519Kex)),
        KeyExchangeAlgorithm::Secp256r1 => Ok(Box::new(EcdhP256)),
        KeyExchangeAlgorithm::Secp384r1 => Ok(Box::new(EcdhP384)),
        KeyExchangeAlgorithm::Secp521r1 => Ok(Box::new(EcdhP521)),

        // Kyber and classical+Kyber hybrids
        #[cfg(feature = "kyber")]
        KeyExchangeAlgorithm::Kyber512 => Ok(Box::new(crate::hybrid::Kyber512Kex)),
        #[cfg(feature = "kyber")]
        KeyExchangeAlgorithm::X25519Kyber512 => Ok(Box::new(crate::hybrid::X25519Kyber512Kex)),
        #[cfg(feature = "kyber")]
        KeyExchangeAlgorithm::Secp256r1Kyber512 => {
            Ok(Box::new(crate::hybrid::Secp256r1Kyber512Kex))
        },
        #[cfg(feature = "kyber")]
        KeyExchangeAlgorithm::X25519Kyber768 => Ok(Box::new(crate::hybrid::X25519Kyber768Kex)),
        #[cfg(feature = "kyber")]
        KeyExchangeAlgorithm::Secp256r1Kyber768 => {
            Ok(Box::new(crate::hybrid::Secp256r1Kyber768Kex))
        },

        #[cfg(not(feature = "kyber"))]
        KeyExchangeAlgorithm::Kyber512
        | KeyExchangeAlgorithm::X25519Kyber512
        | KeyExchangeAlgorithm::Secp256r1Kyber512
        | KeyExchangeAlgorithm::X25519Kyber768
        | KeyExchangeAlgorithm::Secp256r1Kyber768 => Err(Error::NotImplemented(format!(
            "{} (enable the `kyber` feature)",
            algorithm.name()
        ))),
    }
}

/// X25519 ECDH (RFC 7748).
#[derive(Debug, Clone, Copy)]
pub(crate) struct X25519Kex;

impl X25519Kex {
    pub(crate) fn generate_raw() -> ([u8; 32], [u8; 32]) {
        let mut secret = [0u8; 32];
        OsRng.fill_bytes(&mut secret);
        let public = x25519_dalek::x25519(secret, x25519_dalek::X25519_BASEPOINT_BYTES);
        (secret, public)
    }

    pub(crate) fn exchange_raw(secret: &[u8], peer_public: &[u8]) -> Result<[u8; 32]> {
        let secret: [u8; 32] = secret.try_into().map_err(|_| Error::InvalidPrivateKey)?;
        let peer_public: [u8; 32] = peer_public
            .try_into()
            .map_err(|_| Error::InvalidPublicKey)?;
        Ok(x25519_dalek::x25519(secret, peer_public))
    }
}

impl KeyExchange for X25519Kex {
    fn generate_keypair(&self) -> Result<(PrivateKey, PublicKey)> {
        let (secret, public) = Self::generate_raw();
        Ok((
            PrivateKey::from_bytes(secret.to_vec()),
            PublicKey::from_bytes(public.to_vec()),
        ))
    }

    fn exchange(&self, private_key: &PrivateKey, peer_public_key: &[u8]) -> Result<SharedSecret> {
        let shared = Self::exchange_raw(private_key.as_bytes(), peer_public_key)?;
        Ok(SharedSecret::from_bytes(shared.to_vec()))
    }

    fn algorithm(&self) -> KeyExchangeAlgorithm {
        KeyExchangeAlgorithm::X25519
    }
}

macro_rules! nist_ecdh {
    ($name:ident, $doc:literal, $curve:ident, $algorithm:ident) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy)]
        pub(crate) struct $name;

        impl $name {
            pub(crate) fn generate_raw() -> (Vec<u8>, Vec<u8>) {
                let secret = $curve::SecretKey::random(&mut OsRng);
                let public = secret.public_key().to_encoded_point(false);
                (secret.to_bytes().to_vec(), public.as_bytes().to_vec())
            }

            pub(crate) fn exchange_raw(secret: &[u8], peer_public: &[u8]) -> Result<Vec<u8>> {
                let secret = $curve::SecretKey::from_slice(secret)
                    .map_err(|_| Error::InvalidPrivateKey)?;
                let peer_public = $curve::PublicKey::from_sec1_bytes(peer_public)
                    .map_err(|_| Error::InvalidPublicKey)?;
                let shared = $curve::ecdh::diffie_hellman(
                    secret.to_nonzero_scalar(),
                    peer_public.as_affine(),
                );
                Ok(shared.raw_secret_bytes().to_vec())
            }
        }

        impl KeyExchange for $name {
            fn generate_keypair(&self) -> Result<(PrivateKey, PublicKey)> {
                let (secret, public) = Self::generate_raw();
                Ok((
                    PrivateKey::from_bytes(secret),
                    PublicKey::from_bytes(public),
                ))
            }

            fn exchange(
                &self,
                private_key: &PrivateKey,
                peer_public_key: &[u8],
            ) -> Result<SharedSecret> {
                let shared = Self::exchange_raw(private_key.as_bytes(), peer_public_key)?;
                Ok(SharedSecret::from_bytes(shared))
            }

            fn algorithm(&self) -> KeyExchangeAlgorithm {
                KeyExchangeAlgorithm::$algorithm
            }
        }
    };
}

nist_ecdh!(EcdhP256, "ECDH over NIST P-256 (secp256r1).", p256, Secp256r1);
nist_ecdh!(EcdhP384, "ECDH over NIST P-384 (secp384r1).", p384, Secp384r1);
nist_ecdh!(EcdhP521, "ECDH over NIST P-521 (secp521r1).", p521, Secp521r1);

#[cfg(test)]
mod tests {
    use super::*;

    fn roundtrip(algorithm: KeyExchangeAlgorithm) {
        let kex = create_key_exchange(algorithm).unwrap();
        let (sk_a, pk_a) = kex.generate_keypair().unwrap();
        let (sk_b, pk_b) = kex.generate_keypair().unwrap();

        assert_eq!(pk_a.as_bytes().len(), algorithm.public_key_size());

        let shared_a = kex.exchange(&sk_a, pk_b.as_bytes()).unwrap();
        let shared_b = kex.exchange(&sk_b, pk_a.as_bytes()).unwrap();

        assert_eq!(shared_a.as_bytes(), shared_b.as_bytes());
        assert_eq!(shared_a.as_bytes().len(), algorithm.shared_secret_size());
    }

    #[test]
    fn test_x25519_shared_secret_agreement() {
        roundtrip(KeyExchangeAlgorithm::X25519);
    }

    #[test]
    fn test_p256_shared_secret_agreement() {
        roundtrip(KeyExchangeAlgorithm::Secp256r1);
    }

    #[test]
    fn test_p384_shared_secret_agreement() {
        roundtrip(KeyExchangeAlgorithm::Secp384r1);
    }

    #[test]
    fn test_p521_shared_secret_agreement() {
        roundtrip(KeyExchangeAlgorithm::Secp521r1);
    }

    #[test]
    fn test_x25519_rfc7748_vector() {
        // RFC 7748 section 6.1.
        let alice_sk =
            hex::decode("77076d0a7318a57d3c16c17251b26645df4c2f87ebc0992ab177fba51db92c2a")
                .unwrap();
        let bob_pk = hex::decode("de9edb7d7b7dc1b4d35b61c2ece435373f8343c85b78674dadfc7e146f882b4f")
            .unwrap();
        let shared = X25519Kex::exchange_raw(&alice_sk, &bob_pk).unwrap();
        assert_eq!(
            shared.to_vec(),
            hex::decode("4a5d9d5ba4ce2de1728e3bf480350f25e07e21c947d19e3376f09b3c1e161742")
                .unwrap()
        );
    }

    #[test]
    fn test_invalid_peer_key_rejected() {
        let kex = create_key_exchange(KeyExchangeAlgorithm::Secp256r1).unwrap();
        let (sk, _) = kex.generate_keypair().unwrap();
        let result = kex.exchange(&sk, &[0u8; 65]);
        assert!(result.is_err());
    }

    #[cfg(not(feature = "kyber"))]
    #[test]
    fn test_kyber_not_implemented() {
        for algorithm in [
            KeyExchangeAlgorithm::Kyber512,
            KeyExchangeAlgorithm::X25519Kyber512,
            KeyExchangeAlgorithm::X25519Kyber768,
        ] {
            assert!(matches!(
                create_key_exchange(algorithm),
                Err(Error::NotImplemented(_))
            ));
        }
    }
}
