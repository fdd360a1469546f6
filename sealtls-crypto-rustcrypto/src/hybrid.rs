//! Kyber and classical+Kyber hybrid key exchange.
//!
//! Hybrid groups concatenate both halves: the key share is
//! `classical_share || kem_share` and the shared secret is
//! `classical_secret || kem_secret`. The share passed to `exchange`
//! carries the KEM ciphertext, so `exchange` performs decapsulation.
//!
//! The KEM backend is the `ml-kem` crate (FIPS 203); the round-3 Kyber
//! parameter sets map onto ML-KEM-512/768.

use ml_kem::kem::Decapsulate;
use ml_kem::{Ciphertext, Encoded, EncodedSizeUser, KemCore, MlKem512, MlKem768};
use rand::rngs::OsRng;
use sealtls_crypto::{
    key_exchange::{KeyExchangeAlgorithm, PrivateKey, PublicKey, SharedSecret},
    Error, KeyExchange, Result,
};
use zeroize::Zeroizing;

use crate::kex::{EcdhP256, X25519Kex};

pub(crate) fn kem_generate<K: KemCore>() -> (Vec<u8>, Vec<u8>) {
    let (dk, ek) = K::generate(&mut OsRng);
    (dk.as_bytes().to_vec(), ek.as_bytes().to_vec())
}

pub(crate) fn kem_decapsulate<K: KemCore>(dk_bytes: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
    let dk_encoded = Encoded::<K::DecapsulationKey>::try_from(dk_bytes)
        .map_err(|_| Error::InvalidPrivateKey)?;
    let dk = K::DecapsulationKey::from_bytes(&dk_encoded);
    let ct = Ciphertext::<K>::try_from(ciphertext).map_err(|_| Error::InvalidPublicKey)?;
    let shared = dk.decapsulate(&ct).map_err(|_| Error::KeyExchangeFailed)?;
    Ok(shared.to_vec())
}

fn concat_secrets(classical: &[u8], kem: &[u8]) -> SharedSecret {
    let mut combined = Zeroizing::new(Vec::with_capacity(classical.len() + kem.len()));
    combined.extend_from_slice(classical);
    combined.extend_from_slice(kem);
    SharedSecret::from_bytes(combined.to_vec())
}

fn split_share<'a>(share: &'a [u8], classical_len: usize, what: Error) -> Result<(&'a [u8], &'a [u8])> {
    if share.len() <= classical_len {
        return Err(what);
    }
    Ok(share.split_at(classical_len))
}

/// Standalone Kyber-512 KEM exchange.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Kyber512Kex;

impl KeyExchange for Kyber512Kex {
    fn generate_keypair(&self) -> Result<(PrivateKey, PublicKey)> {
        let (dk, ek) = kem_generate::<MlKem512>();
        Ok((PrivateKey::from_bytes(dk), PublicKey::from_bytes(ek)))
    }

    fn exchange(&self, private_key: &PrivateKey, peer_public_key: &[u8]) -> Result<SharedSecret> {
        let shared = kem_decapsulate::<MlKem512>(private_key.as_bytes(), peer_public_key)?;
        Ok(SharedSecret::from_bytes(shared))
    }

    fn algorithm(&self) -> KeyExchangeAlgorithm {
        KeyExchangeAlgorithm::Kyber512
    }
}

/// X25519 + Kyber-512 hybrid.
#[derive(Debug, Clone, Copy)]
pub(crate) struct X25519Kyber512Kex;

impl KeyExchange for X25519Kyber512Kex {
    fn generate_keypair(&self) -> Result<(PrivateKey, PublicKey)> {
        let (x_secret, x_public) = X25519Kex::generate_raw();
        let (dk, ek) = kem_generate::<MlKem512>();

        let mut private = Vec::with_capacity(32 + dk.len());
        private.extend_from_slice(&x_secret);
        private.extend_from_slice(&dk);

        let mut public = Vec::with_capacity(32 + ek.len());
        public.extend_from_slice(&x_public);
        public.extend_from_slice(&ek);

        Ok((PrivateKey::from_bytes(private), PublicKey::from_bytes(public)))
    }

    fn exchange(&self, private_key: &PrivateKey, peer_public_key: &[u8]) -> Result<SharedSecret> {
        let (x_peer, kem_ct) = split_share(peer_public_key, 32, Error::InvalidPublicKey)?;
        let (x_secret, dk_bytes) = split_share(private_key.as_bytes(), 32, Error::InvalidPrivateKey)?;

        let x_shared = X25519Kex::exchange_raw(x_secret, x_peer)?;
        let kem_shared = kem_decapsulate::<MlKem512>(dk_bytes, kem_ct)?;

        Ok(concat_secrets(&x_shared, &kem_shared))
    }

    fn algorithm(&self) -> KeyExchangeAlgorithm {
        KeyExchangeAlgorithm::X25519Kyber512
    }
}

/// P-256 + Kyber-512 hybrid.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Secp256r1Kyber512Kex;

impl KeyExchange for Secp256r1Kyber512Kex {
    fn generate_keypair(&self) -> Result<(PrivateKey, PublicKey)> {
        let (p_secret, p_public) = EcdhP256::generate_raw();
        let (dk, ek) = kem_generate::<MlKem512>();

        let mut private = Vec::with_capacity(p_secret.len() + dk.len());
        private.extend_from_slice(&p_secret);
        private.extend_from_slice(&dk);

        let mut public = Vec::with_capacity(p_public.len() + ek.len());
        public.extend_from_slice(&p_public);
        public.extend_from_slice(&ek);

        Ok((PrivateKey::from_bytes(private), PublicKey::from_bytes(public)))
    }

    fn exchange(&self, private_key: &PrivateKey, peer_public_key: &[u8]) -> Result<SharedSecret> {
        let (p_peer, kem_ct) = split_share(peer_public_key, 65, Error::InvalidPublicKey)?;
        let (p_secret, dk_bytes) = split_share(private_key.as_bytes(), 32, Error::InvalidPrivateKey)?;

        let p_shared = EcdhP256::exchange_raw(p_secret, p_peer)?;
        let kem_shared = kem_decapsulate::<MlKem512>(dk_bytes, kem_ct)?;

        Ok(concat_secrets(&p_shared, &kem_shared))
    }

    fn algorithm(&self) -> KeyExchangeAlgorithm {
        KeyExchangeAlgorithm::Secp256r1Kyber512
    }
}

/// X25519 + Kyber-768 hybrid.
#[derive(Debug, Clone, Copy)]
pub(crate) struct X25519Kyber768Kex;

impl KeyExchange for X25519Kyber768Kex {
    fn generate_keypair(&self) -> Result<(PrivateKey, PublicKey)> {
        let (x_secret, x_public) = X25519Kex::generate_raw();
        let (dk, ek) = kem_generate::<MlKem768>();

        let mut private = Vec::with_capacity(32 + dk.len());
        private.extend_from_slice(&x_secret);
        private.extend_from_slice(&dk);

        let mut public = Vec::with_capacity(32 + ek.len());
        public.extend_from_slice(&x_public);
        public.extend_from_slice(&ek);

        Ok((PrivateKey::from_bytes(private), PublicKey::from_bytes(public)))
    }

    fn exchange(&self, private_key: &PrivateKey, peer_public_key: &[u8]) -> Result<SharedSecret> {
        let (x_peer, kem_ct) = split_share(peer_public_key, 32, Error::InvalidPublicKey)?;
        let (x_secret, dk_bytes) = split_share(private_key.as_bytes(), 32, Error::InvalidPrivateKey)?;

        let x_shared = X25519Kex::exchange_raw(x_secret, x_peer)?;
        let kem_shared = kem_decapsulate::<MlKem768>(dk_bytes, kem_ct)?;

        Ok(concat_secrets(&x_shared, &kem_shared))
    }

    fn algorithm(&self) -> KeyExchangeAlgorithm {
        KeyExchangeAlgorithm::X25519Kyber768
    }
}

/// P-256 + Kyber-768 hybrid.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Secp256r1Kyber768Kex;

impl KeyExchange for Secp256r1Kyber768Kex {
    fn generate_keypair(&self) -> Result<(PrivateKey, PublicKey)> {
        let (p_secret, p_public) = EcdhP256::generate_raw();
        let (dk, ek) = kem_generate::<MlKem768>();

        let mut private = Vec::with_capacity(p_secret.len() + dk.len());
        private.extend_from_slice(&p_secret);
        private.extend_from_slice(&dk);

        let mut public = Vec::with_capacity(p_public.len() + ek.len());
        public.extend_from_slice(&p_public);
        public.extend_from_slice(&ek);

        Ok((PrivateKey::from_bytes(private), PublicKey::from_bytes(public)))
    }

    fn exchange(&self, private_key: &PrivateKey, peer_public_key: &[u8]) -> Result<SharedSecret> {
        let (p_peer, kem_ct) = split_share(peer_public_key, 65, Error::InvalidPublicKey)?;
        let (p_secret, dk_bytes) = split_share(private_key.as_bytes(), 32, Error::InvalidPrivateKey)?;

        let p_shared = EcdhP256::exchange_raw(p_secret, p_peer)?;
        let kem_shared = kem_decapsulate::<MlKem768>(dk_bytes, kem_ct)?;

        Ok(concat_secrets(&p_shared, &kem_shared))
    }

    fn algorithm(&self) -> KeyExchangeAlgorithm {
        KeyExchangeAlgorithm::Secp256r1Kyber768
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ml_kem::kem::Encapsulate;

    fn kem_encapsulate<K: KemCore>(ek_bytes: &[u8]) -> (Vec<u8>, Vec<u8>) {
        let ek_encoded = Encoded::<K::EncapsulationKey>::try_from(ek_bytes).unwrap();
        let ek = K::EncapsulationKey::from_bytes(&ek_encoded);
        let (ct, shared) = ek.encapsulate(&mut OsRng).unwrap();
        (ct.to_vec(), shared.to_vec())
    }

    #[test]
    fn test_kyber512_decapsulation_agreement() {
        let kex = Kyber512Kex;
        let (dk, ek) = kex.generate_keypair().unwrap();

        let (ct, shared_sender) = kem_encapsulate::<MlKem512>(ek.as_bytes());
        let shared_recipient = kex.exchange(&dk, &ct).unwrap();

        assert_eq!(shared_recipient.as_bytes(), &shared_sender[..]);
    }

    #[test]
    fn test_x25519_kyber768_hybrid_agreement() {
        let kex = X25519Kyber768Kex;
        let (private, public) = kex.generate_keypair().unwrap();
        assert_eq!(public.as_bytes().len(), 32 + 1184);

        // Peer side: X25519 exchange against our share, KEM encapsulation
        // against our encapsulation key.
        let (x_public, ek_bytes) = public.as_bytes().split_at(32);
        let (peer_secret, peer_public) = X25519Kex::generate_raw();
        let x_shared = X25519Kex::exchange_raw(&peer_secret, x_public).unwrap();
        let (ct, kem_shared) = kem_encapsulate::<MlKem768>(ek_bytes);

        let mut peer_share = Vec::new();
        peer_share.extend_from_slice(&peer_public);
        peer_share.extend_from_slice(&ct);

        let combined = kex.exchange(&private, &peer_share).unwrap();
        assert_eq!(&combined.as_bytes()[..32], &x_shared[..]);
        assert_eq!(&combined.as_bytes()[32..], &kem_shared[..]);
    }

    #[test]
    fn test_truncated_share_rejected() {
        let kex = X25519Kyber512Kex;
        let (private, _) = kex.generate_keypair().unwrap();
        let result = kex.exchange(&private, &[0u8; 16]);
        assert!(result.is_err());
    }
}
