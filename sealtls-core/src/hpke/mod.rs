//! HPKE (Hybrid Public Key Encryption) context core.
//!
//! Implements the encryption/decryption and key-export engine from the
//! HPKE IETF draft on top of the suite abstraction: a labeled HKDF
//! carrying the protocol-version prefix, deterministic `suite_id`
//! construction, and the sequence-counter context driving AEAD nonces.

mod context;
mod hkdf;
mod suite_id;

pub use context::HpkeContext;
pub use hkdf::Hkdf;
pub use suite_id::{aead_id, generate_suite_id, kdf_id, kem_id};
