//! Anonymous ring signatures over the Ed25519 curve.
//!
//! This library implements the AOS (Abe–Ohkubo–Suzuki) ring signature
//! scheme using:
//! - The Ed25519 group from `curve25519-dalek`
//! - SHA-512 (wide-reduced to the scalar field) for the challenge chain
//! - OpenSSH key formats for ingestion: one-line `ssh-ed25519` public
//!   keys and the unencrypted `openssh-key-v1` private-key container
//!
//! # Overview
//!
//! A signer who holds the secret key of one member of a declared public
//! key set (the *ring*) can sign a message so that:
//! - Any verifier is convinced some ring member signed it
//! - No verifier learns which member signed
//! - No member other than the real signer can forge
//! - No member can opt out of being named in the ring
//!
//! Two signatures by the same signer are unlinkable; the scheme has no
//! traceability and no linkability on purpose.
//!
//! # Example
//!
//! ```
//! use rand::rngs::OsRng;
//! use ringsig::SecretKey;
//!
//! // Three parties; we hold the second secret key.
//! let decoy1 = SecretKey::from_seed(&[1u8; 32]).expect("key derivation");
//! let ours = SecretKey::from_seed(&[2u8; 32]).expect("key derivation");
//! let decoy2 = SecretKey::from_seed(&[3u8; 32]).expect("key derivation");
//! let ring = [decoy1.public_key(), ours.public_key(), decoy2.public_key()];
//!
//! let message = b"the minutes of that meeting were doctored";
//! let signature = ours.sign(&mut OsRng, &ring, message).expect("signing failed");
//!
//! // Anyone can check the ring signed it; no one can tell who.
//! assert!(signature.verify(&ring, message).is_ok());
//! ```
//!
//! # Security considerations
//!
//! - The ring is ordered: the signature binds to the exact order the
//!   public keys were presented in, and any reordering invalidates it
//! - Always sign with a cryptographically secure random number generator
//! - Small-order points are accepted as ring decoys but never as the
//!   signer's own key
//! - Secret seeds, derived scalars, and nonces are zeroed when dropped

mod api;
mod constants;
mod errors;
mod keys;
mod openssh;
mod signatures;

#[cfg(test)]
mod tests;

pub use api::{is_secret_key, parse_ring, prove, verify};
pub use constants::{sig_size, PK_SIZE, SCALAR_SIZE, SEED_SIZE};
pub use errors::RingSigError;
pub use keys::{PublicKey, SecretKey};
pub use signatures::Signature;
