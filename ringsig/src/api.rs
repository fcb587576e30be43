//! String-level entrypoints.
//!
//! These wrap the typed core in the forms the outside world holds:
//! one-line OpenSSH public keys, PEM private keys, and hex proofs.
//! Every function is total — any input, however malformed, comes back
//! as an error value, never a panic.

use rand::rngs::OsRng;

use crate::errors::RingSigError;
use crate::keys::{PublicKey, SecretKey};
use crate::signatures::Signature;

/// Parse one-line OpenSSH public keys into a ring, preserving order.
///
/// The order of `public_keys` is the ring order the signature binds to;
/// callers must present the same order when proving and verifying.
pub fn parse_ring(public_keys: &[impl AsRef<str>]) -> Result<Vec<PublicKey>, RingSigError> {
    public_keys
        .iter()
        .map(|line| PublicKey::from_openssh(line.as_ref()))
        .collect()
}

/// Produce a hex-encoded ring signature over `message`.
///
/// `public_keys` are one-line `ssh-ed25519` entries in ring order;
/// `secret_key` is the PEM text of an unencrypted OpenSSH ed25519 key
/// whose public key must appear in the ring. Uses the operating
/// system's CSPRNG.
pub fn prove(
    public_keys: &[impl AsRef<str>],
    message: &[u8],
    secret_key: &str,
) -> Result<String, RingSigError> {
    let ring = parse_ring(public_keys)?;
    let key = SecretKey::from_openssh(secret_key)?;
    let signature = key.sign(&mut OsRng, &ring, message)?;
    Ok(signature.to_hex())
}

/// Check a hex-encoded proof against the ring and message.
///
/// Returns `Ok(())` exactly when some member of `public_keys`, in this
/// order, signed `message`.
pub fn verify(
    proof: &str,
    public_keys: &[impl AsRef<str>],
    message: &[u8],
) -> Result<(), RingSigError> {
    let ring = parse_ring(public_keys)?;
    let signature = Signature::from_hex(proof)?;
    signature.verify(&ring, message)
}

/// Whether `text` is an unencrypted OpenSSH ed25519 secret key.
///
/// Used by callers to decide whether an input should be fed to
/// [`prove`] or treated as an already-constructed proof. Never panics.
pub fn is_secret_key(text: &str) -> bool {
    SecretKey::is_openssh(text)
}
