//! Error types for key ingestion, proving, and verification.

use thiserror::Error;

/// Errors reported by the ring-signature core.
///
/// The set is closed: every failure of parsing, proving, or verifying
/// maps onto exactly one variant, and every variant renders as a
/// non-empty human-readable string. Errors are terminal for the call
/// that produced them; nothing is retried internally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RingSigError {
    /// A one-line `ssh-ed25519` public key failed to parse.
    #[error("malformed ssh-ed25519 public key: {0}")]
    ParsePublicKey(String),

    /// An OpenSSH private key failed to parse, or is passphrase
    /// protected.
    #[error("malformed or encrypted OpenSSH private key: {0}")]
    ParseSecretKey(String),

    /// A point encoding was non-canonical or not on the curve.
    #[error("invalid curve point encoding")]
    InvalidPoint,

    /// The signer's public key is not a member of the ring.
    #[error("secret key does not match any ring member")]
    SignerNotInRing,

    /// A signature blob failed to decode.
    #[error("malformed signature: {0}")]
    ParseSignature(String),

    /// The signature covers a different number of ring members than the
    /// ring supplied at verification time.
    #[error("signature covers {got} ring members, ring has {expected}")]
    RingSizeMismatch {
        /// Members in the supplied ring.
        expected: usize,
        /// Members the signature covers.
        got: usize,
    },

    /// The challenge chain does not close over this ring and message.
    #[error("ring equation does not close")]
    BadSignature,

    /// The random number generator failed to produce entropy.
    #[error("random number generator failure")]
    Rng,
}
