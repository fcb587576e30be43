//! Signature type, transcript hashing, verification, and the wire
//! codec.

use curve25519_dalek::edwards::{CompressedEdwardsY, EdwardsPoint};
use curve25519_dalek::scalar::Scalar;
use rand::{CryptoRng, RngCore};
use sha2::{Digest, Sha512};
use zeroize::Zeroizing;

use crate::constants::SCALAR_SIZE;
use crate::errors::RingSigError;
use crate::keys::PublicKey;

/// An AOS ring signature: the challenge at ring position 0 plus one
/// response scalar per ring member.
///
/// A signature over a ring of `n` members satisfies the chained
/// equations `c_{i+1} = H(ring ‖ message ‖ s_i·B − c_i·P_i)` for every
/// `i`, wrapping around to close on `c_0`. It carries no ring-size
/// field of its own; the encoded length implies `n` and the verifier
/// checks it against the ring it is given.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature {
    /// The challenge at ring position 0.
    pub(crate) c0: Scalar,
    /// Per-member response scalars, in ring order.
    pub(crate) s: Vec<Scalar>,
}

impl Signature {
    /// Number of ring members this signature covers.
    pub fn ring_size(&self) -> usize {
        self.s.len()
    }

    /// Verify this signature over `ring` and `message`.
    ///
    /// Recomputes the challenge chain from position 0 across every
    /// member and accepts only if the chain closes on the starting
    /// challenge. The whole chain is always computed; there is no early
    /// exit on a partial mismatch.
    pub fn verify(&self, ring: &[PublicKey], message: &[u8]) -> Result<(), RingSigError> {
        if ring.len() != self.s.len() {
            return Err(RingSigError::RingSizeMismatch {
                expected: ring.len(),
                got: self.s.len(),
            });
        }
        let prefix = ring_transcript(ring, message);
        let mut c = self.c0;
        for (pk, s) in ring.iter().zip(&self.s) {
            let r = EdwardsPoint::vartime_double_scalar_mul_basepoint(&-c, &pk.point, s);
            c = challenge(&prefix, &r.compress());
        }
        if c == self.c0 {
            Ok(())
        } else {
            Err(RingSigError::BadSignature)
        }
    }

    /// Serialize as `c_0 ‖ s_0 ‖ … ‖ s_{n-1}`, 32 little-endian bytes
    /// per scalar.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(SCALAR_SIZE * (self.s.len() + 1));
        out.extend_from_slice(self.c0.as_bytes());
        for s in &self.s {
            out.extend_from_slice(s.as_bytes());
        }
        out
    }

    /// Parse a signature blob.
    ///
    /// The length must be a multiple of 32 covering at least one ring
    /// member (64 bytes), and every scalar must be canonically reduced.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, RingSigError> {
        if bytes.len() % SCALAR_SIZE != 0 || bytes.len() < 2 * SCALAR_SIZE {
            return Err(RingSigError::ParseSignature(format!(
                "length {} is not 32·(n+1) for any ring size n ≥ 1",
                bytes.len()
            )));
        }
        let mut scalars = bytes
            .chunks_exact(SCALAR_SIZE)
            .map(read_scalar)
            .collect::<Result<Vec<_>, _>>()?;
        let c0 = scalars.remove(0);
        Ok(Signature { c0, s: scalars })
    }

    /// Lower-case hex of [`Signature::to_bytes`], the transport form.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Parse the hex transport form.
    pub fn from_hex(text: &str) -> Result<Self, RingSigError> {
        let bytes = hex::decode(text)
            .map_err(|e| RingSigError::ParseSignature(format!("invalid hex: {e}")))?;
        Self::from_bytes(&bytes)
    }
}

fn read_scalar(chunk: &[u8]) -> Result<Scalar, RingSigError> {
    let mut bytes = [0u8; SCALAR_SIZE];
    bytes.copy_from_slice(chunk);
    Option::from(Scalar::from_canonical_bytes(bytes))
        .ok_or_else(|| RingSigError::ParseSignature("non-canonical scalar".into()))
}

/// Absorb the ring and message into a digest that each challenge
/// computation extends with a commitment point.
///
/// The transcript is `ring_bytes ‖ message ‖ R_i`: the canonical member
/// encodings in ring order, then the raw message with no length
/// framing, then the commitment appended per link. The ring prefix is
/// what binds a signature to one ring and one member order.
pub(crate) fn ring_transcript(ring: &[PublicKey], message: &[u8]) -> Sha512 {
    let mut digest = Sha512::new();
    for pk in ring {
        digest.update(pk.as_bytes());
    }
    digest.update(message);
    digest
}

/// `H(transcript ‖ R) mod ℓ`, the next link of the challenge chain.
pub(crate) fn challenge(prefix: &Sha512, commitment: &CompressedEdwardsY) -> Scalar {
    Scalar::from_hash(prefix.clone().chain_update(commitment.as_bytes()))
}

/// A uniform scalar from 64 bytes of CSPRNG output, wide-reduced.
///
/// An RNG failure is reported, never papered over with weaker entropy.
pub(crate) fn random_scalar<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Scalar, RingSigError> {
    let mut wide = Zeroizing::new([0u8; 64]);
    rng.try_fill_bytes(&mut wide[..]).map_err(|_| RingSigError::Rng)?;
    Ok(Scalar::from_bytes_mod_order_wide(&wide))
}
