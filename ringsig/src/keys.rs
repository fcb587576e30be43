//! Public and secret ed25519 keys and their OpenSSH ingestion.

use curve25519_dalek::edwards::{CompressedEdwardsY, EdwardsPoint};
use curve25519_dalek::scalar::{clamp_integer, Scalar};
use rand::{CryptoRng, RngCore};
use sha2::{Digest, Sha512};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::errors::RingSigError;
use crate::openssh;
use crate::signatures::{challenge, random_scalar, ring_transcript, Signature};

/// A ring member's public key.
///
/// Holds the decoded Edwards point together with its canonical 32-byte
/// encoding. Decoding fails for encodings that are non-canonical or not
/// on the curve. Small-order points decode successfully — a decoy
/// position carries no discrete-log witness — but are rejected where
/// they would matter, as the signer's own key in [`SecretKey`]
/// derivation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PublicKey {
    pub(crate) point: EdwardsPoint,
    encoded: [u8; 32],
}

impl PublicKey {
    /// Decode a public key from its canonical RFC 8032 encoding.
    pub fn from_bytes(bytes: &[u8; 32]) -> Result<Self, RingSigError> {
        let point = CompressedEdwardsY(*bytes)
            .decompress()
            .ok_or(RingSigError::InvalidPoint)?;
        // decompress() tolerates a handful of non-canonical sign and
        // y encodings; the round trip weeds those out.
        if point.compress().to_bytes() != *bytes {
            return Err(RingSigError::InvalidPoint);
        }
        Ok(PublicKey {
            point,
            encoded: *bytes,
        })
    }

    /// Parse a one-line OpenSSH public key, the `authorized_keys` form
    /// written by `ssh-keygen -t ed25519`.
    ///
    /// Leading whitespace and a trailing comment are accepted. The blob
    /// must name `ssh-ed25519` and carry a 32-byte key that decodes as
    /// a curve point.
    pub fn from_openssh(line: &str) -> Result<Self, RingSigError> {
        let raw = openssh::decode_public_line(line)
            .map_err(|e| RingSigError::ParsePublicKey(e.to_string()))?;
        Self::from_bytes(&raw)
    }

    /// The canonical 32-byte encoding.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.encoded
    }

    /// The canonical 32-byte encoding, by value.
    pub fn to_bytes(&self) -> [u8; 32] {
        self.encoded
    }
}

/// A signer's secret key: the 32-byte seed, the scalar clamped out of
/// it, and the matching public key.
///
/// Secret material is wiped when the key is dropped, on every exit
/// path. A `SecretKey` is only ever held transiently while proving.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct SecretKey {
    seed: [u8; 32],
    scalar: Scalar,
    #[zeroize(skip)]
    public: PublicKey,
}

impl SecretKey {
    /// Derive a key from a raw 32-byte seed per RFC 8032: the scalar is
    /// the clamped low half of `SHA-512(seed)` and the public key is
    /// that scalar times the base point.
    ///
    /// Fails only if the derived public key is small-order.
    pub fn from_seed(seed: &[u8; 32]) -> Result<Self, RingSigError> {
        let mut digest = Sha512::digest(seed);
        let mut low = Zeroizing::new([0u8; 32]);
        low.copy_from_slice(&digest[..32]);
        digest.as_mut_slice().zeroize();
        let scalar = Zeroizing::new(Scalar::from_bytes_mod_order(clamp_integer(*low)));

        let point = EdwardsPoint::mul_base(&scalar);
        if point.is_small_order() {
            return Err(RingSigError::InvalidPoint);
        }
        let public = PublicKey {
            point,
            encoded: point.compress().to_bytes(),
        };
        Ok(SecretKey {
            seed: *seed,
            scalar: *scalar,
            public,
        })
    }

    /// Parse the PEM text of an unencrypted OpenSSH ed25519 private
    /// key, as produced by `ssh-keygen -t ed25519` without a
    /// passphrase.
    ///
    /// The container's embedded public key must equal the key derived
    /// from the seed. Passphrase-protected keys fail with
    /// [`RingSigError::ParseSecretKey`].
    pub fn from_openssh(pem: &str) -> Result<Self, RingSigError> {
        let decoded = openssh::decode_private_pem(pem)
            .map_err(|e| RingSigError::ParseSecretKey(e.to_string()))?;
        let key = Self::from_seed(&decoded.seed)?;
        if key.public.to_bytes() != decoded.public {
            return Err(RingSigError::ParseSecretKey(
                "embedded public key does not match the seed".into(),
            ));
        }
        Ok(key)
    }

    /// Whether `text` parses as an unencrypted OpenSSH ed25519 private
    /// key.
    ///
    /// Never panics; malformed and passphrase-protected keys simply
    /// return `false`.
    pub fn is_openssh(text: &str) -> bool {
        Self::from_openssh(text).is_ok()
    }

    /// The public key derived from this secret.
    pub fn public_key(&self) -> PublicKey {
        self.public
    }

    /// Sign `message` as an anonymous member of `ring`.
    ///
    /// The ring is an ordered sequence of public keys that must contain
    /// this key's public key; the signature binds to the exact order
    /// presented. The AOS walk commits at the signer's position with a
    /// fresh nonce, chains challenges through every other position with
    /// uniformly random responses, and closes the ring with the one
    /// response that needs the secret:
    ///
    /// 1. `R_π = u·B` for random `u`
    /// 2. `c_{i+1} = H(ring ‖ message ‖ R_i)`, indices mod n
    /// 3. `R_i = s_i·B − c_i·P_i` for random `s_i`, at every decoy `i`
    /// 4. `s_π = u + c_π·a`
    ///
    /// Fixed-base multiplications involving secrets are constant-time;
    /// the decoy side handles only public values.
    pub fn sign<R: RngCore + CryptoRng>(
        &self,
        rng: &mut R,
        ring: &[PublicKey],
        message: &[u8],
    ) -> Result<Signature, RingSigError> {
        let index = ring
            .iter()
            .position(|pk| pk.as_bytes() == self.public.as_bytes())
            .ok_or(RingSigError::SignerNotInRing)?;
        let n = ring.len();
        let prefix = ring_transcript(ring, message);

        // Wrapped so the nonce is wiped on every exit, including an
        // RNG failure partway through the walk.
        let nonce = Zeroizing::new(random_scalar(rng)?);
        let mut challenges = vec![Scalar::ZERO; n];
        let mut responses = vec![Scalar::ZERO; n];

        let commitment = EdwardsPoint::mul_base(&nonce);
        challenges[(index + 1) % n] = challenge(&prefix, &commitment.compress());
        for i in ((index + 1)..(index + n)).map(|i| i % n) {
            responses[i] = random_scalar(rng)?;
            let r = EdwardsPoint::vartime_double_scalar_mul_basepoint(
                &-challenges[i],
                &ring[i].point,
                &responses[i],
            );
            challenges[(i + 1) % n] = challenge(&prefix, &r.compress());
        }
        responses[index] = *nonce + challenges[index] * self.scalar;

        Ok(Signature {
            c0: challenges[0],
            s: responses,
        })
    }
}

impl From<&SecretKey> for PublicKey {
    /// Equivalent to calling [`SecretKey::public_key`].
    fn from(key: &SecretKey) -> Self {
        key.public_key()
    }
}
