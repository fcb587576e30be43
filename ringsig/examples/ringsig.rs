use rand::rngs::StdRng;
use rand::SeedableRng;
use ringsig::{PublicKey, SecretKey, Signature};

fn main() {
    let mut rng = StdRng::seed_from_u64(42);
    let keys: Vec<SecretKey> = (1u8..=4)
        .map(|seed| SecretKey::from_seed(&[seed; 32]).expect("key derivation"))
        .collect();
    let ring: Vec<PublicKey> = keys.iter().map(SecretKey::public_key).collect();

    let message = b"one of us wrote this";
    let sig = keys[2].sign(&mut rng, &ring, message).expect("sign");

    let transport = sig.to_hex();
    println!("ring of {}, proof: {}", ring.len(), transport);

    let parsed = Signature::from_hex(&transport).expect("parse");
    parsed.verify(&ring, message).expect("verify");
}
