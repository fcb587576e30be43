use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ringsig::{PublicKey, SecretKey};

const MSG: &[u8] = b"benchmark message";

fn ring_of(size: u8) -> (Vec<SecretKey>, Vec<PublicKey>) {
    let keys: Vec<SecretKey> = (1..=size)
        .map(|seed| SecretKey::from_seed(&[seed; 32]).expect("key derivation"))
        .collect();
    let ring = keys.iter().map(SecretKey::public_key).collect();
    (keys, ring)
}

fn bench_sign(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let (keys, ring) = ring_of(8);

    c.bench_function("ring_sign_8", |bencher| {
        bencher.iter(|| {
            let sig = keys[3]
                .sign(&mut rng, black_box(&ring), black_box(MSG))
                .expect("sign");
            black_box(sig);
        })
    });
}

fn bench_verify(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let (keys, ring) = ring_of(8);
    let sig = keys[3].sign(&mut rng, &ring, MSG).expect("sign");

    c.bench_function("ring_verify_8", |bencher| {
        bencher.iter(|| {
            sig.verify(black_box(&ring), black_box(MSG)).expect("verify");
        })
    });
}

criterion_group!(benches, bench_sign, bench_verify);
criterion_main!(benches);
