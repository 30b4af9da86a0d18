use ark_bls12_381::{G1Projective, G2Projective};
use ark_ec::CurveGroup;
use ark_std::{test_rng, UniformRand};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rust_groth16_compress_bls12_381::{
    compress::Compressor,
    groth16::VerificationKey,
    points::{G1PointRepr, G2PointRepr},
};
use std::time::Duration;

fn bench_compress(c: &mut Criterion) {
    let mut rng = test_rng();
    let compressor = Compressor::new("bls12381").unwrap();
    let g1 = G1PointRepr::from_affine(&G1Projective::rand(&mut rng).into_affine());
    let g2 = G2PointRepr::from_affine(&G2Projective::rand(&mut rng).into_affine());

    c.bench_function("bench_compress_g1", |b| {
        b.iter(|| compressor.compress_g1(black_box(&g1)).unwrap())
    });
    c.bench_function("bench_compress_g2", |b| {
        b.iter(|| compressor.compress_g2(black_box(&g2)).unwrap())
    });

    for ic_len in [8, 128, 1024] {
        let vk = VerificationKey {
            vk_alpha_1: g1.clone(),
            vk_beta_2: g2.clone(),
            vk_gamma_2: g2.clone(),
            vk_delta_2: g2.clone(),
            ic: (0..ic_len)
                .map(|_| G1PointRepr::from_affine(&G1Projective::rand(&mut rng).into_affine()).into())
                .collect(),
            protocol: None,
            curve: None,
            n_public: None,
        };
        c.bench_function(&format!("bench_compress_vk_ic_{}", ic_len), |b| {
            b.iter(|| compressor.compress_verification_key(black_box(&vk)).unwrap())
        });
    }
}

fn criterion_config() -> Criterion {
    Criterion::default()
        .warm_up_time(Duration::from_secs(5)) // Warm-up time
        .measurement_time(Duration::from_secs(10)) // Measurement time
        .sample_size(10) // Number of samples to take
}

criterion_group!(
    name = benches;
    config = criterion_config();
    targets = bench_compress
);
criterion_main!(benches);
