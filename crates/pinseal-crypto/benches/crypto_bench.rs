//! Hash, modular exponentiation and RSA-OAEP benchmarks.
//!
//! Run with: cargo bench -p pinseal-crypto

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

// ---------------------------------------------------------------------------
// Hash benchmarks
// ---------------------------------------------------------------------------

fn bench_hash(c: &mut Criterion) {
    use pinseal_crypto::hash::digest;
    use pinseal_types::HashAlgId;

    let mut group = c.benchmark_group("hash");

    for size in [64usize, 1024, 16384] {
        group.throughput(Throughput::Bytes(size as u64));
        let data = vec![0u8; size];

        for alg in HashAlgId::ALL {
            group.bench_with_input(BenchmarkId::new(alg.canonical_name(), size), &size, |b, _| {
                b.iter(|| digest(alg, &data).unwrap());
            });
        }
    }

    group.finish();
}

// ---------------------------------------------------------------------------
// BigNum benchmarks
// ---------------------------------------------------------------------------

fn bench_mod_exp(c: &mut Criterion) {
    use pinseal_bignum::BigNum;

    let mut group = c.benchmark_group("bignum");

    for size in [1024usize, 2048, 4096] {
        // Odd modulus with the top bit set, base just below it
        let mut n_bytes = vec![0xC5u8; size / 8];
        n_bytes[size / 8 - 1] |= 1;
        let n = BigNum::from_bytes_be(&n_bytes);
        let base = BigNum::from_bytes_be(&vec![0x5Au8; size / 8 - 1]);
        let e = BigNum::from_u64(65537);

        group.bench_with_input(BenchmarkId::new("mod_exp_e65537", size), &size, |b, _| {
            b.iter(|| base.mod_exp(&e, &n).unwrap());
        });
    }

    group.finish();
}

// ---------------------------------------------------------------------------
// RSA-OAEP benchmarks
// ---------------------------------------------------------------------------

fn bench_rsa_oaep(c: &mut Criterion) {
    use pinseal_crypto::rand::SystemRandom;
    use pinseal_crypto::rsa::RsaPublicKey;
    use pinseal_types::HashAlgId;

    let mut group = c.benchmark_group("rsa-oaep");
    let rng = SystemRandom::new();
    let msg = [0x01u8, 0xC1, 0x04, 0x31, 0x32, 0x33, 0x34, 0xFF, 0xFF];

    for size in [1024usize, 2048] {
        let mut n_hex = "c5".repeat(size / 8);
        n_hex.replace_range(n_hex.len() - 2.., "c7");
        let key = RsaPublicKey::from_hex(&n_hex, "010001").unwrap();

        for alg in [HashAlgId::Sha1, HashAlgId::Sha256] {
            let id = format!("{}/{}", size, alg.canonical_name());
            group.bench_function(BenchmarkId::new("encrypt_hex", id), |b| {
                b.iter(|| key.encrypt_oaep_hex(alg, b"0123456789abcdef", &msg, &rng).unwrap());
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_hash, bench_mod_exp, bench_rsa_oaep);
criterion_main!(benches);
