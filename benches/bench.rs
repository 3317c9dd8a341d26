// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Criterion benchmarks for lamport-ots keygen, sign, verify, and text codec.

use criterion::{criterion_group, criterion_main, Criterion};
use lamport_ots::{KeyPair, LamportParameter, LamportSha3_256, LamportSha256, LamportSha512, Signature};
use signature::{Signer, Verifier};

fn bench_keygen<P: LamportParameter>(c: &mut Criterion) {
    c.bench_function(&format!("{}/keygen", P::NAME), |b| {
        let mut rng = rand::rng();
        b.iter(|| KeyPair::<P>::generate(&mut rng).expect("keygen"));
    });
}

fn bench_sign<P: LamportParameter>(c: &mut Criterion) {
    let mut rng = rand::rng();
    let keypair = KeyPair::<P>::generate(&mut rng).expect("keygen");
    let msg = b"benchmark message for signing";

    c.bench_function(&format!("{}/sign", P::NAME), |b| {
        b.iter(|| keypair.signing_key().try_sign(msg).expect("sign"));
    });
}

fn bench_verify<P: LamportParameter>(c: &mut Criterion) {
    let mut rng = rand::rng();
    let keypair = KeyPair::<P>::generate(&mut rng).expect("keygen");
    let msg = b"benchmark message for verify";
    let sig = keypair.signing_key().try_sign(msg).expect("sign");

    c.bench_function(&format!("{}/verify", P::NAME), |b| {
        b.iter(|| keypair.verifying_key().verify(msg, &sig).expect("verify"));
    });
}

fn bench_codec<P: LamportParameter>(c: &mut Criterion) {
    let mut rng = rand::rng();
    let keypair = KeyPair::<P>::generate(&mut rng).expect("keygen");
    let text = keypair.signing_key().sign(b"codec").to_string();

    c.bench_function(&format!("{}/signature_parse", P::NAME), |b| {
        b.iter(|| text.parse::<Signature<P>>().expect("parse"));
    });
}

fn sha256_benches(c: &mut Criterion) {
    bench_keygen::<LamportSha256>(c);
    bench_sign::<LamportSha256>(c);
    bench_verify::<LamportSha256>(c);
    bench_codec::<LamportSha256>(c);
}

fn sha3_256_benches(c: &mut Criterion) {
    bench_keygen::<LamportSha3_256>(c);
    bench_sign::<LamportSha3_256>(c);
    bench_verify::<LamportSha3_256>(c);
}

fn sha512_benches(c: &mut Criterion) {
    bench_keygen::<LamportSha512>(c);
    bench_sign::<LamportSha512>(c);
    bench_verify::<LamportSha512>(c);
}

criterion_group!(benches, sha256_benches, sha3_256_benches, sha512_benches);
criterion_main!(benches);
