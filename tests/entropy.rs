//! Key generation against injected randomness sources.

use core::convert::Infallible;
use lamport_ots::{Error, KeyPair, LamportSha256, LamportSha512};
use sha2::{Digest, Sha256};

// ============================================================================
// Deterministic source: SHA-256 in counter mode over a fixed seed
// ============================================================================

struct CounterDrbg {
    seed: [u8; 32],
    counter: u64,
}

impl CounterDrbg {
    fn new(seed: [u8; 32]) -> Self {
        Self { seed, counter: 0 }
    }

    fn generate(&mut self, output: &mut [u8]) {
        for chunk in output.chunks_mut(32) {
            let block = Sha256::new()
                .chain_update(self.seed)
                .chain_update(self.counter.to_be_bytes())
                .finalize();
            chunk.copy_from_slice(&block[..chunk.len()]);
            self.counter += 1;
        }
    }
}

impl rand::TryRng for CounterDrbg {
    type Error = Infallible;

    fn try_next_u32(&mut self) -> Result<u32, Infallible> {
        let mut buf = [0u8; 4];
        self.generate(&mut buf);
        Ok(u32::from_le_bytes(buf))
    }

    fn try_next_u64(&mut self) -> Result<u64, Infallible> {
        let mut buf = [0u8; 8];
        self.generate(&mut buf);
        Ok(u64::from_le_bytes(buf))
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Infallible> {
        self.generate(dest);
        Ok(())
    }
}

impl rand::TryCryptoRng for CounterDrbg {}

// ============================================================================
// Failing source: yields a fixed budget of bytes, then errors
// ============================================================================

#[derive(Debug)]
struct Drained;

impl core::fmt::Display for Drained {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("entropy budget spent")
    }
}

impl std::error::Error for Drained {}

struct BudgetRng {
    inner: CounterDrbg,
    remaining: usize,
}

impl BudgetRng {
    fn take(&mut self, len: usize) -> Result<(), Drained> {
        if len > self.remaining {
            return Err(Drained);
        }
        self.remaining -= len;
        Ok(())
    }
}

impl rand::TryRng for BudgetRng {
    type Error = Drained;

    fn try_next_u32(&mut self) -> Result<u32, Drained> {
        self.take(4)?;
        let mut buf = [0u8; 4];
        self.inner.generate(&mut buf);
        Ok(u32::from_le_bytes(buf))
    }

    fn try_next_u64(&mut self) -> Result<u64, Drained> {
        self.take(8)?;
        let mut buf = [0u8; 8];
        self.inner.generate(&mut buf);
        Ok(u64::from_le_bytes(buf))
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Drained> {
        self.take(dest.len())?;
        self.inner.generate(dest);
        Ok(())
    }
}

impl rand::TryCryptoRng for BudgetRng {}

#[test]
fn seeded_generation_is_reproducible() {
    let a = KeyPair::<LamportSha256>::generate(&mut CounterDrbg::new([7u8; 32])).expect("keygen");
    let b = KeyPair::<LamportSha256>::generate(&mut CounterDrbg::new([7u8; 32])).expect("keygen");
    let c = KeyPair::<LamportSha256>::generate(&mut CounterDrbg::new([8u8; 32])).expect("keygen");
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn seeded_signature_is_reproducible() {
    let keypair =
        KeyPair::<LamportSha256>::generate(&mut CounterDrbg::new([1u8; 32])).expect("keygen");
    let sig = keypair.signing_key().sign(b"a");

    let again =
        KeyPair::<LamportSha256>::generate(&mut CounterDrbg::new([1u8; 32])).expect("keygen");
    assert_eq!(again.signing_key().sign(b"a"), sig);
    assert!(lamport_ots::verify(again.verifying_key(), b"a", &sig));
}

#[test]
fn first_leaf_comes_from_first_draw() {
    let mut expected = [0u8; 32];
    CounterDrbg::new([3u8; 32]).generate(&mut expected);

    let keypair =
        KeyPair::<LamportSha256>::generate(&mut CounterDrbg::new([3u8; 32])).expect("keygen");
    assert_eq!(keypair.signing_key().leaf(0, 0), Some(expected.as_slice()));
}

#[test]
fn exhausted_source_is_fatal() {
    let mut rng = BudgetRng {
        inner: CounterDrbg::new([0u8; 32]),
        remaining: 100 * 32,
    };
    let result = KeyPair::<LamportSha256>::generate(&mut rng);
    assert!(matches!(result, Err(Error::EntropyExhausted)));
}

#[test]
fn source_with_exact_budget_suffices() {
    let mut rng = BudgetRng {
        inner: CounterDrbg::new([0u8; 32]),
        remaining: 2 * 512 * 64,
    };
    KeyPair::<LamportSha512>::generate(&mut rng).expect("keygen");
    assert_eq!(rng.remaining, 0);
}
