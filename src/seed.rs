use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// A deterministic seed for reproducible simulation runs.
///
/// Demand jitter and per-flight wear rates are random, but a playthrough
/// must replay identically from a save: the host derives a named stream
/// per concern ("demand", "wear", ...) and feeds it into the operations
/// that take an `Rng`. The same seed + topic always yields the same
/// stream, regardless of call order between topics.
#[derive(Debug, Clone)]
pub struct SimSeed {
    seed: u64,
}

impl SimSeed {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Create a SimSeed from entropy (new playthroughs).
    pub fn random() -> Self {
        let mut rng = rand::thread_rng();
        Self { seed: rng.gen() }
    }

    /// The raw seed value (for serialization).
    pub fn raw_seed(&self) -> u64 {
        self.seed
    }

    /// A deterministic RNG stream for one simulation concern.
    pub fn stream(&self, topic: &str) -> ChaCha8Rng {
        let topic_hash = fnv1a(topic.as_bytes());
        let mut seed_bytes = [0u8; 32];
        seed_bytes[..8].copy_from_slice(&self.seed.to_le_bytes());
        seed_bytes[8..16].copy_from_slice(&topic_hash.to_le_bytes());
        ChaCha8Rng::from_seed(seed_bytes)
    }
}

/// FNV-1a hash — simple, stable, and deterministic across platforms and
/// Rust versions, which std's DefaultHasher is not guaranteed to be.
fn fnv1a(data: &[u8]) -> u64 {
    let mut hash: u64 = 0xcbf29ce484222325;
    for &byte in data {
        hash ^= byte as u64;
        hash = hash.wrapping_mul(0x100000001b3);
    }
    hash
}
