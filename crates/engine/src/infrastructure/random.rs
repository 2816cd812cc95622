//! Random source implementations.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::infrastructure::ports::RandomPort;

/// System random - uses the thread-local RNG.
///
/// Every calling thread draws from its own generator, so one instance can be
/// shared freely without contention.
#[derive(Debug, Clone, Default)]
pub struct SystemRandom;

impl SystemRandom {
    pub fn new() -> Self {
        Self
    }
}

impl RandomPort for SystemRandom {
    fn gen_index(&self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        rand::thread_rng().gen_range(0..len)
    }
}

/// Seeded random - reproducible index sequences.
///
/// The generator state is shared, so access goes through a mutex. Two
/// instances built from the same seed yield the same sequence.
#[derive(Debug)]
pub struct SeededRandom {
    seed: u64,
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomPort for SeededRandom {
    fn gen_index(&self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        // StdRng stays valid if another holder panicked.
        let mut rng = self
            .rng
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.gen_range(0..len)
    }
}

/// Fixed random for testing.
///
/// Returns indices from a provided sequence, cycling if needed.
/// Thread-safe via atomic operations.
#[cfg(test)]
#[derive(Debug)]
pub struct FixedRandom {
    values: Vec<usize>,
    index: std::sync::atomic::AtomicUsize,
}

#[cfg(test)]
impl FixedRandom {
    /// Create a new FixedRandom with the given sequence of indices.
    ///
    /// An empty sequence behaves like `constant(0)`.
    pub fn new(values: Vec<usize>) -> Self {
        let values = if values.is_empty() { vec![0] } else { values };
        Self {
            values,
            index: std::sync::atomic::AtomicUsize::new(0),
        }
    }

    /// Create a FixedRandom that always returns the same index.
    pub fn constant(value: usize) -> Self {
        Self::new(vec![value])
    }
}

#[cfg(test)]
impl RandomPort for FixedRandom {
    // Values are returned as-is, even when >= len, so callers can exercise
    // their handling of a misbehaving source.
    fn gen_index(&self, _len: usize) -> usize {
        let idx = self
            .index
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        self.values[idx % self.values.len()]
    }
}
