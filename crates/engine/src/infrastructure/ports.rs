//! Testability ports for injecting randomness.

// =============================================================================
// Testability Ports
// =============================================================================

/// Source of uniformly distributed indices.
///
/// # Implementations
///
/// - `SystemRandom` (production, uses `rand::thread_rng()`)
/// - `SeededRandom` (reproducible runs, seeded `StdRng` behind a mutex)
/// - `MockRandomPort` via mockall (testing)
/// - `FixedRandom` for deterministic testing (cycles through fixed indices)
#[cfg_attr(test, mockall::automock)]
pub trait RandomPort: Send + Sync {
    /// Draw an index in `[0, len)`. Returns 0 when `len` is 0.
    fn gen_index(&self, len: usize) -> usize;
}
