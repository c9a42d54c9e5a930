//! Identity sources: random (UUID v4) and sequential (atomic counter).

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

use super::Identity;
use crate::constants;

/// Generator of unique identity tokens.
///
/// Implementations must stay unique under concurrent access; callers never
/// synchronize around `next_identity`.
pub trait IdentitySource: Send + Sync + fmt::Debug {
    /// Mint a fresh identity, distinct from every identity minted before.
    fn next_identity(&self) -> Identity;
}

/// Random UUID v4 tokens. Collision-resistant across processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdentitySource;

impl RandomIdentitySource {
    pub fn new() -> Self {
        Self
    }
}

impl IdentitySource for RandomIdentitySource {
    fn next_identity(&self) -> Identity {
        Identity::new(Uuid::new_v4())
    }
}

/// Deterministic tokens from an atomic counter: `seed`, `seed + 1`, ...
///
/// Unique within one source for the lifetime of the process. Two sources
/// with overlapping ranges will collide, so share one per session.
#[derive(Debug)]
pub struct SequentialIdentitySource {
    next: AtomicU64,
}

impl SequentialIdentitySource {
    /// Create a source whose first identity is `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            next: AtomicU64::new(seed),
        }
    }

    /// The raw value the next call to `next_identity` will use.
    pub fn peek(&self) -> u64 {
        self.next.load(Ordering::Relaxed)
    }
}

impl Default for SequentialIdentitySource {
    fn default() -> Self {
        Self::new(constants::DEFAULT_SEQUENTIAL_SEED)
    }
}

impl IdentitySource for SequentialIdentitySource {
    fn next_identity(&self) -> Identity {
        let value = self.next.fetch_add(1, Ordering::Relaxed);
        Identity::from_u128(u128::from(value))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;

    use rustc_hash::FxHashSet;

    use super::*;

    #[test]
    fn sequential_counts_up_from_seed() {
        let source = SequentialIdentitySource::new(10);
        assert_eq!(source.next_identity(), Identity::from_u128(10));
        assert_eq!(source.next_identity(), Identity::from_u128(11));
        assert_eq!(source.peek(), 12);
    }

    #[test]
    fn random_tokens_do_not_repeat() {
        let source = RandomIdentitySource::new();
        let minted: HashSet<Identity> = (0..1_000).map(|_| source.next_identity()).collect();
        assert_eq!(minted.len(), 1_000);
    }

    #[test]
    fn sequential_is_unique_across_threads() {
        let source = Arc::new(SequentialIdentitySource::default());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let source = Arc::clone(&source);
                std::thread::spawn(move || {
                    (0..250).map(|_| source.next_identity()).collect::<Vec<_>>()
                })
            })
            .collect();

        let mut all = FxHashSet::default();
        for handle in handles {
            for id in handle.join().unwrap() {
                assert!(all.insert(id), "duplicate identity {id}");
            }
        }
        assert_eq!(all.len(), 1_000);
    }
}
