//! Random permuters.
//!
//! The engine never touches an RNG directly. Every shuffle goes through a
//! [`Permuter`], so tests can swap in a seeded stream without changing what
//! the algorithm does.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Performs uniform random shuffles.
pub trait Permuter {
    /// Reorders `items` into a uniformly random permutation.
    fn permute<T>(&mut self, items: &mut [T]);
}

impl<P: Permuter> Permuter for &mut P {
    fn permute<T>(&mut self, items: &mut [T]) {
        (**self).permute(items);
    }
}

/// Non-deterministic permuter backed by the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngPermuter;

impl Permuter for ThreadRngPermuter {
    fn permute<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut rand::thread_rng());
    }
}

/// Deterministic permuter: equal seeds yield identical shuffle streams.
#[derive(Debug, Clone)]
pub struct SeededPermuter {
    seed: u64,
    rng: ChaCha8Rng,
}

impl SeededPermuter {
    /// Creates a permuter from a seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// The seed this permuter was created with.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }
}

impl Permuter for SeededPermuter {
    fn permute<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_permuter_is_reproducible() {
        let mut a = SeededPermuter::new(42);
        let mut b = SeededPermuter::new(42);

        for _ in 0..16 {
            let mut left: Vec<u32> = (0..8).collect();
            let mut right = left.clone();
            a.permute(&mut left);
            b.permute(&mut right);
            assert_eq!(left, right);
        }
    }

    #[test]
    fn test_permute_keeps_elements() {
        let mut permuter = SeededPermuter::new(1);
        let mut items = vec![5, 3, 3, 9, 1];
        permuter.permute(&mut items);
        items.sort_unstable();
        assert_eq!(items, vec![1, 3, 3, 5, 9]);
    }

    #[test]
    fn test_permute_reaches_more_than_one_order() {
        let mut permuter = SeededPermuter::new(9);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..64 {
            let mut items = vec![1, 2, 3];
            permuter.permute(&mut items);
            seen.insert(items);
        }
        assert!(seen.len() > 1);
    }

    #[test]
    fn test_borrowed_permuter_advances_owner() {
        let mut owner = SeededPermuter::new(3);
        let mut reference = SeededPermuter::new(3);

        let mut first = vec![1, 2, 3, 4, 5, 6];
        (&mut owner).permute(&mut first);
        let mut expected = vec![1, 2, 3, 4, 5, 6];
        reference.permute(&mut expected);
        assert_eq!(first, expected);

        // The borrow consumed randomness from the owner, not from a copy.
        let mut second = vec![1, 2, 3, 4, 5, 6];
        owner.permute(&mut second);
        let mut expected_second = vec![1, 2, 3, 4, 5, 6];
        reference.permute(&mut expected_second);
        assert_eq!(second, expected_second);
    }

    #[test]
    fn test_thread_rng_permuter_keeps_elements() {
        let mut items = vec![4, 2, 7];
        ThreadRngPermuter.permute(&mut items);
        items.sort_unstable();
        assert_eq!(items, vec![2, 4, 7]);
    }

    #[test]
    fn test_seed_accessor() {
        assert_eq!(SeededPermuter::new(77).seed(), 77);
    }
}
