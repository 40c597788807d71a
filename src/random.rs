//! Splittable random streams
//!
//! A `Random` is an immutable 256-bit key. Splitting hashes the key together
//! with a branch tag, so the same stream always splits into the same children
//! and sibling streams share no state. Draws go through a ChaCha8 generator
//! seeded from the key, which keeps every generation call reproducible from
//! the seed alone.

use byteorder::{BigEndian, ByteOrder};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use sha2::{Digest, Sha256};
use std::fmt;

const LEFT: u64 = 0;
const RIGHT: u64 = 1;

/// A deterministic, splittable source of randomness
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Random {
    key: [u8; 32],
}

impl Random {
    /// Create a stream from a numeric seed
    pub fn new(seed: u64) -> Self {
        let mut buf = [0u8; 8];
        BigEndian::write_u64(&mut buf, seed);
        Self::from_digest(Sha256::digest(&buf).as_slice())
    }

    pub fn from_key(key: [u8; 32]) -> Self {
        Self { key }
    }

    pub fn key(&self) -> &[u8; 32] {
        &self.key
    }

    /// Split into two independent streams.
    ///
    /// Neither child equals the parent, and the children never equal each
    /// other for any key (distinct branch tags give distinct digests).
    pub fn split(&self) -> (Random, Random) {
        (self.derive(LEFT), self.derive(RIGHT))
    }

    /// Split into `n` independent streams, indexed in declaration order.
    ///
    /// Stream `i` is the right half of the `i`-th split of the running left
    /// half, so `split_n(n)` is always a prefix of `split_n(n + 1)`.
    pub fn split_n(&self, n: usize) -> Vec<Random> {
        let mut current = self.clone();
        let mut streams = Vec::with_capacity(n);
        for _ in 0..n {
            let (next, stream) = current.split();
            streams.push(stream);
            current = next;
        }
        streams
    }

    /// A fresh draw source positioned at the start of this stream
    pub fn rng(&self) -> ChaCha8Rng {
        ChaCha8Rng::from_seed(self.key)
    }

    fn derive(&self, branch: u64) -> Random {
        let mut tag = [0u8; 8];
        BigEndian::write_u64(&mut tag, branch);

        let mut hasher = Sha256::new();
        hasher.update(&self.key);
        hasher.update(&tag);
        Self::from_digest(hasher.finalize().as_slice())
    }

    fn from_digest(digest: &[u8]) -> Self {
        let mut key = [0u8; 32];
        key.copy_from_slice(digest);
        Self { key }
    }
}

impl fmt::Debug for Random {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Random(")?;
        for byte in &self.key[..8] {
            write!(f, "{:02x}", byte)?;
        }
        write!(f, "..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_same_seed_same_stream() {
        assert_eq!(Random::new(42), Random::new(42));
        assert_ne!(Random::new(42), Random::new(43));
    }

    #[test]
    fn test_split_is_deterministic() {
        let random = Random::new(7);
        assert_eq!(random.split(), random.split());
    }

    #[test]
    fn test_split_children_are_distinct() {
        let random = Random::new(7);
        let (left, right) = random.split();
        assert_ne!(left, right);
        assert_ne!(left, random);
        assert_ne!(right, random);
    }

    #[test]
    fn test_split_n_counts_and_prefixes() {
        let random = Random::new(1);
        assert!(random.split_n(0).is_empty());

        let three = random.split_n(3);
        let four = random.split_n(4);
        assert_eq!(three.len(), 3);
        assert_eq!(&four[..3], &three[..]);

        for i in 0..four.len() {
            for j in (i + 1)..four.len() {
                assert_ne!(four[i], four[j], "streams {} and {} collide", i, j);
            }
        }
    }

    #[test]
    fn test_split_n_follows_left_spine() {
        let random = Random::new(99);
        let (left, first) = random.split();
        let (_, second) = left.split();
        assert_eq!(random.split_n(2), vec![first, second]);
    }

    #[test]
    fn test_rng_replays_from_start() {
        let random = Random::new(5);
        let a: Vec<u64> = (0..8).map({
            let mut rng = random.rng();
            move |_| rng.gen()
        }).collect();
        let b: Vec<u64> = (0..8).map({
            let mut rng = random.rng();
            move |_| rng.gen()
        }).collect();
        assert_eq!(a, b);
    }
}
