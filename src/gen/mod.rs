//! Generators
//!
//! A `Gen<T>` is a pure function from a random stream and a size to a shrink
//! tree of `T`. The same stream and size always give the same tree, so a
//! generator can be shared freely (including across threads) and any value it
//! produced can be reproduced from its seed.
//!
//! Composite generators are assembled from component generators: see
//! [`tuple`] for products and [`pair`] for the `Pair` adapter.

pub mod pair;
pub mod primitive;
pub mod tuple;

pub use pair::{pair, Pair};
pub use primitive::{boolean, character, inclusive, integer, string, Integer};
pub use tuple::{tuple, IntoTupleGen};

use std::fmt;
use std::sync::Arc;

use crate::config::GenConfig;
use crate::error::GenResult;
use crate::random::Random;
use crate::shrinkable::Shrinkable;

type GenFn<T> = dyn Fn(&Random, usize) -> Shrinkable<T> + Send + Sync;

pub struct Gen<T> {
    generator: Arc<GenFn<T>>,
}

impl<T> Clone for Gen<T> {
    fn clone(&self) -> Self {
        Self {
            generator: Arc::clone(&self.generator),
        }
    }
}

impl<T: Clone + 'static> Gen<T> {
    pub fn new<F>(generator: F) -> Self
    where
        F: Fn(&Random, usize) -> Shrinkable<T> + Send + Sync + 'static,
    {
        Self {
            generator: Arc::new(generator),
        }
    }

    /// Generate a shrink tree from `random` at `size`
    pub fn generate(&self, random: &Random, size: usize) -> Shrinkable<T> {
        (self.generator)(random, size)
    }

    /// Always `value`, with no shrinks
    pub fn just(value: T) -> Self
    where
        T: Send + Sync,
    {
        Self::new(move |_, _| Shrinkable::just(value.clone()))
    }

    pub fn map<U, F>(&self, f: F) -> Gen<U>
    where
        U: Clone + 'static,
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        let inner = self.clone();
        let f = Arc::new(f);
        Gen::new(move |random, size| {
            let f = Arc::clone(&f);
            inner.generate(random, size).map(move |value| f(value))
        })
    }

    /// Relabel the generated values as another type via `From`
    pub fn cast<U>(&self) -> Gen<U>
    where
        U: From<T> + Clone + 'static,
    {
        self.map(U::from)
    }

    /// Draw a single value at the configured seed and size
    pub fn sample(&self, config: &GenConfig) -> GenResult<T> {
        config.validate()?;
        log::debug!("Sampling with seed {} at size {}", config.seed, config.size);
        Ok(self.generate(&Random::new(config.seed), config.size).value())
    }

    /// Draw `count` values with sizes ramping from 0 up to `max_size`
    pub fn samples(&self, config: &GenConfig, count: usize) -> GenResult<Vec<T>> {
        config.validate()?;
        log::debug!(
            "Drawing {} samples with seed {} up to size {}",
            count,
            config.seed,
            config.max_size
        );
        let randoms = Random::new(config.seed).split_n(count);
        Ok(randoms
            .iter()
            .enumerate()
            .map(|(i, random)| {
                let size = (i as u128 * (config.max_size as u128 + 1) / count as u128) as usize;
                self.generate(random, size).value()
            })
            .collect())
    }
}

impl<T> fmt::Debug for Gen<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Gen<{}>", std::any::type_name::<T>())
    }
}
