//! Ordered pairs as a relabelled 2-tuple product.

use serde::{Deserialize, Serialize};

use super::{tuple, Gen};

/// An ordered pair with named fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Pair<A, B> {
    pub first: A,
    pub second: B,
}

impl<A, B> Pair<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A, B> From<(A, B)> for Pair<A, B> {
    fn from((first, second): (A, B)) -> Self {
        Self { first, second }
    }
}

impl<A, B> From<Pair<A, B>> for (A, B) {
    fn from(pair: Pair<A, B>) -> Self {
        (pair.first, pair.second)
    }
}

/// Pairs drawn exactly as the 2-tuple product of `first` and `second`.
///
/// Shrinking is the product's: all shrinks of `first` before any of
/// `second`.
pub fn pair<A, B>(first: Gen<A>, second: Gen<B>) -> Gen<Pair<A, B>>
where
    A: Clone + 'static,
    B: Clone + 'static,
{
    tuple((first, second)).cast()
}
