//! Product generators
//!
//! `tuple((g0, g1, ..))` builds a generator for `(T0, T1, ..)` from one
//! generator per slot. Generation splits the incoming stream once per slot
//! (slot `i` always receives the `i`-th split) and passes the same size to
//! every component, so components are independent of each other and the
//! whole tuple is reproducible from the stream alone.
//!
//! ## Shrinking
//!
//! The product shrinks on a tuple of component trees. The immediate shrinks
//! of `(t0, .., tn)` are, in slot order, every tuple with exactly one slot
//! `i` replaced by one of `ti`'s immediate shrinks (in `ti`'s own order):
//!
//! ```text
//! (5, "hi")  ->  (4, "hi"), (3, "hi"), (5, "h")
//! ```
//!
//! This is a one-dimensional slice through the shrink space: its length is
//! the sum, not the product, of the components' shrink counts. Each candidate
//! shrinks again by the same rule, so a search that keeps accepting
//! candidates still reaches any combination of component shrinks, one slot
//! per step. Values are projected out of the tree of tuples node by node as
//! the search pulls them.
//!
//! Arities 0 through 12 are supported; the arity of the product is the arity
//! of the Rust tuple, so a mismatch between generators and slots cannot
//! compile.

use super::Gen;
use crate::seq::Seq;
use crate::shrinkable::Shrinkable;

/// A tuple of generators that can be combined into a product generator
pub trait IntoTupleGen {
    type Output: Clone + 'static;

    fn into_gen(self) -> Gen<Self::Output>;
}

/// Generator for the tuple of values produced by `gens`, one per slot
pub fn tuple<G: IntoTupleGen>(gens: G) -> Gen<G::Output> {
    gens.into_gen()
}

impl IntoTupleGen for () {
    type Output = ();

    /// The empty product: always `()`, never shrinks
    fn into_gen(self) -> Gen<()> {
        Gen::new(|_, _| Shrinkable::just(()))
    }
}

macro_rules! tuple_gen {
    ($arity:expr; $($idx:tt => $T:ident),+) => {
        impl<$($T: Clone + 'static),+> IntoTupleGen for ($(Gen<$T>,)+) {
            type Output = ($($T,)+);

            fn into_gen(self) -> Gen<Self::Output> {
                Gen::new(move |random, size| {
                    log::trace!("Generating {}-tuple at size {}", $arity, size);
                    let randoms = random.split_n($arity);
                    let trees = ($(self.$idx.generate(&randoms[$idx], size),)+);

                    Shrinkable::shrink_recur(trees, |trees: &($(Shrinkable<$T>,)+)| {
                        Seq::concat(vec![$(
                            {
                                let base = trees.clone();
                                trees.$idx.shrinks().map(move |shrink| {
                                    let mut next = base.clone();
                                    next.$idx = shrink;
                                    next
                                })
                            }
                        ),+])
                    })
                    .map(|trees| ($(trees.$idx.value(),)+))
                })
            }
        }
    };
}

tuple_gen!(1; 0 => A);
tuple_gen!(2; 0 => A, 1 => B);
tuple_gen!(3; 0 => A, 1 => B, 2 => C);
tuple_gen!(4; 0 => A, 1 => B, 2 => C, 3 => D);
tuple_gen!(5; 0 => A, 1 => B, 2 => C, 3 => D, 4 => E);
tuple_gen!(6; 0 => A, 1 => B, 2 => C, 3 => D, 4 => E, 5 => F);
tuple_gen!(7; 0 => A, 1 => B, 2 => C, 3 => D, 4 => E, 5 => F, 6 => G);
tuple_gen!(8; 0 => A, 1 => B, 2 => C, 3 => D, 4 => E, 5 => F, 6 => G, 7 => H);
tuple_gen!(9; 0 => A, 1 => B, 2 => C, 3 => D, 4 => E, 5 => F, 6 => G, 7 => H, 8 => I);
tuple_gen!(10; 0 => A, 1 => B, 2 => C, 3 => D, 4 => E, 5 => F, 6 => G, 7 => H, 8 => I, 9 => J);
tuple_gen!(11; 0 => A, 1 => B, 2 => C, 3 => D, 4 => E, 5 => F, 6 => G, 7 => H, 8 => I, 9 => J, 10 => K);
tuple_gen!(12; 0 => A, 1 => B, 2 => C, 3 => D, 4 => E, 5 => F, 6 => G, 7 => H, 8 => I, 9 => J, 10 => K, 11 => L);
