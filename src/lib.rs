//! # Conjecture Gen
//!
//! Generators and shrink trees for composite values.
//!
//! A [`Gen`] turns a splittable [`Random`] stream and a size into a
//! [`Shrinkable`]: a value plus a lazy, re-traversable [`Seq`] of simpler
//! candidates. Product generators ([`gen::tuple`], [`gen::pair`]) combine
//! independent component generators and derive the composite's shrinks from
//! the components' shrinks, one component at a time.
//!
//! ```rust
//! use conjecture_gen::{gen, Random};
//!
//! let gen = gen::tuple((gen::integer::<i32>(), gen::string()));
//! let tree = gen.generate(&Random::new(42), 10);
//! let (number, text) = tree.value();
//! assert!(number.abs() <= 10 && text.len() <= 10);
//! ```

pub mod config;
pub mod error;
pub mod gen;
pub mod random;
pub mod registry;
pub mod seq;
pub mod shrink;
pub mod shrinkable;

// Re-export core types for easy access
pub use config::GenConfig;
pub use error::{GenError, GenResult};
pub use gen::{pair, tuple, Gen, Pair};
pub use random::Random;
pub use registry::{arbitrary, Arbitrary, Registry};
pub use seq::Seq;
pub use shrinkable::Shrinkable;
