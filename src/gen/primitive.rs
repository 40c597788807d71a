//! Built-in generators for primitive values.
//!
//! These are the leaves that products are built from. Integers are drawn
//! within `[-size, size]` (clamped to the type), strings have at most `size`
//! characters, and every generator shrinks towards its simplest value.

use rand::Rng;
use std::fmt;

use super::Gen;
use crate::error::{GenError, GenResult};
use crate::shrink;
use crate::shrinkable::Shrinkable;

/// Integral types the built-in integer generators support
pub trait Integer: Copy + fmt::Debug + Send + Sync + 'static {
    const MIN: i128;
    const MAX: i128;

    /// Callers guarantee `value` lies within `MIN..=MAX`
    fn from_i128(value: i128) -> Self;
    fn to_i128(self) -> i128;
}

macro_rules! impl_integer {
    ($($t:ty),*) => {
        $(
            impl Integer for $t {
                const MIN: i128 = <$t>::MIN as i128;
                const MAX: i128 = <$t>::MAX as i128;

                fn from_i128(value: i128) -> Self {
                    value as $t
                }

                fn to_i128(self) -> i128 {
                    self as i128
                }
            }
        )*
    };
}

impl_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// The value in `min..=max` closest to zero
fn simplest(min: i128, max: i128) -> i128 {
    if min > 0 {
        min
    } else if max < 0 {
        max
    } else {
        0
    }
}

fn integer_tree<T: Integer>(value: i128, target: i128) -> Shrinkable<T> {
    Shrinkable::shrink_recur(value, move |v| shrink::towards(*v, target)).map(T::from_i128)
}

/// Integers in `[-size, size]`, clamped to the range of `T`
pub fn integer<T: Integer>() -> Gen<T> {
    Gen::new(|random, size| {
        let bound = size as i128;
        let min = T::MIN.max(-bound);
        let max = T::MAX.min(bound);
        let value = random.rng().gen_range(min..=max);
        integer_tree(value, simplest(min, max))
    })
}

/// Integers uniformly drawn from `min..=max` regardless of size
pub fn inclusive<T: Integer>(min: T, max: T) -> GenResult<Gen<T>> {
    let (min, max) = (min.to_i128(), max.to_i128());
    if min > max {
        return Err(GenError::InvalidRange { min, max });
    }
    let target = simplest(min, max);
    Ok(Gen::new(move |random, _| {
        let value = random.rng().gen_range(min..=max);
        integer_tree(value, target)
    }))
}

pub fn boolean() -> Gen<bool> {
    Gen::new(|random, _| {
        let value: bool = random.rng().gen();
        Shrinkable::shrink_recur(value, |v| shrink::boolean(*v))
    })
}

/// Printable ASCII characters, shrinking towards `'a'`
pub fn character() -> Gen<char> {
    Gen::new(|random, _| {
        let value = char::from(random.rng().gen_range(b' '..=b'~'));
        Shrinkable::shrink_recur(value, |c| shrink::character(*c))
    })
}

/// Printable ASCII strings of at most `size` characters
pub fn string() -> Gen<String> {
    Gen::new(|random, size| {
        let mut rng = random.rng();
        let len = rng.gen_range(0..=size);
        let value: String = (0..len)
            .map(|_| char::from(rng.gen_range(b' '..=b'~')))
            .collect();
        Shrinkable::shrink_recur(value, |s| shrink::string(s))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::Random;

    #[test]
    fn test_integer_respects_size() {
        for seed in 0..50 {
            let value = integer::<i32>().generate(&Random::new(seed), 10).value();
            assert!((-10..=10).contains(&value));
        }
        assert_eq!(integer::<i32>().generate(&Random::new(1), 0).value(), 0);
    }

    #[test]
    fn test_integer_clamps_to_type() {
        for seed in 0..50 {
            let value = integer::<u8>().generate(&Random::new(seed), 3).value();
            assert!(value <= 3);
        }
    }

    #[test]
    fn test_integer_shrinks_start_at_zero() {
        for seed in 0..20 {
            let tree = integer::<i64>().generate(&Random::new(seed), 100);
            match tree.shrinks().iter().next() {
                Some(first) => assert_eq!(first.value(), 0),
                None => assert_eq!(tree.value(), 0),
            }
        }
    }

    #[test]
    fn test_inclusive_range() {
        let gen = inclusive(5u16, 9u16).unwrap();
        for seed in 0..50 {
            let tree = gen.generate(&Random::new(seed), 0);
            assert!((5..=9).contains(&tree.value()));
            for shrink in tree.shrinks().iter() {
                assert!((5..tree.value()).contains(&shrink.value()));
            }
        }
    }

    #[test]
    fn test_inclusive_rejects_inverted_range() {
        assert_eq!(
            inclusive(3i8, -3i8).unwrap_err(),
            GenError::InvalidRange { min: 3, max: -3 }
        );
    }

    #[test]
    fn test_string_length_bounded_by_size() {
        for seed in 0..50 {
            let value = string().generate(&Random::new(seed), 8).value();
            assert!(value.chars().count() <= 8);
            assert!(value.chars().all(|c| (' '..='~').contains(&c)));
        }
    }

    #[test]
    fn test_boolean_shrinks_to_false() {
        for seed in 0..20 {
            let tree = boolean().generate(&Random::new(seed), 0);
            let shrinks: Vec<bool> = tree.shrinks().iter().map(|s| s.value()).collect();
            if tree.value() {
                assert_eq!(shrinks, vec![false]);
            } else {
                assert!(shrinks.is_empty());
            }
        }
    }
}
