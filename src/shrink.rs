//! Value-level shrink candidates for the built-in generators.
//!
//! Each function returns the immediate simplifications of a single value,
//! simplest first. Wrapping one of these with `Shrinkable::shrink_recur`
//! yields the full shrink tree.

use crate::seq::Seq;
use std::rc::Rc;

/// Candidates moving `value` towards `target`: the target itself first,
/// then values at half, a quarter, ... of the remaining distance.
pub fn towards(value: i128, target: i128) -> Seq<i128> {
    let diff = value - target;
    Seq::from_fn(move || {
        std::iter::successors(Some(diff), |d| Some(d / 2))
            .take_while(|d| *d != 0)
            .map(move |d| value - d)
    })
}

pub fn boolean(value: bool) -> Seq<bool> {
    if value {
        Seq::just(false)
    } else {
        Seq::empty()
    }
}

/// Every single-element removal, in index order
pub fn remove_each<T: Clone + 'static>(items: Vec<T>) -> Seq<Vec<T>> {
    let items = Rc::new(items);
    Seq::from_fn(move || {
        let items = Rc::clone(&items);
        (0..items.len()).map(move |skip| {
            items
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != skip)
                .map(|(_, item)| item.clone())
                .collect()
        })
    })
}

pub fn character(c: char) -> Seq<char> {
    towards(c as i128, 'a' as i128).map(|code| {
        // Every candidate lies between 'a' and `c`, both valid scalar values,
        // but the range may straddle the surrogate gap.
        std::char::from_u32(code as u32).unwrap_or('a')
    })
}

/// Shorter strings first (one character removed), then strings with a
/// single character simplified in place.
pub fn string(s: &str) -> Seq<String> {
    let chars: Vec<char> = s.chars().collect();
    let removals = remove_each(chars.clone()).map(|cs| cs.into_iter().collect::<String>());

    let chars = Rc::new(chars);
    let per_char: Vec<Seq<String>> = (0..chars.len())
        .map(|index| {
            let chars = Rc::clone(&chars);
            character(chars[index]).map(move |replacement| {
                let mut next = (*chars).clone();
                next[index] = replacement;
                next.into_iter().collect::<String>()
            })
        })
        .collect();

    Seq::concat(vec![removals, Seq::concat(per_char)])
}
