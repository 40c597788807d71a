//! Re-traversable lazy sequences
//!
//! A `Seq` holds a factory rather than a cursor: every call to `iter` builds
//! a fresh iterator from shared, immutable state. Two traversals therefore
//! observe the same elements in the same order, and abandoning a traversal
//! part-way needs no cleanup. Combinators wrap the factory and force nothing.

use std::fmt;
use std::rc::Rc;

type Factory<T> = dyn Fn() -> Box<dyn Iterator<Item = T>>;

pub struct Seq<T> {
    factory: Rc<Factory<T>>,
}

impl<T> Clone for Seq<T> {
    fn clone(&self) -> Self {
        Self {
            factory: Rc::clone(&self.factory),
        }
    }
}

impl<T: 'static> Seq<T> {
    /// Build a sequence from an iterator factory.
    ///
    /// The factory is called once per traversal and must build the same
    /// elements every time.
    pub fn from_fn<F, I>(factory: F) -> Self
    where
        F: Fn() -> I + 'static,
        I: Iterator<Item = T> + 'static,
    {
        Self {
            factory: Rc::new(move || Box::new(factory()) as Box<dyn Iterator<Item = T>>),
        }
    }

    pub fn empty() -> Self {
        Self::from_fn(std::iter::empty)
    }

    pub fn just(value: T) -> Self
    where
        T: Clone,
    {
        Self::from_fn(move || std::iter::once(value.clone()))
    }

    pub fn from_vec(values: Vec<T>) -> Self
    where
        T: Clone,
    {
        let values = Rc::new(values);
        Self::from_fn(move || {
            let values = Rc::clone(&values);
            (0..values.len()).map(move |i| values[i].clone())
        })
    }

    /// The infinite sequence `start, f(start), f(f(start)), ...`
    pub fn iterate<F>(start: T, f: F) -> Self
    where
        T: Clone,
        F: Fn(&T) -> T + 'static,
    {
        let f = Rc::new(f);
        Self::from_fn(move || {
            let f = Rc::clone(&f);
            std::iter::successors(Some(start.clone()), move |x| Some(f(x)))
        })
    }

    /// Every element of each sequence in turn, in argument order
    pub fn concat(seqs: Vec<Seq<T>>) -> Self {
        let seqs = Rc::new(seqs);
        Self::from_fn(move || {
            let seqs = Rc::clone(&seqs);
            (0..seqs.len()).flat_map(move |i| seqs[i].iter())
        })
    }

    pub fn map<U, F>(&self, f: F) -> Seq<U>
    where
        U: 'static,
        F: Fn(T) -> U + 'static,
    {
        let inner = self.clone();
        let f = Rc::new(f);
        Seq::from_fn(move || {
            let f = Rc::clone(&f);
            inner.iter().map(move |x| f(x))
        })
    }

    pub fn take(&self, n: usize) -> Self {
        let inner = self.clone();
        Self::from_fn(move || inner.iter().take(n))
    }

    /// Start a new traversal
    pub fn iter(&self) -> Box<dyn Iterator<Item = T>> {
        (self.factory)()
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Forces the whole sequence. Does not terminate on infinite sequences.
    pub fn count(&self) -> usize {
        self.iter().count()
    }

    /// Forces the whole sequence. Does not terminate on infinite sequences.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().collect()
    }
}

impl<T: 'static> Default for Seq<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<'a, T: 'static> IntoIterator for &'a Seq<T> {
    type Item = T;
    type IntoIter = Box<dyn Iterator<Item = T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> fmt::Debug for Seq<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Seq(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_empty_has_no_elements() {
        let seq: Seq<i32> = Seq::empty();
        assert!(seq.is_empty());
        assert_eq!(seq.count(), 0);
    }

    #[test]
    fn test_traversal_is_repeatable() {
        let seq = Seq::from_vec(vec![3, 1, 2]);
        assert_eq!(seq.to_vec(), vec![3, 1, 2]);
        assert_eq!(seq.to_vec(), vec![3, 1, 2]);

        let mut partial = seq.iter();
        assert_eq!(partial.next(), Some(3));
        drop(partial);
        assert_eq!(seq.to_vec(), vec![3, 1, 2]);
    }

    #[test]
    fn test_concat_preserves_argument_order() {
        let seq = Seq::concat(vec![
            Seq::from_vec(vec![1, 2]),
            Seq::empty(),
            Seq::just(3),
            Seq::from_vec(vec![4, 5]),
        ]);
        assert_eq!(seq.to_vec(), vec![1, 2, 3, 4, 5]);
        assert!(Seq::<u8>::concat(Vec::new()).is_empty());
    }

    #[test]
    fn test_map_is_lazy() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let seq = Seq::from_vec(vec![1, 2, 3]).map(move |x| {
            counter.set(counter.get() + 1);
            x * 10
        });
        assert_eq!(calls.get(), 0);

        assert_eq!(seq.iter().next(), Some(10));
        assert_eq!(calls.get(), 1);

        assert_eq!(seq.to_vec(), vec![10, 20, 30]);
        assert_eq!(calls.get(), 4);
    }

    #[test]
    fn test_infinite_sequences_are_pulled_on_demand() {
        let naturals = Seq::iterate(0u64, |x| x + 1);
        let doubled = Seq::concat(vec![naturals.map(|x| x * 2), Seq::just(1)]);
        assert_eq!(doubled.take(4).to_vec(), vec![0, 2, 4, 6]);
        assert_eq!(doubled.take(4).to_vec(), vec![0, 2, 4, 6]);
    }
}
