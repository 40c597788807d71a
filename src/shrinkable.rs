//! Shrink trees
//!
//! A `Shrinkable<T>` is a value together with a lazy sequence of simpler
//! candidates, each of which is again a `Shrinkable<T>`. Children are only
//! built when a consumer pulls them, so trees whose full expansion would be
//! enormous (or infinite) cost nothing until explored.

use crate::seq::Seq;
use std::fmt;
use std::rc::Rc;

struct Node<T> {
    value: T,
    shrinks: Seq<Shrinkable<T>>,
}

pub struct Shrinkable<T> {
    node: Rc<Node<T>>,
}

impl<T> Clone for Shrinkable<T> {
    fn clone(&self) -> Self {
        Self {
            node: Rc::clone(&self.node),
        }
    }
}

impl<T: Clone + 'static> Shrinkable<T> {
    pub fn new(value: T, shrinks: Seq<Shrinkable<T>>) -> Self {
        Self {
            node: Rc::new(Node { value, shrinks }),
        }
    }

    /// A terminal node that cannot be simplified
    pub fn just(value: T) -> Self {
        Self::new(value, Seq::empty())
    }

    pub fn value(&self) -> T {
        self.node.value.clone()
    }

    pub fn value_ref(&self) -> &T {
        &self.node.value
    }

    pub fn shrinks(&self) -> Seq<Shrinkable<T>> {
        self.node.shrinks.clone()
    }

    /// Build the tree rooted at `value` whose children are given by `shrink`.
    ///
    /// Every node's children are `shrink` applied to that node's value, each
    /// wrapped by the same rule. `shrink` runs once per traversal of a node's
    /// children, never ahead of it.
    pub fn shrink_recur<F>(value: T, shrink: F) -> Self
    where
        F: Fn(&T) -> Seq<T> + 'static,
    {
        Self::recur(value, Rc::new(shrink))
    }

    fn recur(value: T, shrink: Rc<dyn Fn(&T) -> Seq<T>>) -> Self {
        let shrinks = {
            let value = value.clone();
            Seq::from_fn(move || {
                let rule = Rc::clone(&shrink);
                shrink(&value)
                    .map(move |candidate| Self::recur(candidate, Rc::clone(&rule)))
                    .iter()
            })
        };
        Self::new(value, shrinks)
    }

    /// Project every node of the tree through `f`.
    ///
    /// The root is projected immediately; each child is projected as it is
    /// pulled, so mapping then shrinking equals shrinking then mapping.
    pub fn map<U, F>(&self, f: F) -> Shrinkable<U>
    where
        U: Clone + 'static,
        F: Fn(T) -> U + 'static,
    {
        self.map_with(Rc::new(f))
    }

    fn map_with<U: Clone + 'static>(&self, f: Rc<dyn Fn(T) -> U>) -> Shrinkable<U> {
        let value = f(self.value());
        let shrinks = self
            .shrinks()
            .map(move |child| child.map_with(Rc::clone(&f)));
        Shrinkable::new(value, shrinks)
    }
}

impl<T: fmt::Debug> fmt::Debug for Shrinkable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shrinkable")
            .field("value", &self.node.value)
            .finish_non_exhaustive()
    }
}
