//! Deep flattening of nested child lists.

use std::vec;

/// A leaf, or a list of further nesting.
///
/// This is how `items.map(...)` results end up inside a literal child list:
/// each level of brackets is a `List`.
#[derive(Debug, Clone, PartialEq)]
pub enum Nested<T> {
    Leaf(T),
    List(Vec<Nested<T>>),
}

impl<T> Nested<T> {
    /// An empty list, which contributes nothing once flattened.
    pub fn empty() -> Self {
        Nested::List(Vec::new())
    }
}

/// Collapse arbitrarily deep nesting into one flat list.
///
/// Leaves come out in depth-first, left-to-right order. Uses an explicit
/// stack of iterators, so nesting depth is bounded by memory rather than
/// by the call stack.
pub fn flatten<T>(items: impl IntoIterator<Item = Nested<T>>) -> Vec<T> {
    let mut out = Vec::new();
    let roots: Vec<Nested<T>> = items.into_iter().collect();
    let mut stack: Vec<vec::IntoIter<Nested<T>>> = vec![roots.into_iter()];

    while let Some(top) = stack.last_mut() {
        match top.next() {
            Some(Nested::Leaf(leaf)) => out.push(leaf),
            Some(Nested::List(list)) => stack.push(list.into_iter()),
            None => {
                stack.pop();
            }
        }
    }

    out
}
