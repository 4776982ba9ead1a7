//! Functional components.

use crate::{Attrs, Child, Node, Stem, Value};

/// Name under which children are handed to a component.
pub const CHILDREN_KEY: &str = "children";

/// The single argument a component receives.
///
/// `attrs` are exactly what the caller passed (nothing is escaped yet) and
/// `children` are flattened but not prepared: escaping happens when the
/// component hands them back to [`h`](crate::h).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Props<'a> {
    pub attrs: Attrs<'a>,
    pub children: Vec<Child<'a>>,
}

impl<'a> Props<'a> {
    /// Combine attributes and children. An attribute named `children` is
    /// shadowed by the real children.
    pub fn new(mut attrs: Attrs<'a>, children: Vec<Child<'a>>) -> Self {
        if attrs.remove(CHILDREN_KEY).is_some() {
            debug!("children attribute shadowed by component children");
        }
        Self { attrs, children }
    }

    /// Get a prop value.
    pub fn get(&self, name: &str) -> Option<&Value<'a>> {
        self.attrs.get(name)
    }

    /// Get a string prop.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }

    /// Get a string prop as a [`Stem`], cloned out of the props.
    pub fn stem(&self, name: &str) -> Option<Stem<'a>> {
        match self.get(name)? {
            Value::Str(s) => Some(s.clone()),
            _ => None,
        }
    }

    /// Take the children, leaving none behind.
    pub fn take_children(&mut self) -> Vec<Child<'a>> {
        std::mem::take(&mut self.children)
    }
}

/// A function from props to a node.
///
/// Implemented for every `Fn(Props) -> Node`. Wrap a function that takes no
/// arguments in [`Thunk`].
pub trait Component<'a> {
    fn render(&self, props: Props<'a>) -> Node<'a>;
}

impl<'a, F> Component<'a> for F
where
    F: Fn(Props<'a>) -> Node<'a>,
{
    fn render(&self, props: Props<'a>) -> Node<'a> {
        self(props)
    }
}

/// A component that ignores its props.
#[derive(Debug, Clone, Copy)]
pub struct Thunk<F>(pub F);

impl<'a, F> Component<'a> for Thunk<F>
where
    F: Fn() -> Node<'a>,
{
    fn render(&self, _props: Props<'a>) -> Node<'a> {
        (self.0)()
    }
}
