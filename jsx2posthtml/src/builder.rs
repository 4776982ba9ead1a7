//! The `h` entry point.

use crate::attrs::prepare_attrs;
use crate::content::prepare_content_item;
use crate::flatten::{Nested, flatten};
use crate::{Attrs, Child, Component, Content, Error, Node, Props, Result, Stem, Value};
use std::fmt;

/// What to build: an element with this name, or whatever a component returns.
#[derive(Clone)]
pub enum Tag<'c, 'a> {
    Name(Stem<'a>),
    Component(&'c dyn Component<'a>),
}

impl<'c, 'a> Tag<'c, 'a> {
    pub fn name(name: impl Into<Stem<'a>>) -> Self {
        Tag::Name(name.into())
    }

    pub fn component(component: &'c impl Component<'a>) -> Self {
        Tag::Component(component)
    }

    /// Resolve a dynamic value: strings name elements, anything else is
    /// rejected.
    pub fn try_from_value(value: Value<'a>) -> Result<Self> {
        match value {
            Value::Str(name) => Ok(Tag::Name(name)),
            other => Err(Error::InvalidTagKind { kind: other.kind() }),
        }
    }
}

impl fmt::Debug for Tag<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tag::Name(name) => f.debug_tuple("Name").field(name).finish(),
            Tag::Component(_) => f.write_str("Component(..)"),
        }
    }
}

impl<'a> From<&'a str> for Tag<'_, 'a> {
    fn from(name: &'a str) -> Self {
        Tag::Name(Stem::from(name))
    }
}

impl From<String> for Tag<'_, '_> {
    fn from(name: String) -> Self {
        Tag::Name(Stem::from(name))
    }
}

impl<'a> From<Stem<'a>> for Tag<'_, 'a> {
    fn from(name: Stem<'a>) -> Self {
        Tag::Name(name)
    }
}

impl<'c, 'a> From<&'c dyn Component<'a>> for Tag<'c, 'a> {
    fn from(component: &'c dyn Component<'a>) -> Self {
        Tag::Component(component)
    }
}

impl<'a> TryFrom<Value<'a>> for Tag<'_, 'a> {
    type Error = Error;

    fn try_from(value: Value<'a>) -> Result<Self> {
        Tag::try_from_value(value)
    }
}

/// Build one node of the tree.
///
/// Children are flattened first. A component tag gets the attributes and
/// the flattened children as [`Props`] and its node is returned as-is.
/// Otherwise a node is built with prepared `attrs` and `content`:
///
/// - a raw-HTML override wins over children and is inserted unescaped;
/// - without one, every child is prepared in order;
/// - with neither, the node has no `content` at all.
pub fn h<'c, 'a: 'c, C>(
    tag: impl Into<Tag<'c, 'a>>,
    attrs: Option<Attrs<'a>>,
    children: impl IntoIterator<Item = C>,
) -> Node<'a>
where
    C: Into<Nested<Child<'a>>>,
{
    let children = flatten(children.into_iter().map(Into::into));

    match tag.into() {
        Tag::Component(component) => {
            debug!(children = children.len(), "delegating to component");
            component.render(Props::new(attrs.unwrap_or_default(), children))
        }
        Tag::Name(name) => build_node(name, attrs, children),
    }
}

fn build_node<'a>(tag: Stem<'a>, attrs: Option<Attrs<'a>>, children: Vec<Child<'a>>) -> Node<'a> {
    let mut node = Node::new(tag);
    let mut used_inner_html = false;

    if let Some(mut attrs) = attrs {
        if let Some(inner_html) = attrs.take_inner_html() {
            node.content = Some(vec![inner_html]);
            used_inner_html = true;
        }
        node.attrs = prepare_attrs(attrs);
    }

    if !used_inner_html && !children.is_empty() {
        node.content = Some(children.into_iter().map(prepare_content_item).collect());
    }

    trace!(
        tag = %node.tag,
        attrs = node.attrs.as_ref().map_or(0, |a| a.len()),
        content = node.children().len(),
        used_inner_html,
        "built node"
    );

    node
}

/// Variadic form of [`h`]: `h!(tag)`, `h!(tag, attrs)` or
/// `h!(tag, attrs, child, ...)`.
///
/// ```rust
/// use jsx2posthtml::{attrs, h};
///
/// let node = h!("div", Some(attrs! { "className" => "foo" }), "Hi", h!("br"));
/// assert_eq!(node.children().len(), 2);
/// ```
#[macro_export]
macro_rules! h {
    ($tag:expr $(,)?) => {
        $crate::h!($tag, None)
    };
    ($tag:expr, $attrs:expr $(,)?) => {
        $crate::h(
            $tag,
            $attrs,
            ::std::vec::Vec::<$crate::Nested<$crate::Child<'_>>>::new(),
        )
    };
    ($tag:expr, $attrs:expr, $($child:expr),+ $(,)?) => {
        $crate::h(
            $tag,
            $attrs,
            [$($crate::Nested::<$crate::Child<'_>>::from($child)),+],
        )
    };
}
