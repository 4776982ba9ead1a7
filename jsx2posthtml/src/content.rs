//! Children as given by the caller, and their preparation into content.

use crate::escape::escape;
use crate::flatten::Nested;
use crate::{Content, Node, RawHtml, Stem, Value};

/// One child after flattening, before escaping.
///
/// This is also what components see in `props.children`.
#[derive(Debug, Clone, PartialEq)]
pub enum Child<'a> {
    /// Text, escaped when it becomes content
    Text(Stem<'a>),
    /// An element built earlier
    Node(Node<'a>),
    /// Trusted markup, inserted unescaped
    RawHtml(RawHtml<'a>),
    /// Anything else: numbers, objects, ...
    Opaque(Value<'a>),
}

impl<'a> Child<'a> {
    /// Classify a dynamic value as a child.
    ///
    /// Strings are text and `{ __html: string }` objects are raw HTML.
    /// Everything else stays opaque until it is prepared. Arrays are not
    /// handled here; see the `From<Value>` impl for [`Nested`].
    pub fn from_value(value: Value<'a>) -> Self {
        match value {
            Value::Str(s) => Child::Text(s),
            other => match RawHtml::from_value(&other) {
                Some(raw) => Child::RawHtml(raw),
                None => Child::Opaque(other),
            },
        }
    }
}

/// Turn one flattened child into a content item.
///
/// Text is escaped and raw HTML is unwrapped as-is. Opaque values get the
/// same treatment by shape: a string is escaped, and an object with an
/// `__html` entry yields that entry. Everything else passes through.
pub fn prepare_content_item(child: Child<'_>) -> Content<'_> {
    match child {
        Child::Text(text) | Child::Opaque(Value::Str(text)) => Content::Text(escape(text)),
        Child::RawHtml(raw) => Content::Text(raw.html),
        Child::Node(node) => Content::Node(node),
        Child::Opaque(Value::Object(mut map)) => match map.swap_remove(RawHtml::KEY) {
            Some(inner) => raw_html_content(inner),
            None => Content::Opaque(Value::Object(map)),
        },
        Child::Opaque(value) => Content::Opaque(value),
    }
}

/// Content for the value of an `__html` entry: a string is inserted
/// unescaped, anything else is opaque.
pub(crate) fn raw_html_content(inner: Value<'_>) -> Content<'_> {
    match inner {
        Value::Str(html) => Content::Text(html),
        other => Content::Opaque(other),
    }
}

impl<'a> From<Child<'a>> for Nested<Child<'a>> {
    fn from(child: Child<'a>) -> Self {
        Nested::Leaf(child)
    }
}

impl<'a> From<&'a str> for Nested<Child<'a>> {
    fn from(s: &'a str) -> Self {
        Nested::Leaf(Child::Text(Stem::from(s)))
    }
}

impl<'a> From<&'a String> for Nested<Child<'a>> {
    fn from(s: &'a String) -> Self {
        Nested::Leaf(Child::Text(Stem::from(s.as_str())))
    }
}

impl From<String> for Nested<Child<'_>> {
    fn from(s: String) -> Self {
        Nested::Leaf(Child::Text(Stem::from(s)))
    }
}

impl<'a> From<Stem<'a>> for Nested<Child<'a>> {
    fn from(s: Stem<'a>) -> Self {
        Nested::Leaf(Child::Text(s))
    }
}

impl<'a> From<Node<'a>> for Nested<Child<'a>> {
    fn from(node: Node<'a>) -> Self {
        Nested::Leaf(Child::Node(node))
    }
}

impl<'a> From<RawHtml<'a>> for Nested<Child<'a>> {
    fn from(raw: RawHtml<'a>) -> Self {
        Nested::Leaf(Child::RawHtml(raw))
    }
}

/// Arrays nest; other values become a single child.
impl<'a> From<Value<'a>> for Nested<Child<'a>> {
    fn from(value: Value<'a>) -> Self {
        match value {
            Value::Array(items) => Nested::List(items.into_iter().map(Self::from).collect()),
            other => Nested::Leaf(Child::from_value(other)),
        }
    }
}

impl<'a> From<&Value<'a>> for Nested<Child<'a>> {
    fn from(value: &Value<'a>) -> Self {
        Nested::from(value.clone())
    }
}

impl From<bool> for Nested<Child<'_>> {
    fn from(b: bool) -> Self {
        Nested::Leaf(Child::Opaque(Value::Bool(b)))
    }
}

// Same `f64` rounding as the `Value` conversions.
macro_rules! number_child_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Nested<Child<'_>> {
                fn from(n: $ty) -> Self {
                    Nested::Leaf(Child::Opaque(Value::from(n)))
                }
            }
        )*
    };
}

number_child_from!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize, f32, f64);

/// `None` contributes nothing.
impl<'a, T: Into<Nested<Child<'a>>>> From<Option<T>> for Nested<Child<'a>> {
    fn from(child: Option<T>) -> Self {
        child.map_or_else(Nested::empty, Into::into)
    }
}

impl<'a, T: Into<Nested<Child<'a>>>> From<Vec<T>> for Nested<Child<'a>> {
    fn from(children: Vec<T>) -> Self {
        Nested::List(children.into_iter().map(Into::into).collect())
    }
}

impl<'a, T: Into<Nested<Child<'a>>>, const N: usize> From<[T; N]> for Nested<Child<'a>> {
    fn from(children: [T; N]) -> Self {
        Nested::List(children.into_iter().map(Into::into).collect())
    }
}
