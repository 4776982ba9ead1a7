//! Attributes as given by the caller, and their preparation for the tree.

use crate::content::raw_html_content;
use crate::escape::escape;
use crate::node::AttrMap;
use crate::{Content, RawHtml, Stem, Value};
use indexmap::IndexMap;

/// Reserved attribute carrying a raw-HTML override for the element's content.
pub const INNER_HTML_KEY: &str = "dangerouslySetInnerHTML";

/// Attribute names that are renamed to their DOM spelling.
pub const DOM_ATTRIBUTES: [(&str, &str); 2] = [("className", "class"), ("htmlFor", "for")];

/// DOM name for a JSX-style attribute alias.
pub fn dom_attr_name(name: &str) -> Option<&'static str> {
    DOM_ATTRIBUTES
        .iter()
        .find(|(alias, _)| *alias == name)
        .map(|(_, dom)| *dom)
}

/// Raw element attributes in insertion order.
///
/// The reserved `dangerouslySetInnerHTML` entry never sits among the
/// regular entries: it is kept apart as the content item that replaces the
/// element's children.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attrs<'a> {
    entries: IndexMap<Stem<'a>, Value<'a>>,
    inner_html: Option<Content<'a>>,
}

impl<'a> Attrs<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`Attrs::insert`].
    pub fn with(mut self, name: impl Into<Stem<'a>>, value: impl Into<Value<'a>>) -> Self {
        self.insert(name, value);
        self
    }

    /// Builder-style [`Attrs::set_inner_html`].
    pub fn dangerously_set_inner_html(mut self, html: impl Into<Stem<'a>>) -> Self {
        self.set_inner_html(Some(RawHtml::new(html)));
        self
    }

    /// Set an attribute. Later values replace earlier ones in place.
    ///
    /// Under the reserved key, an object with an `__html` entry sets the
    /// override, read the same way as a `{ __html }` child: a string is
    /// inserted unescaped, anything else is opaque. Any other value clears
    /// it.
    pub fn insert(&mut self, name: impl Into<Stem<'a>>, value: impl Into<Value<'a>>) {
        let name = name.into();
        let value = value.into();

        if name == INNER_HTML_KEY {
            self.inner_html = value.get(RawHtml::KEY).cloned().map(raw_html_content);
            if self.inner_html.is_none() && value.is_truthy() {
                warn!(kind = value.kind(), "ignoring {INNER_HTML_KEY} without an __html entry");
            }
            return;
        }

        self.entries.insert(name, value);
    }

    pub fn set_inner_html(&mut self, raw: Option<RawHtml<'a>>) {
        self.inner_html = raw.map(|raw| Content::Text(raw.html));
    }

    /// The content override, if one was set.
    pub fn inner_html(&self) -> Option<&Content<'a>> {
        self.inner_html.as_ref()
    }

    pub fn take_inner_html(&mut self) -> Option<Content<'a>> {
        self.inner_html.take()
    }

    /// Get a regular attribute value.
    pub fn get(&self, name: &str) -> Option<&Value<'a>> {
        self.entries.get(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<Value<'a>> {
        self.entries.shift_remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of regular attributes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when there are neither regular attributes nor an override.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.inner_html.is_none()
    }

    /// Iterate over regular attributes in order.
    pub fn iter(&self) -> impl Iterator<Item = (&Stem<'a>, &Value<'a>)> {
        self.entries.iter()
    }
}

impl<'a, K: Into<Stem<'a>>, V: Into<Value<'a>>> FromIterator<(K, V)> for Attrs<'a> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Self::new();
        for (name, value) in iter {
            attrs.insert(name, value);
        }
        attrs
    }
}

impl<'a, K: Into<Stem<'a>>, V: Into<Value<'a>>, const N: usize> From<[(K, V); N]> for Attrs<'a> {
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

/// Prepare attributes for the tree.
///
/// Aliases are renamed, every other name is escaped like text, and string
/// values are escaped. Non-string values pass through untouched. The
/// raw-HTML override is not an attribute and is ignored here. Returns
/// `None` when nothing is left, so the node gets no `attrs` at all.
pub fn prepare_attrs(attrs: Attrs<'_>) -> Option<AttrMap<'_>> {
    if attrs.entries.is_empty() {
        return None;
    }

    let mut prepared = AttrMap::with_capacity(attrs.entries.len());
    for (name, value) in attrs.entries {
        let name = match dom_attr_name(&name) {
            Some(dom) => Stem::Borrowed(dom),
            None => escape(name),
        };
        let value = match value {
            Value::Str(s) => Value::Str(escape(s)),
            other => other,
        };
        prepared.insert(name, value);
    }

    Some(prepared)
}

/// Build [`Attrs`] from `name => value` pairs.
///
/// ```rust
/// use jsx2posthtml::attrs;
///
/// let attrs = attrs! { "className" => "foo", "tabindex" => 1 };
/// assert_eq!(attrs.len(), 2);
/// ```
#[macro_export]
macro_rules! attrs {
    () => {
        $crate::Attrs::new()
    };
    ($($name:expr => $value:expr),+ $(,)?) => {
        $crate::Attrs::new()$(.with($name, $value))+
    };
}
