//! PostHTML AST types produced by the builder.
//!
//! A [`Node`] mirrors the PostHTML object shape:
//!
//! ```text
//! { tag: "div", attrs?: { class: "foo" }, content?: ["Hi", { tag: "b" }] }
//! ```
//!
//! `attrs` and `content` are absent rather than empty when there is nothing
//! to put in them. Renderers treat a missing `content` as an empty element.

use crate::{Stem, Value};
#[cfg(feature = "json")]
use crate::{Error, Result};
use facet::Facet;
use indexmap::IndexMap;

/// Prepared (escaped and renamed) element attributes.
pub type AttrMap<'a> = IndexMap<Stem<'a>, Value<'a>>;

/// One element of the output tree.
#[derive(Debug, Clone, PartialEq, Facet)]
#[facet(skip_all_unless_truthy)]
pub struct Node<'a> {
    /// Tag name, exactly as given by the caller
    pub tag: Stem<'a>,
    /// Attributes; never `Some` of an empty map
    #[facet(default)]
    pub attrs: Option<AttrMap<'a>>,
    /// Child content; `None` when the element has no children at all
    #[facet(default)]
    #[facet(recursive_type)]
    pub content: Option<Vec<Content<'a>>>,
}

impl<'a> Node<'a> {
    /// Create a node with no attributes and no content.
    pub fn new(tag: impl Into<Stem<'a>>) -> Self {
        Self {
            tag: tag.into(),
            attrs: None,
            content: None,
        }
    }

    /// Attach attributes, dropping an empty map so `attrs` stays absent.
    pub fn with_attrs(mut self, attrs: AttrMap<'a>) -> Self {
        self.attrs = (!attrs.is_empty()).then_some(attrs);
        self
    }

    /// Attach content.
    pub fn with_content(mut self, content: Vec<Content<'a>>) -> Self {
        self.content = Some(content);
        self
    }

    /// Get a prepared attribute value.
    pub fn attr(&self, name: &str) -> Option<&Value<'a>> {
        self.attrs.as_ref().and_then(|attrs| attrs.get(name))
    }

    /// Content items, or an empty slice if there is no content.
    pub fn children(&self) -> &[Content<'a>] {
        self.content.as_deref().unwrap_or_default()
    }

    /// Whether the node has no content field.
    pub fn is_empty(&self) -> bool {
        self.content.is_none()
    }

    /// Concatenated text of this node and all descendants.
    ///
    /// Text is returned as stored, i.e. already escaped.
    pub fn text_content(&self) -> Stem<'static> {
        let mut out = String::new();
        self.collect_text(&mut out);
        out.into()
    }

    fn collect_text(&self, out: &mut String) {
        for child in self.children() {
            match child {
                Content::Text(t) => out.push_str(t),
                Content::Node(n) => n.collect_text(out),
                Content::Opaque(_) => {}
            }
        }
    }

    /// Serialize to PostHTML AST JSON.
    #[cfg(feature = "json")]
    pub fn to_json(&self) -> Result<String> {
        facet_json::to_string(self).map_err(|e| Error::Json {
            message: format!("{e:?}"),
        })
    }
}

/// One item of a node's `content`.
#[derive(Debug, Clone, PartialEq, Facet)]
#[facet(untagged)]
#[repr(u8)]
pub enum Content<'a> {
    /// Text, escaped unless it came from a raw-HTML wrapper
    Text(Stem<'a>),
    /// A nested element
    Node(#[facet(recursive_type)] Node<'a>),
    /// Anything else, left for the renderer to interpret
    Opaque(Value<'a>),
}

impl<'a> Content<'a> {
    pub fn as_node(&self) -> Option<&Node<'a>> {
        match self {
            Content::Node(n) => Some(n),
            _ => None,
        }
    }
}

/// Trusted markup inserted without escaping: the `{ __html }` wrapper.
#[derive(Debug, Clone, PartialEq, Eq, Facet)]
pub struct RawHtml<'a> {
    #[facet(rename = "__html")]
    pub html: Stem<'a>,
}

impl<'a> RawHtml<'a> {
    /// Name of the wrapper's single field.
    pub const KEY: &'static str = "__html";

    pub fn new(html: impl Into<Stem<'a>>) -> Self {
        Self { html: html.into() }
    }

    /// Recognize an object with a string `__html` entry.
    pub fn from_value(value: &Value<'a>) -> Option<Self> {
        match value.get(Self::KEY)? {
            Value::Str(html) => Some(Self::new(html.clone())),
            _ => None,
        }
    }

    /// The equivalent `{ __html: ... }` object.
    pub fn into_value(self) -> Value<'a> {
        [(Self::KEY, Value::Str(self.html))].into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use facet_testhelpers::test;

    #[test]
    fn test_empty_attrs_stay_absent() {
        let node = Node::new("div").with_attrs(AttrMap::new());
        assert_eq!(node.attrs, None);
        assert!(node.is_empty());
    }

    #[test]
    fn test_text_content_walks_descendants() {
        let node = Node::new("p").with_content(vec![
            Content::Text("Here is ".into()),
            Content::Node(Node::new("b").with_content(vec![Content::Text("bold".into())])),
            Content::Opaque(Value::from(3)),
            Content::Text(" text".into()),
        ]);
        assert_eq!(node.text_content(), "Here is bold text");
    }

    #[test]
    fn test_raw_html_from_value() {
        let wrapper = RawHtml::new("<b>x</b>").into_value();
        assert_eq!(RawHtml::from_value(&wrapper), Some(RawHtml::new("<b>x</b>")));

        let not_string: Value = [(RawHtml::KEY, 1)].into_iter().collect();
        assert_eq!(RawHtml::from_value(&not_string), None);
        assert_eq!(RawHtml::from_value(&Value::from("<b>")), None);
    }

    #[cfg(feature = "json")]
    #[test]
    fn test_to_json_omits_absent_fields() {
        assert_eq!(Node::new("div").to_json().unwrap(), r#"{"tag":"div"}"#);

        let node = Node::new("div").with_content(vec![Content::Text("<b>x</b>".into())]);
        assert_eq!(node.to_json().unwrap(), r#"{"tag":"div","content":["<b>x</b>"]}"#);
    }

    #[cfg(feature = "json")]
    #[test]
    fn test_to_json_nests_nodes_and_attrs() {
        let mut attrs = AttrMap::new();
        attrs.insert("class".into(), "foo".into());
        let node = Node::new("div").with_attrs(attrs).with_content(vec![
            Content::Node(Node::new("br")),
            Content::Opaque(Value::from(true)),
        ]);
        assert_eq!(
            node.to_json().unwrap(),
            r#"{"tag":"div","attrs":{"class":"foo"},"content":[{"tag":"br"},true]}"#
        );
    }
}
