//! PostHTML AST trees from HyperScript calls.
//!
//! jsx2posthtml provides:
//! - **`h`**: turns a tag, attributes and nested children into a [`Node`]
//! - **Escaping**: text and attribute values are escaped on the way in,
//!   unless wrapped in [`RawHtml`]
//! - **Components**: plain functions from [`Props`] to a [`Node`]
//!
//! # Example
//!
//! ```rust
//! use jsx2posthtml::{Content, Node, Props, Tag, attrs, h};
//!
//! fn item<'a>(props: Props<'a>) -> Node<'a> {
//!     h!("li", None, props.get("name"), props.children)
//! }
//!
//! let names = ["one", "two"];
//! let list = h!(
//!     "ul",
//!     Some(attrs! { "className" => "items" }),
//!     names
//!         .iter()
//!         .map(|name| h!(Tag::component(&item), Some(attrs! { "name" => *name }), "!"))
//!         .collect::<Vec<_>>(),
//! );
//!
//! assert_eq!(list.attrs.as_ref().unwrap().get("class").unwrap().as_str(), Some("items"));
//! assert_eq!(list.children().len(), 2);
//! assert_eq!(
//!     list.children()[0].as_node().unwrap().children(),
//!     [Content::Text("one".into()), Content::Text("!".into())]
//! );
//! ```

#[macro_use]
mod tracing_macros;

pub mod attrs;
mod builder;
pub mod component;
pub mod content;
mod error;
pub mod escape;
pub mod flatten;
pub mod node;
mod stem;
pub mod value;

pub use attrs::{Attrs, prepare_attrs};
pub use builder::{Tag, h};
pub use component::{Component, Props, Thunk};
pub use content::{Child, prepare_content_item};
pub use error::{Error, Result};
pub use escape::{escape, escape_str};
pub use flatten::{Nested, flatten};
pub use node::{AttrMap, Content, Node, RawHtml};
pub use stem::Stem;
pub use value::Value;
