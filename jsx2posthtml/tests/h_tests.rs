// =============================================================================
// Tests
// =============================================================================

use jsx2posthtml::{AttrMap, Attrs, Child, Content, Nested, Node, RawHtml, Value, attrs, h};

fn text(s: &str) -> Content<'_> {
    Content::Text(s.into())
}

fn node<'a>(tag: &'a str, content: Vec<Content<'a>>) -> Content<'a> {
    Content::Node(Node::new(tag).with_content(content))
}

fn class<'a>(value: &'a str) -> AttrMap<'a> {
    let mut attrs = AttrMap::new();
    attrs.insert("class".into(), value.into());
    attrs
}

#[test]
fn test_converts_to_posthtml_ast() {
    let items = ["one", "two", "three"];

    let tree = h!(
        "div",
        Some(attrs! { "class" => "foo" }),
        h!("h1", None, "Hi!"),
        h!("p", None, "Here is a list of ", items.len(), " items:"),
        h!(
            "ul",
            None,
            items.iter().map(|item| h!("li", None, *item)).collect::<Vec<_>>()
        ),
    );

    let expected = Node::new("div").with_attrs(class("foo")).with_content(vec![
        node("h1", vec![text("Hi!")]),
        node(
            "p",
            vec![
                text("Here is a list of "),
                Content::Opaque(Value::Number(3.0)),
                text(" items:"),
            ],
        ),
        node(
            "ul",
            vec![
                node("li", vec![text("one")]),
                node("li", vec![text("two")]),
                node("li", vec![text("three")]),
            ],
        ),
    ]);

    assert_eq!(tree, expected);
}

#[test]
fn test_sanitizes_children() {
    let tree = h!(
        "div",
        None,
        "<strong>blocked</strong>",
        h!("em", None, "allowed")
    );

    assert_eq!(
        tree.children(),
        [
            text("&lt;strong&gt;blocked&lt;/strong&gt;"),
            node("em", vec![text("allowed")]),
        ]
    );
}

#[test]
fn test_allows_dangerously_set_inner_html() {
    let tree = h!(
        "div",
        Some(Attrs::new().dangerously_set_inner_html("<strong>allowed</strong>"))
    );

    assert_eq!(
        tree,
        Node::new("div").with_content(vec![text("<strong>allowed</strong>")])
    );
}

#[test]
fn test_allows_raw_html_as_child() {
    let tree = h!(
        "div",
        None,
        "<strong>blocked</strong>",
        RawHtml::new("<strong>allowed</strong>"),
        h!("em", None, "allowed")
    );

    assert_eq!(
        tree.children(),
        [
            text("&lt;strong&gt;blocked&lt;/strong&gt;"),
            text("<strong>allowed</strong>"),
            node("em", vec![text("allowed")]),
        ]
    );
}

#[test]
fn test_raw_html_object_value_as_child() {
    let wrapper: Value = [("__html", "<i>ok</i>")].into_iter().collect();
    let tree = h!("div", None, wrapper);
    assert_eq!(tree.children(), [text("<i>ok</i>")]);
}

#[test]
fn test_leaves_unknown_objects_as_is() {
    let object: Value = [("should", "be object")].into_iter().collect();

    let tree = h!(
        "div",
        None,
        h!("em", None, "element"),
        object.clone(),
        1,
        "string"
    );

    assert_eq!(
        tree.children(),
        [
            node("em", vec![text("element")]),
            Content::Opaque(object),
            Content::Opaque(Value::Number(1.0)),
            text("string"),
        ]
    );
}

#[test]
fn test_hand_built_opaque_children_are_prepared_by_shape() {
    let wrapper = RawHtml::new("<i>ok</i>").into_value();
    let tree = h!(
        "div",
        None,
        Child::Opaque(Value::from("<script>")),
        Child::Opaque(wrapper)
    );

    assert_eq!(tree.children(), [text("&lt;script&gt;"), text("<i>ok</i>")]);
}

#[test]
fn test_sanitizes_attributes() {
    let tree = h!("div", Some(attrs! { "data-some" => r#"&<>"'"# }));

    let mut expected = AttrMap::new();
    expected.insert("data-some".into(), "&amp;&lt;&gt;&quot;&apos;".into());
    assert_eq!(tree, Node::new("div").with_attrs(expected));
}

#[test]
fn test_flattens_children() {
    // {[['a', 'c']]} <b>d</b> {['e', ['f'], [['g']]]}
    let first: Nested<Child> = vec![vec!["a", "c"]].into();
    let last: Vec<Nested<Child>> = vec![
        "e".into(),
        vec!["f"].into(),
        vec![vec!["g"]].into(),
    ];

    let tree = h!("div", None, first, h!("b", None, "d"), last);

    assert_eq!(
        tree.children(),
        [
            text("a"),
            text("c"),
            node("b", vec![text("d")]),
            text("e"),
            text("f"),
            text("g"),
        ]
    );
}

#[test]
fn test_void_tags_are_not_special() {
    let tags = [
        "area", "base", "br", "col", "embed", "hr", "img", "input", "keygen", "link", "meta",
        "param", "source", "track", "wbr", "div", "span", "p",
    ];

    let tree = h!(
        "div",
        None,
        tags.iter().map(|tag| h!(*tag)).collect::<Vec<_>>()
    );

    let content = tree.content.as_ref().expect("div has children");
    assert_eq!(content.len(), tags.len());
    for (item, tag) in content.iter().zip(tags) {
        assert_eq!(item, &Content::Node(Node::new(tag)));
    }
}

#[test]
fn test_handles_special_prop_names() {
    let tree = h!(
        "div",
        Some(attrs! { "className" => "my-class", "htmlFor" => "id" })
    );

    let attrs = tree.attrs.as_ref().expect("attrs present");
    let names: Vec<&str> = attrs.keys().map(|k| k.as_str()).collect();
    assert_eq!(names, ["class", "for"]);
    assert_eq!(tree.attr("class"), Some(&Value::from("my-class")));
    assert_eq!(tree.attr("for"), Some(&Value::from("id")));
}

#[test]
fn test_owned_text_is_escaped_once() {
    let label = format!("{} & {}", "this", "that");
    let tree = h!("span", None, label);
    assert_eq!(tree.children(), [text("this &amp; that")]);
    assert_eq!(tree.text_content(), "this &amp; that");
}

#[cfg(feature = "json")]
#[test]
fn test_json_export_leaves_out_absent_fields() {
    assert_eq!(h!("div").to_json().unwrap(), r#"{"tag":"div"}"#);

    let tree = h!(
        "div",
        Some(Attrs::new().dangerously_set_inner_html("<b>x</b>")),
        "ignored"
    );
    assert_eq!(tree.to_json().unwrap(), r#"{"tag":"div","content":["<b>x</b>"]}"#);

    let tree = h!("div", Some(attrs! { "className" => "foo" }), h!("h1", None, "Hi!"));
    assert_eq!(
        tree.to_json().unwrap(),
        r#"{"tag":"div","attrs":{"class":"foo"},"content":[{"tag":"h1","content":["Hi!"]}]}"#
    );
}
