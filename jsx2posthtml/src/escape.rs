//! Character escaping for text and attributes.
//!
//! Five characters are replaced by their named references; everything else
//! is copied through. Escaping is not idempotent: `&amp;` becomes
//! `&amp;amp;`. The builder escapes each raw value exactly once.

use crate::Stem;
use compact_str::CompactString;

/// Named character reference for `c`, if it needs escaping.
#[inline]
pub fn entity(c: char) -> Option<&'static str> {
    match c {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '"' => Some("&quot;"),
        '\'' => Some("&apos;"),
        _ => None,
    }
}

/// Escape `text` for use in HTML.
///
/// Returns `text` itself when there is nothing to replace, so borrowed
/// input stays borrowed.
pub fn escape(text: Stem<'_>) -> Stem<'_> {
    let Some(first) = text.find(|c| entity(c).is_some()) else {
        return text;
    };

    let mut out = CompactString::with_capacity(text.len() + 8);
    out.push_str(&text[..first]);
    for c in text[first..].chars() {
        match entity(c) {
            Some(reference) => out.push_str(reference),
            None => out.push(c),
        }
    }
    Stem::Owned(out)
}

/// Escape a borrowed string.
pub fn escape_str(text: &str) -> Stem<'_> {
    escape(Stem::Borrowed(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use facet_testhelpers::test;

    #[test]
    fn test_escapes_all_five() {
        assert_eq!(escape_str(r#"&<>"'"#), "&amp;&lt;&gt;&quot;&apos;");
    }

    #[test]
    fn test_safe_text_stays_borrowed() {
        let escaped = escape_str("Hello, world!");
        assert!(escaped.is_borrowed());
        assert_eq!(escaped, "Hello, world!");
    }

    #[test]
    fn test_not_idempotent() {
        let once = escape_str("&");
        let twice = escape(once.clone());
        assert_eq!(once, "&amp;");
        assert_eq!(twice, "&amp;amp;");
    }

    #[test]
    fn test_multibyte_text_around_escapes() {
        assert_eq!(escape_str("héllo <wörld>"), "héllo &lt;wörld&gt;");
    }

    #[test]
    fn test_no_angle_brackets_survive() {
        for input in ["<", ">>", "a<b>c", "<<<>>>", "</script>"] {
            let escaped = escape_str(input);
            assert!(!escaped.contains('<'), "{input:?} -> {escaped:?}");
            assert!(!escaped.contains('>'), "{input:?} -> {escaped:?}");
        }
    }
}
