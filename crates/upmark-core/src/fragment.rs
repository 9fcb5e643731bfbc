//! Typed inline text fragments.
//!
//! A fragment is a run of inline text tagged with the style it should be
//! rendered with. The splitting passes in the `upmark` crate produce
//! fragments; each fragment then maps one-to-one to a leaf node.

use crate::node::LeafNode;

/// The style of an inline text fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentKind {
    /// Unstyled text
    Plain,

    /// Strong emphasis (bold)
    Bold,

    /// Emphasis (italic)
    Italic,

    /// Inline code
    Code,

    /// Link with a destination URL
    Link,

    /// Image with a source URL
    Image,
}

/// A run of inline text tagged with its style.
///
/// Fragments are immutable values with structural equality: two fragments
/// are equal when text, kind, and url all match.
#[derive(Debug, Clone, PartialEq)]
pub struct TextFragment {
    /// The text content
    pub text: String,

    /// The style of this fragment
    pub kind: FragmentKind,

    /// Destination URL, carried by `Link` and `Image` fragments
    pub url: Option<String>,
}

impl TextFragment {
    /// Create a fragment without a URL
    pub fn new(text: &str, kind: FragmentKind) -> Self {
        Self {
            text: text.to_string(),
            kind,
            url: None,
        }
    }

    /// Create a plain (unstyled) fragment
    pub fn plain(text: &str) -> Self {
        Self::new(text, FragmentKind::Plain)
    }

    /// Create a fragment carrying a destination URL
    pub fn with_url(text: &str, kind: FragmentKind, url: &str) -> Self {
        Self {
            text: text.to_string(),
            kind,
            url: Some(url.to_string()),
        }
    }

    /// Adapt this fragment into a leaf node.
    ///
    /// Plain text becomes a raw leaf with no wrapping element. Styled
    /// fragments are wrapped in their element: `b`, `i`, `code`, an `a` with
    /// an `href` attribute, or an empty-bodied `img` with `src` and `alt`
    /// attributes. A missing URL on a `Link` or `Image` fragment renders as
    /// an empty attribute value.
    pub fn to_leaf(&self) -> LeafNode {
        match self.kind {
            FragmentKind::Plain => LeafNode::raw(&self.text),
            FragmentKind::Bold => LeafNode::new("b", &self.text),
            FragmentKind::Italic => LeafNode::new("i", &self.text),
            FragmentKind::Code => LeafNode::new("code", &self.text),
            FragmentKind::Link => LeafNode::with_props(
                "a",
                &self.text,
                vec![("href", self.url.as_deref().unwrap_or_default())],
            ),
            FragmentKind::Image => LeafNode::with_props(
                "img",
                "",
                vec![
                    ("src", self.url.as_deref().unwrap_or_default()),
                    ("alt", &self.text),
                ],
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_URL: &str = "https://example.com";

    #[test]
    fn test_eq() {
        let a = TextFragment::new("This is a text fragment", FragmentKind::Bold);
        let b = TextFragment::new("This is a text fragment", FragmentKind::Bold);
        assert_eq!(a, b);
    }

    #[test]
    fn test_not_eq_kind() {
        let a = TextFragment::new("This is a text fragment", FragmentKind::Bold);
        let b = TextFragment::new("This is a text fragment", FragmentKind::Italic);
        assert_ne!(a, b);
    }

    #[test]
    fn test_not_eq_url() {
        let a = TextFragment::new("This is a text fragment", FragmentKind::Bold);
        let b = TextFragment::with_url("This is a text fragment", FragmentKind::Bold, TEST_URL);
        assert_ne!(a, b);
    }

    #[test]
    fn test_plain_to_leaf() {
        let leaf = TextFragment::plain("Normal text").to_leaf();
        assert_eq!(leaf.tag, None);
        assert_eq!(leaf.value.as_deref(), Some("Normal text"));
        assert_eq!(leaf.props, None);
        assert_eq!(leaf.to_html().unwrap(), "Normal text");
    }

    #[test]
    fn test_bold_to_leaf() {
        let leaf = TextFragment::new("Bold text", FragmentKind::Bold).to_leaf();
        assert_eq!(leaf.tag.as_deref(), Some("b"));
        assert_eq!(leaf.value.as_deref(), Some("Bold text"));
        assert_eq!(leaf.to_html().unwrap(), "<b>Bold text</b>");
    }

    #[test]
    fn test_italic_to_leaf() {
        let leaf = TextFragment::new("italic text", FragmentKind::Italic).to_leaf();
        assert_eq!(leaf.to_html().unwrap(), "<i>italic text</i>");
    }

    #[test]
    fn test_code_to_leaf() {
        let leaf = TextFragment::new("let x = 1;", FragmentKind::Code).to_leaf();
        assert_eq!(leaf.to_html().unwrap(), "<code>let x = 1;</code>");
    }

    #[test]
    fn test_link_to_leaf() {
        let leaf = TextFragment::with_url("Click me!", FragmentKind::Link, TEST_URL).to_leaf();
        assert_eq!(leaf.tag.as_deref(), Some("a"));
        assert_eq!(leaf.value.as_deref(), Some("Click me!"));
        assert_eq!(
            leaf.props.as_ref().and_then(|p| p.get("href")).map(String::as_str),
            Some(TEST_URL)
        );
        assert_eq!(
            leaf.to_html().unwrap(),
            "<a href=\"https://example.com\">Click me!</a>"
        );
    }

    #[test]
    fn test_image_to_leaf() {
        let leaf =
            TextFragment::with_url("A cat", FragmentKind::Image, "https://example.com/cat.png")
                .to_leaf();
        assert_eq!(leaf.tag.as_deref(), Some("img"));
        assert_eq!(leaf.value.as_deref(), Some(""));
        let props = leaf.props.as_ref().unwrap();
        assert_eq!(props.get("src").map(String::as_str), Some("https://example.com/cat.png"));
        assert_eq!(props.get("alt").map(String::as_str), Some("A cat"));
    }

    #[test]
    fn test_link_without_url() {
        let leaf = TextFragment::new("dangling", FragmentKind::Link).to_leaf();
        assert_eq!(leaf.to_html().unwrap(), "<a href=\"\">dangling</a>");
    }
}
