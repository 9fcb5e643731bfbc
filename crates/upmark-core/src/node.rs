//! HTML node tree and rendering.
//!
//! Two node variants make up the render tree: a leaf holding literal
//! content, optionally wrapped in one element, and a parent wrapping an
//! ordered sequence of children. Both render to an HTML string.

use indexmap::IndexMap;

use crate::{RenderError, Result};

/// Attribute name/value pairs rendered onto an element, in insertion order.
pub type Props = IndexMap<String, String>;

/// A node in the render tree
#[derive(Debug, Clone, PartialEq)]
pub enum HtmlNode {
    /// Terminal node holding literal content
    Leaf(LeafNode),

    /// Container wrapping an ordered sequence of children
    Parent(ParentNode),
}

impl HtmlNode {
    /// Render this node to an HTML string
    pub fn to_html(&self) -> Result<String> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.to_html(),
            HtmlNode::Parent(parent) => parent.to_html(),
        }
    }
}

impl From<LeafNode> for HtmlNode {
    fn from(node: LeafNode) -> Self {
        HtmlNode::Leaf(node)
    }
}

impl From<ParentNode> for HtmlNode {
    fn from(node: ParentNode) -> Self {
        HtmlNode::Parent(node)
    }
}

/// A leaf in the render tree.
///
/// A leaf with no tag renders its value verbatim, with no wrapping element;
/// this is how plain inline text reaches the output untouched. A leaf with
/// no value is a usage error surfaced at render time.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LeafNode {
    /// Wrapping element name, or `None` to render the value verbatim
    pub tag: Option<String>,

    /// Literal content
    pub value: Option<String>,

    /// Element attributes
    pub props: Option<Props>,
}

impl LeafNode {
    /// Create a leaf wrapped in an element
    pub fn new(tag: &str, value: &str) -> Self {
        Self {
            tag: Some(tag.to_string()),
            value: Some(value.to_string()),
            props: None,
        }
    }

    /// Create a raw leaf with no wrapping element
    pub fn raw(value: &str) -> Self {
        Self {
            tag: None,
            value: Some(value.to_string()),
            props: None,
        }
    }

    /// Create a leaf with attributes
    pub fn with_props(tag: &str, value: &str, props: Vec<(&str, &str)>) -> Self {
        Self {
            tag: Some(tag.to_string()),
            value: Some(value.to_string()),
            props: Some(collect_props(props)),
        }
    }

    /// Render this leaf to an HTML string.
    ///
    /// Fails if the value is absent. Attribute values and content are
    /// emitted verbatim, with no escaping: the caller supplies already-safe
    /// strings.
    pub fn to_html(&self) -> Result<String> {
        let value = self.value.as_deref().ok_or(RenderError::MissingValue)?;

        let Some(tag) = self.tag.as_deref() else {
            return Ok(value.to_string());
        };

        let props = props_to_html(self.props.as_ref());
        let mut output = String::with_capacity(value.len() + tag.len() * 2 + props.len() + 6);
        output.push('<');
        output.push_str(tag);
        if !props.is_empty() {
            output.push(' ');
            output.push_str(&props);
        }
        output.push('>');
        output.push_str(value);
        output.push_str("</");
        output.push_str(tag);
        output.push('>');
        Ok(output)
    }
}

/// A container in the render tree.
///
/// Children are exclusively owned, so the structure is always a tree. Both
/// the tag and the child sequence must be present at render time. An empty
/// child sequence is valid and renders as an empty element; an absent one is
/// a usage error.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParentNode {
    /// Element name
    pub tag: Option<String>,

    /// Ordered child nodes
    pub children: Option<Vec<HtmlNode>>,

    /// Element attributes
    pub props: Option<Props>,
}

impl ParentNode {
    /// Create a parent wrapping the given children
    pub fn new(tag: &str, children: Vec<HtmlNode>) -> Self {
        Self {
            tag: Some(tag.to_string()),
            children: Some(children),
            props: None,
        }
    }

    /// Create a parent with attributes
    pub fn with_props(tag: &str, children: Vec<HtmlNode>, props: Vec<(&str, &str)>) -> Self {
        Self {
            tag: Some(tag.to_string()),
            children: Some(children),
            props: Some(collect_props(props)),
        }
    }

    /// Render this parent and all of its children to an HTML string.
    ///
    /// Fails if the child sequence or the tag is absent. Children render in
    /// sequence order; recursion depth equals tree depth.
    pub fn to_html(&self) -> Result<String> {
        let children = self
            .children
            .as_ref()
            .ok_or(RenderError::MissingChildren)?;
        let tag = self.tag.as_deref().ok_or(RenderError::MissingTag)?;

        let props = props_to_html(self.props.as_ref());
        let mut output = String::with_capacity(64);
        output.push('<');
        output.push_str(tag);
        if !props.is_empty() {
            output.push(' ');
            output.push_str(&props);
        }
        output.push('>');
        for child in children {
            output.push_str(&child.to_html()?);
        }
        output.push_str("</");
        output.push_str(tag);
        output.push('>');
        Ok(output)
    }
}

/// Render props as space-joined `name="value"` pairs, in insertion order.
/// Values are not escaped.
fn props_to_html(props: Option<&Props>) -> String {
    let Some(props) = props else {
        return String::new();
    };

    props
        .iter()
        .map(|(name, value)| format!("{}=\"{}\"", name, value))
        .collect::<Vec<_>>()
        .join(" ")
}

fn collect_props(props: Vec<(&str, &str)>) -> Props {
    props
        .into_iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}
