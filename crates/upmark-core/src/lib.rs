//! upmark-core - Inline fragment model and HTML node tree
//!
//! This crate provides the core data structures for converting inline
//! markdown-style text to HTML: the typed text fragment produced by the
//! splitting passes, and the renderable node tree fragments are adapted
//! into. The splitting passes themselves live in the `upmark` crate.
//!
//! # Architecture
//!
//! ```text
//! Inline text ──splitting──▶ [TextFragment] ──adapt──▶ [LeafNode]
//!                                                           │
//!                            HTML String ◀──render── HtmlNode tree
//! ```
//!
//! # Example
//!
//! ```rust
//! use upmark_core::{LeafNode, ParentNode};
//!
//! let tree = ParentNode::new(
//!     "p",
//!     vec![
//!         LeafNode::new("b", "Bold text").into(),
//!         LeafNode::raw("Normal text").into(),
//!     ],
//! );
//!
//! assert_eq!(tree.to_html().unwrap(), "<p><b>Bold text</b>Normal text</p>");
//! ```

mod fragment;
mod node;

pub use fragment::{FragmentKind, TextFragment};
pub use node::{HtmlNode, LeafNode, ParentNode, Props};

/// Error type for node rendering
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Missing value on leaf node")]
    MissingValue,

    #[error("Missing tag on parent node")]
    MissingTag,

    #[error("Missing children on parent node")]
    MissingChildren,
}

pub type Result<T> = std::result::Result<T, RenderError>;
