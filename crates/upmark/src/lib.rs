//! # upmark
//!
//! Convert markdown-style inline text to HTML.
//!
//! ## Design
//!
//! Input text is split into a flat sequence of typed fragments, one pass per
//! inline style (bold, italic, code, then images and links). Each fragment
//! maps one-to-one to a leaf node, and the caller decides which container
//! element the leaves are assembled into. This design allows:
//!
//! - **Inline styling only**: no block-level parsing, by construction
//! - **Inspectable intermediate stages**: fragments and nodes are plain
//!   values that can be examined or rearranged before rendering
//! - **Configurable delimiters**: the bold, italic, and code markers are
//!   options, not constants
//!
//! ## Example (text to HTML)
//!
//! ```rust
//! use upmark::UpmarkService;
//!
//! let service = UpmarkService::new();
//! let html = service.upmark("p", "This is **bold** text").unwrap();
//! assert_eq!(html, "<p>This is <b>bold</b> text</p>");
//! ```
//!
//! ## Example (splitting only)
//!
//! ```rust
//! use upmark::{split_fragments, FragmentKind, TextFragment};
//!
//! let input = [TextFragment::plain("plain `code` plain")];
//! let fragments = split_fragments(&input, "`", FragmentKind::Code);
//! assert_eq!(fragments.len(), 3);
//! assert_eq!(fragments[1], TextFragment::new("code", FragmentKind::Code));
//! ```

mod extract;
mod service;
mod split;

pub use extract::{find_images, find_links, split_image_fragments, split_link_fragments};
pub use service::{UpmarkOptions, UpmarkService};
pub use split::split_fragments;

pub use upmark_core::{
    FragmentKind, HtmlNode, LeafNode, ParentNode, Props, RenderError, Result, TextFragment,
};
