//! UpmarkService - the main entry point for inline text to HTML conversion.

use upmark_core::{FragmentKind, HtmlNode, ParentNode, Result, TextFragment};

use crate::extract::{split_image_fragments, split_link_fragments};
use crate::split::split_fragments;

/// Options for UpmarkService
#[derive(Debug, Clone)]
pub struct UpmarkOptions {
    /// Strong (bold) delimiter
    pub strong_delimiter: String,

    /// Emphasis (italic) delimiter
    pub em_delimiter: char,

    /// Inline code delimiter
    pub code_delimiter: char,
}

impl Default for UpmarkOptions {
    fn default() -> Self {
        Self {
            strong_delimiter: "**".to_string(),
            em_delimiter: '_',
            code_delimiter: '`',
        }
    }
}

/// The main service for converting inline text to HTML
pub struct UpmarkService {
    options: UpmarkOptions,
}

impl UpmarkService {
    /// Create a new UpmarkService with default options
    pub fn new() -> Self {
        Self {
            options: UpmarkOptions::default(),
        }
    }

    /// Create an UpmarkService with custom options
    pub fn with_options(options: UpmarkOptions) -> Self {
        Self { options }
    }

    /// Get the current options
    pub fn options(&self) -> &UpmarkOptions {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut UpmarkOptions {
        &mut self.options
    }

    /// Convert inline text to HTML, wrapped in the given container element
    pub fn upmark(&self, tag: &str, text: &str) -> Result<String> {
        ParentNode::new(tag, self.nodes(text)).to_html()
    }

    /// Run the full splitting pipeline on `text`.
    ///
    /// Passes run in order: bold, italic, code, then image and link
    /// extraction. Each delimiter pass feeds only plain fragments through
    /// the splitter, so spans resolved by an earlier pass stay resolved.
    pub fn fragments(&self, text: &str) -> Vec<TextFragment> {
        let em = self.options.em_delimiter.to_string();
        let code = self.options.code_delimiter.to_string();

        let mut fragments = vec![TextFragment::plain(text)];
        fragments = split_plain(&fragments, &self.options.strong_delimiter, FragmentKind::Bold);
        fragments = split_plain(&fragments, &em, FragmentKind::Italic);
        fragments = split_plain(&fragments, &code, FragmentKind::Code);
        fragments = split_image_fragments(&fragments);
        split_link_fragments(&fragments)
    }

    /// Adapt the pipeline output into nodes, one leaf per fragment
    pub fn nodes(&self, text: &str) -> Vec<HtmlNode> {
        self.fragments(text)
            .iter()
            .map(|fragment| fragment.to_leaf().into())
            .collect()
    }
}

impl Default for UpmarkService {
    fn default() -> Self {
        Self::new()
    }
}

/// Feed only plain fragments through the splitter; styled fragments from
/// earlier passes go through untouched.
fn split_plain(
    fragments: &[TextFragment],
    delimiter: &str,
    kind: FragmentKind,
) -> Vec<TextFragment> {
    fragments
        .iter()
        .flat_map(|fragment| {
            if fragment.kind == FragmentKind::Plain {
                split_fragments(std::slice::from_ref(fragment), delimiter, kind)
            } else {
                vec![fragment.clone()]
            }
        })
        .collect()
}
