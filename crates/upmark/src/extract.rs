//! Markdown link and image extraction.
//!
//! Resolves `[text](url)` and `![alt](url)` spans in plain fragments into
//! link and image fragments carrying their destination URL.

use once_cell::sync::Lazy;
use regex::Regex;

use upmark_core::{FragmentKind, TextFragment};

static IMAGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[([^\[\]]*)\]\(([^()]*)\)").expect("invalid image regex"));

static LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\[\]]*)\]\(([^()]*)\)").expect("invalid link regex"));

/// Find all `![alt](url)` spans in `text`, returning `(alt, url)` pairs in
/// document order.
pub fn find_images(text: &str) -> Vec<(&str, &str)> {
    IMAGE_RE
        .captures_iter(text)
        .map(|caps| {
            (
                caps.get(1).map_or("", |m| m.as_str()),
                caps.get(2).map_or("", |m| m.as_str()),
            )
        })
        .collect()
}

/// Find all `[text](url)` spans in `text`, returning `(text, url)` pairs in
/// document order. Image spans (`![...](...)`) are not counted as links.
pub fn find_links(text: &str) -> Vec<(&str, &str)> {
    LINK_RE
        .captures_iter(text)
        .filter(|caps| {
            let start = caps.get(0).map_or(0, |m| m.start());
            !preceded_by_bang(text, start)
        })
        .map(|caps| {
            (
                caps.get(1).map_or("", |m| m.as_str()),
                caps.get(2).map_or("", |m| m.as_str()),
            )
        })
        .collect()
}

/// Split `![alt](url)` spans in plain fragments into image fragments.
///
/// Only plain fragments are scanned; already-styled fragments pass through
/// untouched, as do plain fragments with no match.
pub fn split_image_fragments(fragments: &[TextFragment]) -> Vec<TextFragment> {
    split_on_regex(fragments, &IMAGE_RE, FragmentKind::Image, false)
}

/// Split `[text](url)` spans in plain fragments into link fragments.
///
/// Only plain fragments are scanned; already-styled fragments pass through
/// untouched, as do plain fragments with no match. Image spans are left for
/// [`split_image_fragments`].
pub fn split_link_fragments(fragments: &[TextFragment]) -> Vec<TextFragment> {
    split_on_regex(fragments, &LINK_RE, FragmentKind::Link, true)
}

fn split_on_regex(
    fragments: &[TextFragment],
    re: &Regex,
    kind: FragmentKind,
    skip_image_spans: bool,
) -> Vec<TextFragment> {
    let mut output = Vec::new();

    for fragment in fragments {
        if fragment.kind != FragmentKind::Plain {
            output.push(fragment.clone());
            continue;
        }

        let text = fragment.text.as_str();
        let mut last = 0;
        let mut matched = false;

        for caps in re.captures_iter(text) {
            let Some(whole) = caps.get(0) else { continue };
            if skip_image_spans && preceded_by_bang(text, whole.start()) {
                continue;
            }

            if whole.start() > last {
                output.push(TextFragment::plain(&text[last..whole.start()]));
            }
            let inner = caps.get(1).map_or("", |m| m.as_str());
            let url = caps.get(2).map_or("", |m| m.as_str());
            output.push(TextFragment::with_url(inner, kind, url));

            last = whole.end();
            matched = true;
        }

        if !matched {
            output.push(fragment.clone());
            continue;
        }
        if last < text.len() {
            output.push(TextFragment::plain(&text[last..]));
        }
    }

    output
}

// The regex crate has no lookbehind, so the image/link distinction is an
// explicit check on the byte before the match.
fn preceded_by_bang(text: &str, start: usize) -> bool {
    start > 0 && text.as_bytes()[start - 1] == b'!'
}
