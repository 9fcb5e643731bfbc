//! Delimiter splitting of inline text fragments.
//!
//! Scans each fragment's text for delimiter-enclosed spans and splits it
//! into alternating plain and styled fragments.

use upmark_core::{FragmentKind, TextFragment};

/// Split every fragment in `fragments` on `delimiter`, emitting enclosed
/// spans as fragments of `kind`.
///
/// Fragments are processed independently and in order; splitting one never
/// affects another's output. Delimiters match greedily left to right,
/// non-overlapping and non-nesting: inside an open span, the next occurrence
/// of the same delimiter closes it. An opening delimiter with no close is
/// literal text, not an error. The incoming fragment kind is ignored:
/// unmatched text always comes out plain and matched spans always come out
/// as `kind`.
pub fn split_fragments(
    fragments: &[TextFragment],
    delimiter: &str,
    kind: FragmentKind,
) -> Vec<TextFragment> {
    fragments
        .iter()
        .flat_map(|fragment| split_fragment(fragment, delimiter, kind))
        .collect()
}

fn split_fragment(
    fragment: &TextFragment,
    delimiter: &str,
    kind: FragmentKind,
) -> Vec<TextFragment> {
    let mut cur = fragment.text.as_str();

    // An empty delimiter can never match.
    if delimiter.is_empty() || !cur.contains(delimiter) {
        return vec![TextFragment::plain(&fragment.text)];
    }

    let mut output = Vec::new();

    // Invariant: `cur` contains at least one delimiter occurrence on entry.
    while let Some(open) = cur.find(delimiter) {
        let before = &cur[..open];
        let after = &cur[open + delimiter.len()..];

        // No closing delimiter: the rest is literal text.
        let Some(close) = after.find(delimiter) else {
            output.push(TextFragment::plain(cur));
            break;
        };

        let content = &after[..close];
        let remainder = &after[close + delimiter.len()..];

        if !before.is_empty() {
            output.push(TextFragment::plain(before));
        }
        output.push(TextFragment::new(content, kind));

        if remainder.contains(delimiter) {
            cur = remainder;
            continue;
        }
        if !remainder.is_empty() {
            output.push(TextFragment::plain(remainder));
        }
        break;
    }

    output
}
