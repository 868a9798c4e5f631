//! The markup-cleaning pipeline.
//!
//! One ordered sequence of passes per document; order matters, since
//! later passes assume the shape earlier passes leave behind (entity
//! decoding must follow emphasis flattening, preformatted-line removal
//! must follow tag removal). No pass raises on malformed input: every
//! rule degrades to leaving the text unchanged when its pattern does
//! not match.

use regex::{Captures, Regex};

use crate::entities::unescape;
use crate::nested::drop_nested;
use crate::options::Options;
use crate::patterns;
use crate::spans::{drop_spans, Span};

/// Clean one document's raw wiki markup into newline-delimited text,
/// ready for paragraph compaction.
pub fn clean(text: &str, options: &Options) -> String {
    // Drop transclusions (templates, parser functions). Templates are
    // not expanded, only stripped.
    let text = drop_nested(text, "{{", "}}");

    // Drop tables
    let text = drop_nested(&text, "{|", "|}");

    // Rewrite internal links, then drop whatever bracketed forms remain
    let keep_links = options.keep_links;
    let text = patterns::WIKI_LINK
        .replace_all(&text, |caps: &Captures| rewrite_link(caps, keep_links));
    let text = patterns::PARAMETRIZED_LINK.replace_all(&text, "");

    // Handle external links
    let text = patterns::EXTERNAL_LINK.replace_all(&text, "$1");
    let text = patterns::EXTERNAL_LINK_NO_ANCHOR.replace_all(&text, "");

    // Handle bold/italic/quote
    let text = patterns::BOLD_ITALIC.replace_all(&text, "$1");
    let text = patterns::BOLD.replace_all(&text, "$1");
    let text = patterns::ITALIC_QUOTE.replace_all(&text, "&quot;$1&quot;");
    let text = patterns::ITALIC.replace_all(&text, "&quot;$1&quot;");
    let text = patterns::QUOTE_QUOTE.replace_all(&text, "$1");
    let text = text.replace("'''", "").replace("''", "&quot;");

    // Decode entities, twice to resolve one level of double-encoding
    // (&amp;nbsp;). Exactly two applications, never a fixed-point loop.
    let text = unescape(&text);
    let text = unescape(&text);

    // Collect spans for comments, self-closing tags, and the delimiters
    // of ignored tags (their content stays), then remove in one pass.
    let mut matches: Vec<Span> = Vec::new();
    for m in patterns::COMMENT.find_iter(&text) {
        matches.push((m.start(), m.end()));
    }
    for pattern in patterns::SELF_CLOSING_TAG_PATTERNS.iter() {
        for m in pattern.find_iter(&text) {
            matches.push((m.start(), m.end()));
        }
    }
    for (left, right) in patterns::IGNORED_TAG_PATTERNS.iter() {
        for m in left.find_iter(&text) {
            matches.push((m.start(), m.end()));
        }
        for m in right.find_iter(&text) {
            matches.push((m.start(), m.end()));
        }
    }
    let text = drop_spans(matches, &text);

    // Discarded elements may nest or repeat, so they cannot go through
    // the span pass: substitute per element type instead.
    let mut text = text;
    for pattern in patterns::DISCARD_ELEMENT_PATTERNS.iter() {
        text = pattern.replace_all(&text, "").into_owned();
    }

    // Expand placeholders (math, code) to numbered labels
    for (pattern, label) in patterns::PLACEHOLDER_TAG_PATTERNS.iter() {
        text = expand_placeholders(&text, pattern, label);
    }

    let text = text.replace("<<", "«").replace(">>", "»");

    // Drop preformatted lines. This can't be done earlier since leading-
    // space lines may still hold tags at that point.
    let text = patterns::PREFORMATTED.replace_all(&text, "");

    // Cleanup text
    let text = text.replace('\t', " ");
    let text = patterns::SPACES.replace_all(&text, " ");
    let text = patterns::DOTS.replace_all(&text, "...");
    let text = patterns::SPACE_BEFORE_CLOSING.replace_all(&text, "$1");
    let text = patterns::SPACE_AFTER_OPENING.replace_all(&text, "$1");
    // Lines with only punctuation
    let text = patterns::PUNCTUATION_LINE.replace_all(&text, "\n");
    text.replace(",,", ",").replace(",.", ".")
}

/// Rewrite one internal link match.
///
/// Links into a namespace outside `ACCEPTED_NAMESPACES` vanish entirely.
/// Otherwise the display text (or the target when no display is given)
/// survives, with trailing word characters concatenated so plural forms
/// like `[[cat]]s` read naturally.
fn rewrite_link(caps: &Captures, keep_links: bool) -> String {
    let link = caps.get(1).map_or("", |m| m.as_str());
    if let Some(colon) = link.find(':') {
        let prefix = &link[..colon];
        if colon > 0 && !patterns::ACCEPTED_NAMESPACES.contains(&prefix) {
            return String::new();
        }
    }
    let display = caps
        .get(2)
        .map(|m| m.as_str())
        .filter(|s| !s.is_empty())
        .unwrap_or(link);
    let trail = caps.get(3).map_or("", |m| m.as_str());
    let anchor = format!("{display}{trail}");
    if keep_links {
        format!(r#"<a href="{link}">{anchor}</a>"#)
    } else {
        anchor
    }
}

/// Replace every match of a placeholder element with a numbered label,
/// numbering restarting per element type and assigned in order of
/// appearance. Replacement goes through whole-match substitution, so
/// identical repeated elements share the first label and still consume
/// an index each.
fn expand_placeholders(text: &str, pattern: &Regex, label: &str) -> String {
    let matched: Vec<&str> = pattern.find_iter(text).map(|m| m.as_str()).collect();
    let mut result = text.to_string();
    for (index, token) in matched.iter().enumerate() {
        result = result.replace(token, &format!("{label}_{}", index + 1));
    }
    result
}
