//! Compiled regex patterns and fixed lookup tables for markup cleaning.
//!
//! All patterns are compiled once at startup using `LazyLock` for
//! efficiency, and the tag/namespace tables are immutable constants.
//! Patterns are organized by their purpose in the cleaning pipeline.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Fixed lookup tables
// =============================================================================

/// Link namespace prefixes kept as regular in-text links.
///
/// `w`: internal wiki links, `wiktionary`/`wikt`: dictionary links.
/// Links with any other prefix (images, categories, files, ...) are
/// dropped from the text entirely.
pub const ACCEPTED_NAMESPACES: [&str; 3] = ["w", "wiktionary", "wikt"];

/// Tags whose self-closing form is deleted outright.
pub const SELF_CLOSING_TAGS: [&str; 5] = ["br", "hr", "nobr", "ref", "references"];

/// Tags whose open/close delimiters are deleted while their content is
/// kept: pure inline formatting with no plain-text equivalent.
pub const IGNORED_TAGS: [&str; 28] = [
    "b", "big", "blockquote", "center", "cite", "div", "em", "font", "h1", "h2", "h3", "h4",
    "hiero", "i", "kbd", "nowiki", "p", "plaintext", "s", "small", "span", "strike", "strong",
    "sub", "sup", "tt", "u", "var",
];

/// Elements removed together with their content: structure that cannot be
/// rendered as running text (tables, lists, references, media).
pub const DISCARD_ELEMENTS: [&str; 27] = [
    "gallery", "timeline", "noinclude", "pre", "table", "tr", "td", "th", "caption", "form",
    "input", "select", "option", "textarea", "ul", "li", "ol", "dl", "dt", "dd", "menu", "dir",
    "ref", "references", "img", "imagemap", "source",
];

/// Elements replaced by a numbered placeholder label instead of their
/// content (`formula_1`, `codice_2`, ...).
pub const PLACEHOLDER_TAGS: [(&str, &str); 2] = [("math", "formula"), ("code", "codice")];

// =============================================================================
// Link patterns
// =============================================================================

/// Matches internal wiki links `[[target|display]]trail`, `|` separating
/// the optional display text; trailing word characters concatenate into
/// the display (e.g. `s` for plurals). Inner targets never contain `[`,
/// so nested forms like `[[File:..|..[[..]]..]]` resolve inside-out.
pub static WIKI_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[\[([^\[]*?)(?:\|([^\[]*?))?\]\](\w*)").expect("WIKI_LINK regex")
});

/// Looser second pass catching any bracketed link the rewrite left behind.
pub static PARAMETRIZED_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\[.*?\]\]").expect("PARAMETRIZED_LINK regex"));

/// Matches external links `[scheme... caption]`; a space separates the
/// optional caption, which is all that survives.
pub static EXTERNAL_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\w+.*? (.*?)\]").expect("EXTERNAL_LINK regex"));

/// Matches external links carrying no caption at all.
pub static EXTERNAL_LINK_NO_ANCHOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\w+[&\]]*\]").expect("EXTERNAL_LINK_NO_ANCHOR regex"));

// =============================================================================
// Emphasis patterns
// =============================================================================

/// Matches five-tick bold-italic spans.
pub static BOLD_ITALIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"'''''([^']*?)'''''").expect("BOLD_ITALIC regex"));

/// Matches three-tick bold spans.
pub static BOLD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"'''(.*?)'''").expect("BOLD regex"));

/// Matches two-tick italic spans already wrapped in straight quotes.
pub static ITALIC_QUOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"''"(.*?)"''"#).expect("ITALIC_QUOTE regex"));

/// Matches two-tick italic spans.
pub static ITALIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"''([^']*)''").expect("ITALIC regex"));

/// Matches doubled straight quotes.
pub static QUOTE_QUOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"""(.*?)"""#).expect("QUOTE_QUOTE regex"));

// =============================================================================
// Pseudo-HTML patterns
// =============================================================================

/// Matches HTML comments, across lines.
pub static COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").expect("COMMENT regex"));

/// Self-closing tag patterns, one per tag in `SELF_CLOSING_TAGS`.
pub static SELF_CLOSING_TAG_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    SELF_CLOSING_TAGS
        .iter()
        .map(|tag| {
            Regex::new(&format!(r"(?is)<\s*{tag}\b[^/]*/\s*>"))
                .expect("self-closing tag regex")
        })
        .collect()
});

/// (open, close) tag-delimiter patterns, one pair per tag in
/// `IGNORED_TAGS`. Only the delimiters are matched; content stays.
pub static IGNORED_TAG_PATTERNS: LazyLock<Vec<(Regex, Regex)>> = LazyLock::new(|| {
    IGNORED_TAGS
        .iter()
        .map(|tag| {
            let left =
                Regex::new(&format!(r"(?i)<\s*{tag}\b[^>]*>")).expect("ignored open tag regex");
            let right =
                Regex::new(&format!(r"(?i)<\s*/\s*{tag}>")).expect("ignored close tag regex");
            (left, right)
        })
        .collect()
});

/// Whole-element patterns for `DISCARD_ELEMENTS`, content included.
pub static DISCARD_ELEMENT_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    DISCARD_ELEMENTS
        .iter()
        .map(|tag| {
            Regex::new(&format!(r"(?is)<\s*{tag}\b[^>]*>.*?<\s*/\s*{tag}>"))
                .expect("discard element regex")
        })
        .collect()
});

/// Whole-element patterns for `PLACEHOLDER_TAGS`, paired with their label.
pub static PLACEHOLDER_TAG_PATTERNS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    PLACEHOLDER_TAGS
        .iter()
        .map(|&(tag, label)| {
            let pattern = Regex::new(&format!(r"(?is)<\s*{tag}(\s*| [^>]+?)>.*?<\s*/\s*{tag}\s*>"))
                .expect("placeholder tag regex");
            (pattern, label)
        })
        .collect()
});

// =============================================================================
// Whitespace and punctuation normalization
// =============================================================================

/// Matches lines of purely leading-space "preformatted" content.
pub static PREFORMATTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^ .*?$").expect("PREFORMATTED regex"));

/// Matches runs of two or more spaces.
pub static SPACES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" {2,}").expect("SPACES regex"));

/// Matches runs of four or more periods.
pub static DOTS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.{4,}").expect("DOTS regex"));

/// Matches a stray space before closing punctuation.
pub static SPACE_BEFORE_CLOSING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" ([,:.)\]»])").expect("SPACE_BEFORE_CLOSING regex"));

/// Matches a stray space after opening punctuation.
pub static SPACE_AFTER_OPENING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([\[(«]) ").expect("SPACE_AFTER_OPENING regex"));

/// Matches lines containing only non-word punctuation.
pub static PUNCTUATION_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\W+?\n").expect("PUNCTUATION_LINE regex"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wiki_link_captures_target_display_and_trail() {
        let caps = WIKI_LINK.captures("[[Paris|the city]]s").unwrap();
        assert_eq!(&caps[1], "Paris");
        assert_eq!(&caps[2], "the city");
        assert_eq!(&caps[3], "s");
    }

    #[test]
    fn wiki_link_display_is_optional() {
        let caps = WIKI_LINK.captures("[[Dog]]").unwrap();
        assert_eq!(&caps[1], "Dog");
        assert!(caps.get(2).is_none());
    }

    #[test]
    fn external_link_captures_caption() {
        let caps = EXTERNAL_LINK
            .captures("[http://example.org the caption]")
            .unwrap();
        assert_eq!(&caps[1], "the caption");
    }

    #[test]
    fn self_closing_patterns_match_spaced_forms() {
        let br = &SELF_CLOSING_TAG_PATTERNS[0];
        assert!(br.is_match("<br/>"));
        assert!(br.is_match("< br clear=all / >"));
        assert!(!br.is_match("<br>"));
    }

    #[test]
    fn discard_patterns_span_content() {
        let table = DISCARD_ELEMENT_PATTERNS
            .iter()
            .zip(DISCARD_ELEMENTS.iter())
            .find(|&(_, tag)| *tag == "table")
            .map(|(re, _)| re)
            .unwrap();
        assert_eq!(
            table.replace_all("a<table class=x>rows\nrows</table>b", ""),
            "ab"
        );
    }

    #[test]
    fn placeholder_patterns_cover_attributes() {
        let (math, label) = &PLACEHOLDER_TAG_PATTERNS[0];
        assert_eq!(*label, "formula");
        assert!(math.is_match("<math>x^2</math>"));
        assert!(math.is_match(r#"<math display="block">x</math>"#));
        assert!(!math.is_match("<mathx>x</mathx>"));
    }

    #[test]
    fn punctuation_spacing() {
        assert_eq!(SPACE_BEFORE_CLOSING.replace_all("word , next", "$1"), "word, next");
        assert_eq!(SPACE_AFTER_OPENING.replace_all("( word", "$1"), "(word");
    }
}
