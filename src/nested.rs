//! Removal of nestable bracketed constructs.
//!
//! Wiki templates (`{{ ... }}`) and tables (`{| ... |}`) nest to arbitrary
//! depth and are routinely left unbalanced in real articles, so a
//! strict parser is the wrong tool. The scanner here tracks a nesting
//! counter and resolves malformed input leniently: it over- or
//! under-trims rather than failing, and downstream passes rely on that
//! forgiving behavior.

use crate::spans::{drop_spans, Span};

/// Remove every top-level balanced `open ... close` region from `text`,
/// accounting for arbitrary nesting of the same delimiter pair.
///
/// Resolution policy for malformed input:
/// - no open delimiter at all: the text is returned unchanged;
/// - opens left pending at end of input: all remaining closes are
///   consumed and the region ends at the last one found;
/// - a close with no further close to balance pending opens: every
///   region seen so far collapses into one span ending at that close.
pub fn drop_nested(text: &str, open: &str, close: &str) -> String {
    // Locate `pat` at or after byte offset `from`, as a (start, end) pair.
    let find = |pat: &str, from: usize| -> Option<Span> {
        text.get(from..)
            .and_then(|tail| tail.find(pat))
            .map(|i| (from + i, from + i + pat.len()))
    };

    let Some(first_open) = find(open, 0) else {
        return text.to_string();
    };

    let mut matches: Vec<Span> = Vec::new();
    let mut nest = 0usize;
    let mut start = first_open;
    let mut end = find(close, start.1);
    let mut next = start;

    while let Some(current) = end {
        match find(open, next.1) {
            None => {
                // No more opens: consume what closes remain for the
                // pending nest levels and end the region at the last one.
                let mut last = current;
                while nest > 0 {
                    nest -= 1;
                    match find(close, last.1) {
                        Some(further) => last = further,
                        None => break,
                    }
                }
                matches.push((start.0, last.1));
                break;
            }
            Some(following) => {
                next = following;
                // Handle every close that falls before the next open.
                loop {
                    let Some(closing) = end else { break };
                    if closing.1 >= next.0 {
                        // { { } - the next open nests inside this region
                        break;
                    }
                    if nest > 0 {
                        nest -= 1;
                        let last = closing.1;
                        end = find(close, closing.1);
                        if end.is_none() {
                            // Unbalanced: collapse everything seen so far
                            // into one span ending at the last close.
                            let outermost = matches.first().map_or(start.0, |&(s, _)| s);
                            matches = vec![(outermost, last)];
                            break;
                        }
                    } else {
                        // { } { - a top-level region just completed
                        matches.push((start.0, closing.1));
                        start = next;
                        end = find(close, next.1);
                        break;
                    }
                }
                if next != start {
                    nest += 1;
                }
            }
        }
    }

    drop_spans(matches, text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_flat_region() {
        assert_eq!(drop_nested("a{{x}}b", "{{", "}}"), "ab");
    }

    #[test]
    fn removes_nested_region() {
        assert_eq!(drop_nested("a{{x{{y}}z}}b", "{{", "}}"), "ab");
    }

    #[test]
    fn removes_sequential_regions() {
        assert_eq!(drop_nested("x{{a}}y{{b}}z", "{{", "}}"), "xyz");
    }

    #[test]
    fn no_delimiters_returns_input_unchanged() {
        assert_eq!(drop_nested("plain text", "{{", "}}"), "plain text");
    }

    #[test]
    fn dangling_open_with_no_close_returns_input_unchanged() {
        // An open with no close anywhere never starts a region.
        assert_eq!(drop_nested("a{{x", "{{", "}}"), "a{{x");
    }

    #[test]
    fn trailing_unclosed_region_truncates_at_last_close() {
        assert_eq!(drop_nested("a{{x}}{{y", "{{", "}}"), "a{{y");
    }

    #[test]
    fn deeply_nested_region() {
        assert_eq!(drop_nested("a{{1{{2{{3}}2}}1}}b", "{{", "}}"), "ab");
    }

    #[test]
    fn unclosed_outer_consumes_remaining_closes() {
        // Outer never balances; the region ends at the last close found.
        assert_eq!(drop_nested("a{{x{{y}}z", "{{", "}}"), "az");
    }

    #[test]
    fn table_delimiters() {
        assert_eq!(
            drop_nested("before{|class\n|cell\n|}after", "{|", "|}"),
            "beforeafter"
        );
    }

    #[test]
    fn nested_tables() {
        assert_eq!(drop_nested("a{|x{|y|}z|}b", "{|", "|}"), "ab");
    }

    #[test]
    fn empty_input() {
        assert_eq!(drop_nested("", "{{", "}}"), "");
    }

    #[test]
    fn close_before_any_open_is_kept() {
        assert_eq!(drop_nested("}}a{{x}}b", "{{", "}}"), "}}ab");
    }
}
