//! Bulk removal of marked byte ranges from a document.
//!
//! Several cleaning passes scan the whole document and record regions to
//! delete (comments, tag delimiters) without mutating as they go; the
//! collected spans are then removed in a single pass here.

/// A half-open byte range `[start, end)` marking text to delete.
///
/// Offsets always fall on character boundaries because every producer
/// derives them from pattern matches over the same string.
pub type Span = (usize, usize);

/// Remove every span's covered bytes from `text`, keeping the rest in
/// original order.
///
/// Spans are sorted by start offset and consumed left to right: the gap
/// before each span is kept, then the cursor jumps to the span's end.
/// A span that starts before the cursor (overlap with an earlier span)
/// contributes no gap and can only move the cursor forward; overlapping
/// input therefore merges rather than corrupting the output.
pub fn drop_spans(mut spans: Vec<Span>, text: &str) -> String {
    spans.sort_unstable();
    let mut result = String::with_capacity(text.len());
    let mut cursor = 0;
    for (start, end) in spans {
        if start > cursor {
            result.push_str(&text[cursor..start]);
        }
        cursor = cursor.max(end);
    }
    result.push_str(&text[cursor..]);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_single_span() {
        assert_eq!(drop_spans(vec![(1, 3)], "abcd"), "ad");
    }

    #[test]
    fn removes_unsorted_spans() {
        assert_eq!(drop_spans(vec![(4, 5), (0, 1)], "abcdef"), "bcdf");
    }

    #[test]
    fn no_spans_returns_input() {
        assert_eq!(drop_spans(vec![], "abcdef"), "abcdef");
    }

    #[test]
    fn overlapping_spans_merge() {
        // (1,4) and (3,6) consume as one region [1,6)
        assert_eq!(drop_spans(vec![(1, 4), (3, 6)], "abcdefg"), "ag");
    }

    #[test]
    fn nested_span_is_absorbed() {
        assert_eq!(drop_spans(vec![(1, 6), (2, 4)], "abcdefg"), "ag");
    }

    #[test]
    fn partition_reconstructs_input() {
        let text = "the quick brown fox jumps";
        let spans = vec![(4, 10), (16, 20)];
        let kept = drop_spans(spans.clone(), text);
        let removed: String = spans.iter().map(|&(s, e)| &text[s..e]).collect();
        assert_eq!(kept.len() + removed.len(), text.len());
        assert_eq!(kept, "the brown jumps");
    }
}
