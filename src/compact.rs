//! Paragraph compaction.
//!
//! Reduces cleaned, newline-delimited text to the final paragraph
//! sequence: section titles are held back on a per-level stack and only
//! flushed (shallow to deep) once real content follows them, so empty
//! sections vanish; list items, table residue, and punctuation-only
//! lines are dropped along the way.

use std::collections::BTreeMap;

/// Compact cleaned text into the output paragraph sequence.
///
/// With `keep_sections` set, headers and list items are emitted as
/// `<hN>...</hN>` / `<li>...</li>` structural markers instead of being
/// flattened or dropped.
pub fn compact(text: &str, keep_sections: bool) -> Vec<String> {
    let mut page: Vec<String> = Vec::new();
    // Pending titles for sections with no content yet, keyed by level.
    let mut headers: BTreeMap<usize, String> = BTreeMap::new();
    let mut empty_section = false;

    for line in text.split('\n') {
        if line.is_empty() {
            continue;
        }

        // Handle section titles
        if let Some((level, title)) = match_section(line) {
            if keep_sections {
                page.push(format!("<h{level}>{title}</h{level}>"));
            }
            let mut title = title.to_string();
            if !title.is_empty() && !title.ends_with(['!', '?']) {
                title.push('.');
            }
            headers.insert(level, title);
            // Drop pending headers at strictly deeper levels
            let _ = headers.split_off(&(level + 1));
            empty_section = true;
            continue;
        }

        let (Some(first), Some(last)) = (line.chars().next(), line.chars().next_back()) else {
            continue;
        };

        if let Some(rest) = line.strip_prefix("++") {
            // Handle page title: the suffix marker is two characters too
            let title = strip_last_chars(rest, 2);
            if !title.is_empty() {
                let mut title = title.to_string();
                if !title.ends_with(['!', '?']) {
                    title.push('.');
                }
                page.push(title);
            }
        } else if "*#:;".contains(first) {
            // Handle lists
            if keep_sections {
                page.push(format!("<li>{}</li>", &line[first.len_utf8()..]));
            }
        } else if "{|".contains(first) || last == '}' {
            // Drop residuals of tables and lists
        } else if (first == '(' && last == ')')
            || line.trim_matches(|c| c == '.' || c == '-').is_empty()
        {
            // Drop irrelevant lines
        } else if !headers.is_empty() {
            // First content line after a run of headers: flush them
            // shallow to deep, then the line itself.
            for title in std::mem::take(&mut headers).into_values() {
                page.push(title);
            }
            page.push(line.to_string());
            empty_section = false;
        } else if !empty_section {
            page.push(line.to_string());
        }
    }

    page
}

/// Match a section-header line: a run of two or more `=`, the title, and
/// a closing run of the same length, with optional surrounding
/// whitespace and trailing junk tolerated.
///
/// The delimiter run is matched greedily and backs off one `=` at a
/// time until a same-length closing run is found, the closing run being
/// the earliest occurrence; leftover `=` become part of the title.
fn match_section(line: &str) -> Option<(usize, &str)> {
    let leading = line.bytes().take_while(|&b| b == b'=').count();
    if leading < 2 {
        return None;
    }
    for level in (2..=leading).rev() {
        let rest = &line[level..];
        let delimiter = "=".repeat(level);
        if let Some(close) = rest.find(&delimiter) {
            return Some((level, rest[..close].trim()));
        }
    }
    None
}

/// Cut the last `count` characters off `s`, respecting char boundaries.
fn strip_last_chars(s: &str, count: usize) -> &str {
    match s.char_indices().rev().nth(count - 1) {
        Some((i, _)) => &s[..i],
        None => "",
    }
}
