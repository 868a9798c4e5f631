//! # rs-wikimedia2text
//!
//! Rust port of wikimedia2text - a wiki markup to plain text conversion
//! library.
//!
//! This library converts wiki-formatted articles into plain readable
//! text by stripping templates, tables, links, emphasis, and embedded
//! pseudo-HTML while preserving the running prose. Formatting that has
//! no plain-text equivalent (bold, italic, fonts) is flattened; tables
//! and media are dropped. It was built to feed bulk-downloaded articles
//! into NLP pipelines, so conversion is strictly best-effort: malformed
//! markup never fails, it just degrades.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_wikimedia2text::parse;
//!
//! let markup = "{{Infobox|ignored=yes}}\n'''Anarchism''' is a [[political philosophy]].";
//! let text = parse(markup);
//! assert_eq!(text, "Anarchism is a political philosophy.");
//! ```
//!
//! ## Features
//!
//! - **Template removal**: `{{...}}` transclusions are stripped, nesting
//!   and unbalanced delimiters handled leniently
//! - **Link flattening**: `[[target|display]]` becomes display text;
//!   external links keep their caption
//! - **Entity decoding**: numeric and named character references,
//!   including double-encoded input
//! - **Section handling**: headers of empty sections are discarded,
//!   others become their own paragraphs
//!
//! Each conversion is a pure function of the input text and options:
//! independent documents can be converted in parallel freely.

mod clean;
mod compact;
mod error;
mod options;
mod patterns;

/// Character and entity reference decoding.
pub mod entities;

/// Removal of nestable bracketed constructs (templates, tables).
pub mod nested;

/// Bulk removal of marked byte ranges.
pub mod spans;

/// Input byte decoding.
pub mod encoding;

// Public API - re-exports
pub use error::{Error, Result};
pub use options::Options;

/// Converts wiki markup to plain text using default options.
///
/// The output is the paragraph sequence joined with newlines. Conversion
/// never fails: malformed markup degrades to best-effort text.
///
/// # Example
///
/// ```rust
/// use rs_wikimedia2text::parse;
///
/// let text = parse("==History==\nIt began with [[writing]]s.");
/// assert_eq!(text, "History.\nIt began with writings.");
/// ```
#[must_use]
pub fn parse(text: &str) -> String {
    parse_with_options(text, &Options::default())
}

/// Converts wiki markup to plain text with custom options.
///
/// # Example
///
/// ```rust
/// use rs_wikimedia2text::{parse_with_options, Options};
///
/// let options = Options {
///     keep_sections: true,
///     ..Options::default()
/// };
/// let text = parse_with_options("==History==\nContent.", &options);
/// assert_eq!(text, "<h2>History</h2>\nHistory.\nContent.");
/// ```
#[must_use]
pub fn parse_with_options(text: &str, options: &Options) -> String {
    parse_paragraphs(text, options).join("\n")
}

/// Converts wiki markup to the underlying paragraph sequence.
///
/// Each element is one output paragraph: a content line, a flushed
/// section title, or (with `keep_sections`) a structural marker.
///
/// # Example
///
/// ```rust
/// use rs_wikimedia2text::{parse_paragraphs, Options};
///
/// let paragraphs = parse_paragraphs("==A==\ntext", &Options::default());
/// assert_eq!(paragraphs, vec!["A.", "text"]);
/// ```
#[must_use]
pub fn parse_paragraphs(text: &str, options: &Options) -> Vec<String> {
    let cleaned = clean::clean(text, options);
    compact::compact(&cleaned, options.keep_sections)
}

/// Converts raw UTF-8 bytes of wiki markup to plain text.
///
/// Returns `Error::Encoding` if the bytes are not valid UTF-8; this is
/// the crate's only error path.
///
/// # Example
///
/// ```rust
/// use rs_wikimedia2text::parse_bytes;
///
/// let text = parse_bytes("'''bold''' text".as_bytes())?;
/// assert_eq!(text, "bold text");
/// # Ok::<(), rs_wikimedia2text::Error>(())
/// ```
pub fn parse_bytes(bytes: &[u8]) -> Result<String> {
    parse_bytes_with_options(bytes, &Options::default())
}

/// Converts raw UTF-8 bytes of wiki markup to plain text with custom
/// options.
pub fn parse_bytes_with_options(bytes: &[u8], options: &Options) -> Result<String> {
    let text = encoding::decode_utf8(bytes)?;
    Ok(parse_with_options(&text, options))
}
