//! Configuration options for wiki markup conversion.
//!
//! The `Options` struct controls how much structure survives into the
//! plain-text output. Use `Default::default()` for standard settings.

/// Configuration options for conversion.
///
/// All fields are public for easy configuration.
///
/// # Example
///
/// ```rust
/// use rs_wikimedia2text::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     keep_sections: true,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Keep internal links as `<a href="target">display</a>` markers
    /// instead of flattening them to their display text.
    ///
    /// Default: `false`
    pub keep_links: bool,

    /// Emit `<hN>title</hN>` markers for section headers and
    /// `<li>item</li>` markers for list items instead of flattening
    /// headers and dropping list items.
    ///
    /// Default: `false`
    pub keep_sections: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_flatten_everything() {
        let opts = Options::default();
        assert!(!opts.keep_links);
        assert!(!opts.keep_sections);
    }

    #[test]
    fn options_can_be_toggled() {
        let opts = Options {
            keep_links: true,
            keep_sections: true,
        };
        assert!(opts.keep_links);
        assert!(opts.keep_sections);
    }
}
