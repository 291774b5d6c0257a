//! Conversion options.

use pulldown_cmark::Options;
use serde::{Deserialize, Serialize};

/// Switches for the Markdown converter.
///
/// The defaults match what the viewer uses for plain-text pages: GitHub
/// flavoured syntax with tables, sanitized output and typographic
/// punctuation. Deserializing fills missing fields from the defaults, so a
/// host can pass `{"smartypants": false}` and nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertOptions {
    /// GitHub-flavored extensions: strikethrough, task lists, footnotes,
    /// blockquote tags and bare-URL autolinks.
    pub gfm: bool,
    /// Pipe tables.
    pub tables: bool,
    /// Escape raw HTML and drop links with script-capable URL schemes.
    pub sanitize: bool,
    /// Curly quotes, en/em dashes and ellipses.
    pub smartypants: bool,
    /// Render single newlines inside paragraphs as `<br />`.
    pub breaks: bool,
    /// Reject inputs longer than this many bytes.
    pub max_input_len: Option<usize>,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            gfm: true,
            tables: true,
            sanitize: true,
            smartypants: true,
            breaks: false,
            max_input_len: None,
        }
    }
}

impl ConvertOptions {
    /// Options with every extension disabled: plain CommonMark, unsanitized.
    pub fn commonmark() -> Self {
        Self {
            gfm: false,
            tables: false,
            sanitize: false,
            smartypants: false,
            breaks: false,
            max_input_len: None,
        }
    }

    pub fn with_gfm(mut self, enabled: bool) -> Self {
        self.gfm = enabled;
        self
    }

    pub fn with_tables(mut self, enabled: bool) -> Self {
        self.tables = enabled;
        self
    }

    pub fn with_sanitize(mut self, enabled: bool) -> Self {
        self.sanitize = enabled;
        self
    }

    pub fn with_smartypants(mut self, enabled: bool) -> Self {
        self.smartypants = enabled;
        self
    }

    pub fn with_breaks(mut self, enabled: bool) -> Self {
        self.breaks = enabled;
        self
    }

    pub fn with_max_input_len(mut self, limit: Option<usize>) -> Self {
        self.max_input_len = limit;
        self
    }

    /// Parser flags for pulldown-cmark.
    pub(crate) fn parser_options(&self) -> Options {
        let mut opts = Options::empty();
        if self.gfm {
            opts.insert(Options::ENABLE_STRIKETHROUGH);
            opts.insert(Options::ENABLE_TASKLISTS);
            opts.insert(Options::ENABLE_FOOTNOTES);
            opts.insert(Options::ENABLE_GFM);
        }
        if self.tables {
            opts.insert(Options::ENABLE_TABLES);
        }
        if self.smartypants {
            opts.insert(Options::ENABLE_SMART_PUNCTUATION);
        }
        opts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_enables_viewer_extensions() {
        let opts = ConvertOptions::default().parser_options();
        assert!(opts.contains(Options::ENABLE_TABLES));
        assert!(opts.contains(Options::ENABLE_STRIKETHROUGH));
        assert!(opts.contains(Options::ENABLE_SMART_PUNCTUATION));
    }

    #[test]
    fn test_commonmark_has_no_extensions() {
        assert!(ConvertOptions::commonmark().parser_options().is_empty());
    }

    #[test]
    fn test_builder() {
        let opts = ConvertOptions::default()
            .with_tables(false)
            .with_breaks(true)
            .with_max_input_len(Some(10));
        assert!(!opts.tables);
        assert!(opts.breaks);
        assert_eq!(opts.max_input_len, Some(10));
        assert!(!opts.parser_options().contains(Options::ENABLE_TABLES));
    }

    #[test]
    fn test_partial_deserialize_uses_defaults() {
        let opts: ConvertOptions = serde_json::from_str(r#"{"smartypants": false}"#).unwrap();
        assert!(!opts.smartypants);
        assert!(opts.gfm);
        assert!(opts.sanitize);
        assert_eq!(opts.max_input_len, None);
    }
}
