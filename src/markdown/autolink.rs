//! Bare URL detection for GitHub-style literal autolinks.
//!
//! Finds `http://`, `https://` and `www.` URLs in ordinary text. A URL
//! starts at the beginning of the text or after whitespace or an opening
//! delimiter, runs until whitespace or `<`, and gives back trailing
//! sentence punctuation and unbalanced closing parentheses.

use std::ops::Range;

const PREFIXES: [&str; 3] = ["https://", "http://", "www."];
const TRAILING_PUNCTUATION: &[char] = &['?', '!', '.', ',', ':', ';', '*', '_', '~', '\'', '"'];

/// A URL found in text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FoundUrl {
    /// Byte range of the URL in the scanned text.
    pub range: Range<usize>,
    /// Link destination; `www.` URLs get an `http://` scheme.
    pub href: String,
}

/// Find every literal URL in `text`, in order, without overlaps.
pub(crate) fn find_urls(text: &str) -> Vec<FoundUrl> {
    let bytes = text.as_bytes();
    let mut found = Vec::new();
    let mut resume = 0;

    for start in memchr::memchr2_iter(b'h', b'w', bytes) {
        if start < resume || !at_boundary(text, start) {
            continue;
        }
        let rest = &text[start..];
        let Some(prefix) = PREFIXES.iter().find(|p| rest.starts_with(**p)) else {
            continue;
        };

        let len = rest
            .find(|c: char| c.is_whitespace() || c == '<')
            .unwrap_or(rest.len());
        let end = start + trim_trailing(&text[start..start + len]);
        if end <= start + prefix.len() {
            continue;
        }

        let host = &text[start + prefix.len()..end];
        if !valid_host(host) {
            continue;
        }

        let url = &text[start..end];
        let href = if *prefix == "www." {
            format!("http://{url}")
        } else {
            url.to_string()
        };
        found.push(FoundUrl {
            range: start..end,
            href,
        });
        resume = end;
    }

    found
}

fn at_boundary(text: &str, start: usize) -> bool {
    match text[..start].chars().next_back() {
        None => true,
        Some(c) => c.is_whitespace() || matches!(c, '(' | '*' | '_' | '~'),
    }
}

/// Length of `url` once trailing punctuation is given back.
fn trim_trailing(url: &str) -> usize {
    let mut url = url;
    loop {
        if let Some(stripped) = url.strip_suffix(TRAILING_PUNCTUATION) {
            url = stripped;
        } else if url.ends_with(')') && url.matches(')').count() > url.matches('(').count() {
            url = &url[..url.len() - 1];
        } else {
            return url.len();
        }
    }
}

/// The part after the prefix must start with a domain label.
fn valid_host(host: &str) -> bool {
    host.chars().next().is_some_and(char::is_alphanumeric)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urls(text: &str) -> Vec<(&str, String)> {
        find_urls(text)
            .into_iter()
            .map(|u| (&text[u.range.clone()], u.href))
            .collect()
    }

    #[test]
    fn test_http_and_https() {
        assert_eq!(
            urls("see https://example.com/a?b=c and http://x.org"),
            vec![
                ("https://example.com/a?b=c", "https://example.com/a?b=c".to_string()),
                ("http://x.org", "http://x.org".to_string()),
            ]
        );
    }

    #[test]
    fn test_www_gets_scheme() {
        assert_eq!(
            urls("visit www.example.com today"),
            vec![("www.example.com", "http://www.example.com".to_string())]
        );
    }

    #[test]
    fn test_trailing_punctuation_excluded() {
        assert_eq!(urls("Go to https://example.com.")[0].0, "https://example.com");
        assert_eq!(urls("(https://example.com/a)")[0].0, "https://example.com/a");
        assert_eq!(
            urls("https://en.wikipedia.org/wiki/Rust_(language)")[0].0,
            "https://en.wikipedia.org/wiki/Rust_(language)"
        );
        assert_eq!(urls("really https://a.io?!")[0].0, "https://a.io");
    }

    #[test]
    fn test_requires_boundary() {
        assert!(urls("xhttps://example.com").is_empty());
        assert!(urls("awww.example.com").is_empty());
    }

    #[test]
    fn test_requires_host() {
        assert!(urls("https:// nothing").is_empty());
        assert!(urls("http://").is_empty());
        assert!(urls("www.").is_empty());
    }

    #[test]
    fn test_stops_at_angle_bracket() {
        assert_eq!(urls("https://a.io<b")[0].0, "https://a.io");
    }

    #[test]
    fn test_plain_words_untouched() {
        assert!(urls("what, when, how").is_empty());
    }
}
