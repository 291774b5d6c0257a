//! Helpers for loading text documents from raw bytes.

use std::borrow::Cow;
use std::path::Path;

/// Decode bytes to a string, handling various encodings.
///
/// This function:
/// 1. First tries UTF-8 (handles BOM automatically via encoding_rs)
/// 2. If malformed, tries the hint encoding (from a `charset=` parameter)
/// 3. Falls back to Windows-1252 (common in old text files)
///
/// Uses `Cow<str>` to avoid allocation when the input is valid UTF-8.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(decode_text("Hello, World!".as_bytes(), None), "Hello, World!");
/// assert_eq!(decode_text(b"caf\xe9", Some("latin1")), "café");
/// ```
pub fn decode_text<'a>(bytes: &'a [u8], hint_encoding: Option<&str>) -> Cow<'a, str> {
    // Try UTF-8 first (handles BOM automatically)
    let (result, _encoding, malformed) = encoding_rs::UTF_8.decode(bytes);

    if !malformed {
        return result;
    }

    if let Some(name) = hint_encoding
        && let Some(encoding) = encoding_rs::Encoding::for_label(name.as_bytes())
    {
        let (result, _, _) = encoding.decode(bytes);
        return result;
    }

    // Fallback: Windows-1252 (superset of ISO-8859-1)
    let (result, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
    result
}

/// Extract the `charset` parameter from a content type header value.
///
/// ```ignore
/// assert_eq!(charset_param("text/plain; charset=\"ISO-8859-1\""), Some("ISO-8859-1"));
/// ```
pub fn charset_param(content_type: &str) -> Option<&str> {
    content_type.split(';').skip(1).find_map(|param| {
        let (key, value) = param.split_once('=')?;
        if key.trim().eq_ignore_ascii_case("charset") {
            let value = value.trim().trim_matches(|c| c == '"' || c == '\'');
            (!value.is_empty()).then_some(value)
        } else {
            None
        }
    })
}

/// Guess a document's content type from its file extension.
///
/// Markdown sources are served as plain text, which is what makes them
/// eligible for rendering.
pub fn content_type_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("txt" | "text" | "md" | "markdown" | "mdown" | "mkd") => "text/plain",
        Some("html" | "htm" | "xhtml") => "text/html",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_utf8() {
        let decoded = decode_text("naïve “quotes”".as_bytes(), None);
        assert!(matches!(decoded, Cow::Borrowed(_)));
        assert_eq!(decoded, "naïve “quotes”");
    }

    #[test]
    fn test_decode_strips_bom() {
        assert_eq!(decode_text(b"\xEF\xBB\xBF# Title", None), "# Title");
    }

    #[test]
    fn test_decode_with_hint() {
        // 0xE9 is é in ISO-8859-1, invalid on its own in UTF-8
        assert_eq!(decode_text(b"caf\xe9", Some("iso-8859-1")), "café");
    }

    #[test]
    fn test_decode_falls_back_to_cp1252() {
        // 0x93/0x94 are curly quotes in Windows-1252
        assert_eq!(decode_text(b"\x93hi\x94", None), "“hi”");
        assert_eq!(decode_text(b"\x93hi\x94", Some("bogus")), "“hi”");
    }

    #[test]
    fn test_charset_param() {
        assert_eq!(charset_param("text/plain; charset=utf-8"), Some("utf-8"));
        assert_eq!(
            charset_param("text/plain;Charset=\"ISO-8859-1\""),
            Some("ISO-8859-1")
        );
        assert_eq!(charset_param("text/plain"), None);
        assert_eq!(charset_param("text/plain; charset="), None);
        assert_eq!(charset_param("text/plain; format=flowed"), None);
    }

    #[test]
    fn test_content_type_for_path() {
        assert_eq!(content_type_for_path(Path::new("README.md")), "text/plain");
        assert_eq!(content_type_for_path(Path::new("notes.TXT")), "text/plain");
        assert_eq!(content_type_for_path(Path::new("index.html")), "text/html");
        assert_eq!(
            content_type_for_path(Path::new("archive.zip")),
            "application/octet-stream"
        );
        assert_eq!(
            content_type_for_path(Path::new("Makefile")),
            "application/octet-stream"
        );
    }
}
