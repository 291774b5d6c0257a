//! Heading anchor generation.
//!
//! Generates GitHub-style slugs from heading text for use as element ids.

/// Generate a GitHub-style slug from text.
///
/// Letters and digits are kept (lower-cased), runs of whitespace, `-` and
/// `_` collapse into a single hyphen, and everything else is dropped.
/// Leading and trailing hyphens are removed, so text with no letters or
/// digits yields an empty slug.
///
/// # Examples
///
/// ```
/// use mdview::markdown::slugify;
///
/// assert_eq!(slugify("Chapter One"), "chapter-one");
/// assert_eq!(slugify("Hello, World!"), "hello-world");
/// assert_eq!(slugify("  Multiple   Spaces  "), "multiple-spaces");
/// ```
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_hyphen = false;

    for c in text.chars() {
        if c.is_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.extend(c.to_lowercase());
        } else if c.is_whitespace() || c == '-' || c == '_' {
            pending_hyphen = true;
        }
    }

    slug
}
