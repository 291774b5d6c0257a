//! Markdown to HTML conversion.
//!
//! This is the converter the renderer feeds a plain-text page through:
//!
//! - `options`: the [`ConvertOptions`] switches (GFM, tables, sanitize,
//!   smart punctuation, line breaks, input limit)
//! - `convert`: pulldown-cmark parsing plus event rewriting passes
//! - [`slugify`]: GitHub-style slugs used as heading ids
//! - `autolink`: bare URL detection for GFM literal autolinks
//!
//! ## Design Notes
//!
//! - **Heading ids** are always assigned by the converter. A heading whose
//!   text yields an empty slug gets no id at all, and ids are not
//!   de-duplicated, so anchors stay a pure function of the heading text.
//! - **Sanitizing** happens on the event stream rather than on the output:
//!   raw HTML is turned into text before the writer sees it, so there is no
//!   second HTML parse on the conversion path.

mod autolink;
mod convert;
mod options;
mod slugify;

pub use convert::to_html;
pub use options::ConvertOptions;
pub use slugify::slugify;
