//! Host documents.
//!
//! The renderer never talks to a browser directly. A host exposes the page
//! through the [`Document`] trait: the browser extension wraps the live DOM
//! (see the `wasm` module), while [`TextDocument`] keeps everything in
//! memory for the CLI and for tests.

use std::borrow::Cow;
use std::path::Path;

use crate::error::Result;
use crate::util::{charset_param, content_type_for_path, decode_text};

/// The only content type the renderer acts on.
pub const PLAIN_TEXT: &str = "text/plain";

/// Class set on the root element of a rendered page; the viewer's styles
/// key off it.
pub const ROOT_CLASS: &str = "markdown-viewer";

/// A page the renderer can inspect and rewrite.
pub trait Document {
    /// The document's declared content type.
    fn content_type(&self) -> Cow<'_, str>;

    /// The visible text of the body, not its markup.
    fn body_text(&self) -> Result<Cow<'_, str>>;

    /// Replace the body's markup.
    fn replace_body(&mut self, html: &str) -> Result<()>;

    /// Set the class attribute of the root element.
    fn set_root_class(&mut self, class: &str) -> Result<()>;
}

/// In-memory document.
///
/// Starts out as a text page: the body holds the source text and no root
/// class. After rendering, [`body_html`](Self::body_html) holds the page
/// body and [`to_html`](Self::to_html) serializes a complete page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextDocument {
    content_type: String,
    text: String,
    body_html: Option<String>,
    root_class: Option<String>,
}

impl TextDocument {
    /// A `text/plain` document with the given body text.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            content_type: PLAIN_TEXT.to_string(),
            text: text.into(),
            body_html: None,
            root_class: None,
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    /// Decode raw bytes served with `content_type`.
    ///
    /// A `charset` parameter in the content type is used when the bytes are
    /// not valid UTF-8. Only the media type itself is kept as the
    /// document's content type, the way a browser reports it.
    pub fn from_bytes(bytes: &[u8], content_type: &str) -> Self {
        let text = decode_text(bytes, charset_param(content_type));
        let media_type = content_type.split(';').next().unwrap_or_default().trim();
        Self::plain(text).with_content_type(media_type)
    }

    /// Load a file, guessing its content type from the extension.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        Ok(Self::from_bytes(&bytes, content_type_for_path(path)))
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Body markup set by the renderer, if it ran.
    pub fn body_html(&self) -> Option<&str> {
        self.body_html.as_deref()
    }

    pub fn root_class(&self) -> Option<&str> {
        self.root_class.as_deref()
    }

    /// Whether the body has been replaced.
    pub fn is_rendered(&self) -> bool {
        self.body_html.is_some()
    }

    /// Serialize a complete HTML page.
    ///
    /// An unrendered document shows its text in a `<pre>`, the way browsers
    /// display plain text.
    pub fn to_html(&self) -> String {
        let class = self
            .root_class
            .as_deref()
            .map(|c| format!(" class=\"{}\"", escape(c)))
            .unwrap_or_default();
        let body = match &self.body_html {
            Some(html) => Cow::Borrowed(html.as_str()),
            None => Cow::Owned(format!("<pre>{}</pre>", escape(&self.text))),
        };

        format!(
            "<!DOCTYPE html>\n<html{class}>\n<head>\n<meta charset=\"utf-8\">\n</head>\n<body>\n{body}\n</body>\n</html>\n"
        )
    }
}

impl Document for TextDocument {
    fn content_type(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.content_type)
    }

    fn body_text(&self) -> Result<Cow<'_, str>> {
        Ok(Cow::Borrowed(&self.text))
    }

    fn replace_body(&mut self, html: &str) -> Result<()> {
        self.body_html = Some(html.to_string());
        Ok(())
    }

    fn set_root_class(&mut self, class: &str) -> Result<()> {
        self.root_class = Some(class.to_string());
        Ok(())
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
    out
}
