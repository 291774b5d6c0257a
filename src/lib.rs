//! # mdview
//!
//! Render plain-text Markdown documents as formatted, navigable HTML.
//!
//! When a browser shows a `.md` file it serves it as `text/plain` and
//! displays the raw source. mdview turns such a page into a readable one:
//! the body text is converted from Markdown to sanitized HTML, an outline
//! is built from the headings, and the body is replaced by a page with a
//! table of contents and the rendered content.
//!
//! ## Features
//!
//! - GitHub-flavored Markdown with tables, task lists and bare-URL autolinks
//! - Raw HTML and `javascript:` links neutralized during conversion
//! - Typographic punctuation (curly quotes, dashes, ellipses)
//! - Heading outline extracted with a real HTML parser
//! - Runs against any host through the [`Document`] trait; a WebAssembly
//!   build drives the live browser page
//!
//! ## Quick Start
//!
//! ```
//! use mdview::{Outcome, TextDocument, run};
//!
//! let mut doc = TextDocument::plain("# Title\n\nSome *text*.");
//! assert_eq!(run(&mut doc).unwrap(), Outcome::Rendered { headings: 1 });
//! assert_eq!(doc.root_class(), Some("markdown-viewer"));
//! assert!(doc.body_html().unwrap().contains("<a href=\"#title\">Title</a>"));
//! ```
//!
//! Documents that are not `text/plain` are left alone:
//!
//! ```
//! use mdview::{Outcome, TextDocument, run};
//!
//! let mut doc = TextDocument::plain("# Title").with_content_type("text/html");
//! assert_eq!(run(&mut doc).unwrap(), Outcome::Skipped);
//! assert!(!doc.is_rendered());
//! ```

pub mod document;
pub mod dom;
pub mod error;
pub mod markdown;
pub mod nav;
pub mod render;
pub mod sanitize;
pub mod template;
pub(crate) mod util;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use document::{Document, PLAIN_TEXT, ROOT_CLASS, TextDocument};
pub use error::{Error, Result};
pub use markdown::ConvertOptions;
pub use nav::NavEntry;
pub use render::{Outcome, Page, RenderConfig, Renderer, run};
pub use template::{Template, ViewModel};
