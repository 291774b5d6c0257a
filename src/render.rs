//! The plain-text-to-Markdown renderer.
//!
//! A single pass per document: check the content type, convert the body
//! text, build the outline, render the page template and write it back.
//! Every fallible step runs before the document is touched, so a failed
//! pass leaves the page as it was.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::document::{Document, PLAIN_TEXT, ROOT_CLASS};
use crate::error::Result;
use crate::markdown::{self, ConvertOptions};
use crate::nav::{self, NavEntry};
use crate::template::{Template, ViewModel};

/// Renderer settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub options: ConvertOptions,
    /// Class set on the root element of a rendered page.
    pub root_class: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            options: ConvertOptions::default(),
            root_class: ROOT_CLASS.to_string(),
        }
    }
}

impl RenderConfig {
    pub fn with_options(mut self, options: ConvertOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_root_class(mut self, class: impl Into<String>) -> Self {
        self.root_class = class.into();
        self
    }
}

/// What a render pass did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The document is not plain text; nothing was changed.
    Skipped,
    /// The body was replaced. `headings` counts the outline entries.
    Rendered { headings: usize },
}

/// A rendered page before it is written to a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Converted Markdown.
    pub content: String,
    pub nav: Vec<NavEntry>,
    /// Template output for the document body.
    pub body: String,
}

/// Renders plain-text documents as Markdown pages.
#[derive(Debug)]
pub struct Renderer {
    config: RenderConfig,
    template: Template,
}

impl Renderer {
    /// A renderer using the bundled page template.
    pub fn new(config: RenderConfig) -> Result<Self> {
        Ok(Self::with_template(config, Template::new()?))
    }

    pub fn with_template(config: RenderConfig, template: Template) -> Self {
        Self { config, template }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Whether `doc` qualifies for rendering: its content type must be
    /// exactly `text/plain`.
    pub fn applies_to<D: Document + ?Sized>(&self, doc: &D) -> bool {
        doc.content_type() == PLAIN_TEXT
    }

    /// Convert Markdown text into a page without touching any document.
    pub fn render_text(&self, text: &str) -> Result<Page> {
        let content = markdown::to_html(text, &self.config.options)?;
        let nav = nav::extract_nav(&content);
        let view = ViewModel { content, nav };
        let body = self.template.render(&view)?;

        Ok(Page {
            content: view.content,
            nav: view.nav,
            body,
        })
    }

    /// Render `doc` in place if it is a plain-text document.
    ///
    /// Errors from conversion or the template propagate and leave the
    /// document unmodified.
    pub fn run<D: Document + ?Sized>(&self, doc: &mut D) -> Result<Outcome> {
        if !self.applies_to(doc) {
            debug!(
                "skipping document with content type {:?}",
                doc.content_type()
            );
            return Ok(Outcome::Skipped);
        }

        let page = {
            let text = doc.body_text()?;
            self.render_text(&text)?
        };

        doc.replace_body(&page.body)?;
        doc.set_root_class(&self.config.root_class)?;

        debug!(
            "rendered {} bytes of html with {} outline entries",
            page.content.len(),
            page.nav.len()
        );
        Ok(Outcome::Rendered {
            headings: page.nav.len(),
        })
    }
}

/// Render `doc` with the default configuration.
///
/// This is the entry point a host calls once its document is ready.
pub fn run<D: Document + ?Sized>(doc: &mut D) -> Result<Outcome> {
    Renderer::new(RenderConfig::default())?.run(doc)
}
