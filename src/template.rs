//! Presentation template for rendered pages.
//!
//! The page shell (table of contents plus content area) is a Handlebars
//! template. The bundled one lives in `templates/body.hbs`; hosts can
//! supply their own as long as it uses the same [`ViewModel`] fields.

use std::path::Path;

use handlebars::Handlebars;
use serde::Serialize;

use crate::error::Result;
use crate::nav::NavEntry;

/// The bundled page template.
pub const BODY_TEMPLATE: &str = include_str!("../templates/body.hbs");

const TEMPLATE_NAME: &str = "body";

/// Data handed to the template.
///
/// `content` is the converted HTML and each entry's `text` is already
/// markup-free and escaped, so templates insert both with triple braces.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ViewModel {
    pub content: String,
    pub nav: Vec<NavEntry>,
}

/// A compiled page template.
pub struct Template {
    registry: Handlebars<'static>,
}

impl Template {
    /// The bundled template.
    pub fn new() -> Result<Self> {
        Self::from_source(BODY_TEMPLATE)
    }

    /// Compile a custom template.
    ///
    /// Strict mode is enabled: referencing a field the [`ViewModel`] does
    /// not have is a render error rather than an empty string.
    pub fn from_source(source: &str) -> Result<Self> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        registry.register_template_string(TEMPLATE_NAME, source)?;
        Ok(Self { registry })
    }

    /// Read and compile a template file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_source(&source)
    }

    /// Render a complete page body.
    pub fn render(&self, view: &ViewModel) -> Result<String> {
        Ok(self.registry.render(TEMPLATE_NAME, view)?)
    }
}

impl std::fmt::Debug for Template {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Template").finish_non_exhaustive()
    }
}
