//! Error types for mdview operations.

use thiserror::Error;

/// Errors that can occur while rendering a document.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("input too large: {len} bytes exceeds the limit of {limit}")]
    InputTooLarge { len: usize, limit: usize },

    #[error("Template error: {0}")]
    Template(#[from] handlebars::TemplateError),

    #[error("Template render error: {0}")]
    Render(#[from] handlebars::RenderError),

    #[error("Missing required element: {0}")]
    MissingElement(String),
}

pub type Result<T> = std::result::Result<T, Error>;
