//! WASM bindings for the browser extension.
//!
//! The extension's content script loads this module and calls
//! [`render_document`] once the page is ready. Loading the module renders
//! nothing by itself.

use std::borrow::Cow;

use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::prelude::*;

use crate::document::Document;
use crate::error::{Error, Result};
use crate::markdown::{self, ConvertOptions};
use crate::render::{self, Outcome};

/// `log` backend writing to the browser console.
struct ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from_str(&format!("[mdview] {}", record.args()));
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

static LOGGER: ConsoleLogger = ConsoleLogger;

/// Initialize the panic hook and console logging.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(LevelFilter::Warn);
    }
}

/// Turn on debug output in the console.
#[wasm_bindgen]
pub fn set_verbose(verbose: bool) {
    log::set_max_level(if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    });
}

/// The live page, as seen through `web_sys`.
pub struct BrowserDocument {
    document: web_sys::Document,
}

impl BrowserDocument {
    pub fn new(document: web_sys::Document) -> Self {
        Self { document }
    }

    /// The document of the current window.
    pub fn current() -> Result<Self> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| Error::MissingElement("document".to_string()))?;
        Ok(Self::new(document))
    }

    fn body(&self) -> Result<web_sys::HtmlElement> {
        self.document
            .body()
            .ok_or_else(|| Error::MissingElement("body".to_string()))
    }
}

impl Document for BrowserDocument {
    fn content_type(&self) -> Cow<'_, str> {
        Cow::Owned(self.document.content_type())
    }

    fn body_text(&self) -> Result<Cow<'_, str>> {
        Ok(Cow::Owned(self.body()?.inner_text()))
    }

    fn replace_body(&mut self, html: &str) -> Result<()> {
        self.body()?.set_inner_html(html);
        Ok(())
    }

    fn set_root_class(&mut self, class: &str) -> Result<()> {
        let root = self
            .document
            .document_element()
            .ok_or_else(|| Error::MissingElement("root element".to_string()))?;
        root.set_class_name(class);
        Ok(())
    }
}

/// Render the current page if it is a plain-text document.
///
/// Returns `true` when the page was rendered. Failures are thrown to the
/// caller as strings.
#[wasm_bindgen]
pub fn render_document() -> std::result::Result<bool, JsValue> {
    let mut doc = BrowserDocument::current().map_err(|e| JsValue::from_str(&e.to_string()))?;
    let outcome = render::run(&mut doc).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(matches!(outcome, Outcome::Rendered { .. }))
}

/// Convert Markdown text to HTML with the viewer's default options.
#[wasm_bindgen]
pub fn markdown_to_html(text: &str) -> std::result::Result<String, JsValue> {
    markdown::to_html(text, &ConvertOptions::default()).map_err(|e| JsValue::from_str(&e.to_string()))
}
