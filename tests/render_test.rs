//! End-to-end rendering tests.
//!
//! These drive the renderer through the `Document` trait the way a host
//! page does: one pass over a document, then inspect what changed.

use std::borrow::Cow;

use mdview::nav::extract_nav;
use mdview::{
    ConvertOptions, Document, Outcome, RenderConfig, Renderer, Result, Template, TextDocument,
    ViewModel, run,
};
use proptest::prelude::*;

/// A host that records every mutation.
#[derive(Default)]
struct RecordingDocument {
    content_type: String,
    text: String,
    writes: Vec<String>,
}

impl RecordingDocument {
    fn new(content_type: &str, text: &str) -> Self {
        Self {
            content_type: content_type.to_string(),
            text: text.to_string(),
            writes: Vec::new(),
        }
    }
}

impl Document for RecordingDocument {
    fn content_type(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.content_type)
    }

    fn body_text(&self) -> Result<Cow<'_, str>> {
        Ok(Cow::Borrowed(&self.text))
    }

    fn replace_body(&mut self, html: &str) -> Result<()> {
        self.writes.push(format!("body:{html}"));
        Ok(())
    }

    fn set_root_class(&mut self, class: &str) -> Result<()> {
        self.writes.push(format!("class:{class}"));
        Ok(())
    }
}

// ============================================================================
// Applicability
// ============================================================================

#[test]
fn test_non_plain_text_is_not_mutated() {
    let mut doc = RecordingDocument::new("text/html", "# Title");
    assert_eq!(run(&mut doc).unwrap(), Outcome::Skipped);
    assert!(doc.writes.is_empty());
}

#[test]
fn test_body_written_before_root_class() {
    let mut doc = RecordingDocument::new("text/plain", "# Title");
    run(&mut doc).unwrap();
    assert_eq!(doc.writes.len(), 2);
    assert!(doc.writes[0].starts_with("body:"));
    assert_eq!(doc.writes[1], "class:markdown-viewer");
}

#[test]
fn test_trait_object_host() {
    let mut doc: Box<dyn Document> = Box::new(TextDocument::plain("# Boxed"));
    let renderer = Renderer::new(RenderConfig::default()).unwrap();
    assert_eq!(
        renderer.run(doc.as_mut()).unwrap(),
        Outcome::Rendered { headings: 1 }
    );
}

// ============================================================================
// Rendered content
// ============================================================================

#[test]
fn test_empty_body_renders_empty_view() {
    let mut doc = TextDocument::plain("");
    run(&mut doc).unwrap();

    let expected = Template::new()
        .unwrap()
        .render(&ViewModel {
            content: String::new(),
            nav: vec![],
        })
        .unwrap();
    assert_eq!(doc.body_html(), Some(expected.as_str()));
    assert_eq!(doc.root_class(), Some("markdown-viewer"));
}

#[test]
fn test_title_document() {
    let renderer = Renderer::new(RenderConfig::default()).unwrap();
    let page = renderer.render_text("# Title\n\nSome *text*.").unwrap();

    assert_eq!(page.content.matches("<h1").count(), 1);
    assert_eq!(page.nav.len(), 1);
    assert_eq!(page.nav[0].level, 1);
    assert_eq!(page.nav[0].text, "Title");
    assert!(!page.nav[0].id.is_empty());
}

#[test]
fn test_heading_label_is_stripped() {
    let renderer = Renderer::new(RenderConfig::default()).unwrap();
    let page = renderer.render_text("## Hello *world*").unwrap();
    assert!(page.content.contains("Hello <em>world</em>"));
    assert_eq!(page.nav[0].text, "Hello world");
}

#[test]
fn test_curly_quotes() {
    let mut doc = TextDocument::plain(r#"A "quoted" word."#);
    run(&mut doc).unwrap();
    let body = doc.body_html().unwrap();
    assert!(body.contains("“quoted”"), "{body}");
    assert!(!body.contains("\"quoted\""), "{body}");
}

#[test]
fn test_nav_in_document_order() {
    let source = "### Deep\n\n# Top\n\ntext\n\n## Middle\n\n###### Tiny\n";
    let renderer = Renderer::new(RenderConfig::default()).unwrap();
    let page = renderer.render_text(source).unwrap();

    let outline: Vec<_> = page
        .nav
        .iter()
        .map(|e| (e.level, e.text.as_str()))
        .collect();
    assert_eq!(
        outline,
        vec![(3, "Deep"), (1, "Top"), (2, "Middle"), (6, "Tiny")]
    );
}

#[test]
fn test_heading_without_id_is_omitted() {
    let renderer = Renderer::new(RenderConfig::default()).unwrap();
    let page = renderer.render_text("# ???\n\n# Real").unwrap();
    assert_eq!(page.content.matches("<h1").count(), 2);
    assert_eq!(page.nav.len(), 1);
    assert_eq!(page.nav[0].id, "real");
}

#[test]
fn test_setext_and_table_document() {
    let source = "Overview\n========\n\n| Key | Value |\n|-----|-------|\n| a   | 1     |\n\nDetails\n-------\n";
    let renderer = Renderer::new(RenderConfig::default()).unwrap();
    let page = renderer.render_text(source).unwrap();
    assert!(page.content.contains("<table>"));
    let ids: Vec<_> = page.nav.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["overview", "details"]);
}

#[test]
fn test_script_in_source_is_inert() {
    let mut doc = TextDocument::plain("# Hi\n\n<script>alert('x')</script>\n\n[go](javascript:alert(1))");
    run(&mut doc).unwrap();
    let body = doc.body_html().unwrap();
    assert!(!body.contains("<script"), "{body}");
    assert!(!body.contains("javascript:"), "{body}");
}

#[test]
fn test_unsanitized_config() {
    let options = ConvertOptions::default().with_sanitize(false);
    let renderer = Renderer::new(RenderConfig::default().with_options(options)).unwrap();
    let page = renderer.render_text("<h2 id=\"raw\">Raw <b>heading</b></h2>").unwrap();
    assert_eq!(page.nav.len(), 1);
    assert_eq!(page.nav[0].id, "raw");
    assert_eq!(page.nav[0].text, "Raw heading");
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_other_content_types_never_mutate(
        content_type in "[a-z]{1,10}/[a-z+.-]{1,12}",
        text in "\\PC{0,200}",
    ) {
        prop_assume!(content_type != "text/plain");
        let mut doc = RecordingDocument::new(&content_type, &text);
        prop_assert_eq!(run(&mut doc).unwrap(), Outcome::Skipped);
        prop_assert!(doc.writes.is_empty());
    }

    #[test]
    fn prop_nav_matches_heading_order(
        headings in prop::collection::vec((1u8..=6, "[A-Za-z][A-Za-z0-9 ]{0,15}"), 0..12),
    ) {
        let source: String = headings
            .iter()
            .map(|(level, text)| format!("{} {}\n\n", "#".repeat(*level as usize), text))
            .collect();
        let renderer = Renderer::new(RenderConfig::default()).unwrap();
        let page = renderer.render_text(&source).unwrap();

        let levels: Vec<u8> = page.nav.iter().map(|e| e.level).collect();
        let expected: Vec<u8> = headings.iter().map(|(level, _)| *level).collect();
        prop_assert_eq!(levels, expected);
        prop_assert!(page.nav.iter().all(|e| !e.id.is_empty()));
        prop_assert_eq!(&page.nav, &extract_nav(&page.content));
    }
}
