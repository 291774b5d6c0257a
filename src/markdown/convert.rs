//! Markdown to HTML conversion.
//!
//! Parsing is done by pulldown-cmark; the event stream is then rewritten in
//! a few passes before it reaches the HTML writer:
//!
//! 1. headings receive slug ids
//! 2. raw HTML and script-capable links are neutralized (`sanitize`)
//! 3. bare URLs in text become links (`gfm`)
//! 4. soft breaks become hard breaks (`breaks`)

use log::{debug, warn};
use pulldown_cmark::{CowStr, Event, LinkType, Parser, Tag, TagEnd, html};

use super::autolink::find_urls;
use super::options::ConvertOptions;
use super::slugify::slugify;
use crate::error::{Error, Result};

const UNSAFE_SCHEMES: [&str; 3] = ["javascript:", "vbscript:", "data:"];

/// Convert Markdown source to an HTML fragment.
///
/// Every heading with a non-empty slug carries it as its `id`; headings
/// whose text has no letters or digits are left without one. Fails only
/// when the input exceeds [`ConvertOptions::max_input_len`].
///
/// # Example
///
/// ```
/// use mdview::markdown::{ConvertOptions, to_html};
///
/// let html = to_html("# Title\n\nSome *text*.", &ConvertOptions::default()).unwrap();
/// assert!(html.contains(r#"<h1 id="title">Title</h1>"#));
/// assert!(html.contains("<em>text</em>"));
/// ```
pub fn to_html(text: &str, options: &ConvertOptions) -> Result<String> {
    if let Some(limit) = options.max_input_len
        && text.len() > limit
    {
        return Err(Error::InputTooLarge {
            len: text.len(),
            limit,
        });
    }

    let mut events: Vec<Event<'_>> = Parser::new_ext(text, options.parser_options()).collect();

    assign_heading_ids(&mut events);
    if options.sanitize {
        events = sanitize(events);
    }
    if options.gfm {
        events = autolink(events);
    }
    if options.breaks {
        for event in &mut events {
            if matches!(event, Event::SoftBreak) {
                *event = Event::HardBreak;
            }
        }
    }

    let mut out = String::with_capacity(text.len() + text.len() / 2);
    html::push_html(&mut out, events.into_iter());
    debug!("converted {} bytes of markdown to {} bytes of html", text.len(), out.len());
    Ok(out)
}

fn assign_heading_ids(events: &mut [Event<'_>]) {
    let mut i = 0;
    while i < events.len() {
        if let Event::Start(Tag::Heading { id: None, .. }) = &events[i] {
            let mut label = String::new();
            let mut end = i + 1;
            while end < events.len() {
                match &events[end] {
                    Event::End(TagEnd::Heading(_)) => break,
                    Event::Text(text) | Event::Code(text) => label.push_str(text),
                    _ => {}
                }
                end += 1;
            }

            let slug = slugify(&label);
            if !slug.is_empty()
                && let Event::Start(Tag::Heading { id, .. }) = &mut events[i]
            {
                *id = Some(CowStr::from(slug));
            }
            i = end;
        }
        i += 1;
    }
}

fn is_unsafe_url(url: &str) -> bool {
    let scheme: String = url
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .take(16)
        .flat_map(char::to_lowercase)
        .collect();
    UNSAFE_SCHEMES.iter().any(|s| scheme.starts_with(s))
}

/// Escape raw HTML and unwrap links or images pointing at script-capable
/// URLs, keeping their text.
fn sanitize(events: Vec<Event<'_>>) -> Vec<Event<'_>> {
    let mut out = Vec::with_capacity(events.len());
    // One flag per open link/image: true when its tags were dropped.
    let mut links: Vec<bool> = Vec::new();
    let mut images: Vec<bool> = Vec::new();

    for event in events {
        match &event {
            Event::Start(Tag::Link { dest_url, .. }) => {
                let dropped = is_unsafe_url(dest_url);
                if dropped {
                    warn!("dropping link with unsafe destination: {dest_url}");
                }
                links.push(dropped);
                if dropped {
                    continue;
                }
            }
            Event::Start(Tag::Image { dest_url, .. }) => {
                let dropped = is_unsafe_url(dest_url);
                if dropped {
                    warn!("dropping image with unsafe source: {dest_url}");
                }
                images.push(dropped);
                if dropped {
                    continue;
                }
            }
            Event::End(TagEnd::Link) if links.pop().unwrap_or(false) => continue,
            Event::End(TagEnd::Image) if images.pop().unwrap_or(false) => continue,
            _ => {}
        }

        out.push(match event {
            Event::Start(Tag::HtmlBlock) => Event::Start(Tag::Paragraph),
            Event::End(TagEnd::HtmlBlock) => Event::End(TagEnd::Paragraph),
            Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
            other => other,
        });
    }

    out
}

/// Turn bare URLs in ordinary text into links. Text inside links, images
/// and code blocks is left alone.
fn autolink(events: Vec<Event<'_>>) -> Vec<Event<'_>> {
    let mut out = Vec::with_capacity(events.len());
    let mut opaque = 0usize;
    // The parser may split one run of text over several events.
    let mut run = String::new();

    for event in events {
        if opaque == 0
            && let Event::Text(text) = &event
        {
            run.push_str(text);
            continue;
        }
        flush_text(&mut run, &mut out);

        match &event {
            Event::Start(Tag::Link { .. } | Tag::Image { .. } | Tag::CodeBlock(_)) => opaque += 1,
            Event::End(TagEnd::Link | TagEnd::Image | TagEnd::CodeBlock) => {
                opaque = opaque.saturating_sub(1);
            }
            _ => {}
        }
        out.push(event);
    }
    flush_text(&mut run, &mut out);

    out
}

fn flush_text(run: &mut String, out: &mut Vec<Event<'_>>) {
    if run.is_empty() {
        return;
    }
    let text = std::mem::take(run);
    let urls = find_urls(&text);
    if urls.is_empty() {
        out.push(Event::Text(text.into()));
        return;
    }

    let mut last = 0;
    for url in urls {
        if url.range.start > last {
            out.push(Event::Text(text[last..url.range.start].to_string().into()));
        }
        out.push(Event::Start(Tag::Link {
            link_type: LinkType::Autolink,
            dest_url: url.href.into(),
            title: "".into(),
            id: "".into(),
        }));
        out.push(Event::Text(text[url.range.clone()].to_string().into()));
        out.push(Event::End(TagEnd::Link));
        last = url.range.end;
    }
    if last < text.len() {
        out.push(Event::Text(text[last..].to_string().into()));
    }
}
