//! HTML parsing and root resolution.
//!
//! This module bridges a real HTML document to the parser-agnostic tree
//! in [`crate::node`]: parse the page, resolve the scrape root by CSS
//! selector, and snapshot the matched subtree into an owned [`Element`].

use scraper::{ElementRef, Html, Node as ScraperNode, Selector};

use crate::node::{Element, Node};
use crate::service::ScrapedownService;
use crate::{Result, ScrapedownError};

/// Parse an HTML document and resolve the scrape root by CSS selector.
///
/// Resolution fails fast: a selector that matches nothing returns
/// [`ScrapedownError::RootNotFound`] rather than an empty document. When
/// the selector matches more than one element, the first match in
/// document order is used.
///
/// # Example
///
/// ```rust
/// use scrapedown::{resolve_root, ScrapedownService};
///
/// let html = r#"<div id="docs"><p>Hello</p></div>"#;
/// let root = resolve_root(html, "#docs").unwrap();
///
/// let service = ScrapedownService::new(&root);
/// assert_eq!(service.markdown(), "\nHello\n");
/// ```
pub fn resolve_root(html: &str, selector: &str) -> Result<Element> {
    let parsed = Selector::parse(selector)
        .map_err(|_| ScrapedownError::InvalidSelector(selector.to_string()))?;
    let document = Html::parse_document(html);

    let mut matches = document.select(&parsed);
    let Some(root) = matches.next() else {
        return Err(ScrapedownError::RootNotFound(selector.to_string()));
    };
    if matches.next().is_some() {
        log::debug!("selector `{selector}` matched more than one element, using the first");
    }

    Ok(snapshot(root))
}

/// Convert an HTML document to Markdown in one call, scraping the
/// element matched by `selector` with default options.
pub fn markdown_from_html(html: &str, selector: &str) -> Result<String> {
    let root = resolve_root(html, selector)?;
    Ok(ScrapedownService::new(&root).markdown())
}

/// Copy a scraper element into an owned Element tree
fn snapshot(element: ElementRef) -> Element {
    let mut node = Element::with_attrs(element.value().name(), element.value().attrs());

    for child in element.children() {
        match child.value() {
            ScraperNode::Text(text) => {
                node.push(Node::text(&text.text));
            }
            ScraperNode::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    node.push(snapshot(child_element));
                }
            }
            _ => {}
        }
    }

    node
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utilities::ANCHOR_ARTIFACT;

    #[test]
    fn test_resolve_root() {
        let root = resolve_root(r#"<div id="docs"><p>Hello</p></div>"#, "#docs").unwrap();
        assert_eq!(root.tag(), "div");
        assert_eq!(root.attr("id"), Some("docs"));
        assert_eq!(root.element_children().count(), 1);
    }

    #[test]
    fn test_root_not_found() {
        let result = resolve_root("<div><p>Hello</p></div>", "#missing");
        assert!(matches!(result, Err(ScrapedownError::RootNotFound(_))));
    }

    #[test]
    fn test_invalid_selector() {
        let result = resolve_root("<div></div>", "[");
        assert!(matches!(result, Err(ScrapedownError::InvalidSelector(_))));
    }

    #[test]
    fn test_first_match_wins() {
        let html = r#"<div class="doc"><p>first</p></div><div class="doc"><p>second</p></div>"#;
        let root = resolve_root(html, ".doc").unwrap();
        assert_eq!(root.text(), "first");
    }

    #[test]
    fn test_markdown_from_html() {
        let html = format!(
            r#"<main id="content"><h1>Title{artifact}</h1><p>Some text.</p><span>ignored</span><h1>Second{artifact}</h1></main>"#,
            artifact = ANCHOR_ARTIFACT
        );
        let markdown = markdown_from_html(&html, "#content").unwrap();
        assert_eq!(markdown, "# Title\n\nSome text.\n# Second\n");
    }

    #[test]
    fn test_heading_anchor_child_is_flattened_then_stripped() {
        // Anchor generators put the permalink glyph inside a child link.
        let html = format!(
            r#"<div id="docs"><h1>Overview<a class="headerlink">{}</a></h1></div>"#,
            ANCHOR_ARTIFACT
        );
        let markdown = markdown_from_html(&html, "#docs").unwrap();
        assert_eq!(markdown, "# Overview\n");
    }

    #[test]
    fn test_nested_blocks_not_scraped() {
        let html = r#"<div id="docs"><section><h1>Buried</h1></section><p>kept</p></div>"#;
        let markdown = markdown_from_html(html, "#docs").unwrap();
        assert_eq!(markdown, "\nkept\n");
    }
}
