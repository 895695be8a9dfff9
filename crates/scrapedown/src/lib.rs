//! # scrapedown
//!
//! Scrape rendered documentation pages back into Markdown.
//!
//! Documentation generators render Markdown into HTML; sometimes only the
//! rendered page survives. This library walks the direct children of a
//! designated root element and rebuilds Markdown from them, one per-tag
//! rule at a time.
//!
//! ## Design
//!
//! The converter operates on an owned, parser-agnostic [`Element`] tree
//! rather than on a live document. This design allows:
//!
//! - **Synthetic trees in tests**: No document environment required
//! - **Parser agnostic**: Any HTML parser can snapshot into the tree
//! - **Smaller binaries**: No HTML parser bundled unless the `html`
//!   feature is enabled
//!
//! Dispatch is a closed table: `h1`, `p`, and `span` have rules, and every
//! other tag contributes nothing. Only direct children of the root are
//! visited.
//!
//! ## Example (tree-based)
//!
//! ```rust
//! use scrapedown::{Element, Node, ScrapedownService};
//!
//! let mut root = Element::new("main");
//! let mut h1 = Element::new("h1");
//! h1.push(Node::text("Hello World"));
//! root.push(h1);
//!
//! let service = ScrapedownService::new(&root);
//! assert_eq!(service.markdown(), "# Hello World\n");
//! ```
//!
//! ## Example (HTML string)
//!
//! ```rust
//! use scrapedown::markdown_from_html;
//!
//! let html = r#"<div id="docs"><h1>Hello World</h1></div>"#;
//! let markdown = markdown_from_html(html, "#docs").unwrap();
//! assert_eq!(markdown, "# Hello World\n");
//! ```

#[cfg(feature = "html")]
pub mod html;
pub mod node;
mod rules;
mod service;
mod utilities;

#[cfg(feature = "html")]
pub use html::{markdown_from_html, resolve_root};
pub use node::{Element, Node};
pub use rules::{Filter, Rule, Rules};
pub use service::{ScrapeOptions, ScrapedownService, TraceFn};
pub use utilities::*;

/// Error type for scrapedown operations
#[derive(Debug, thiserror::Error)]
pub enum ScrapedownError {
    #[error("`{0}` is not a valid CSS selector")]
    InvalidSelector(String),

    #[error("selector `{0}` matched no element")]
    RootNotFound(String),
}

pub type Result<T> = std::result::Result<T, ScrapedownError>;
