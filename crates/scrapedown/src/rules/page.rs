//! Built-in rules for documentation page scraping.
//!
//! The table is deliberately closed: headings, paragraphs, and the anchor
//! spans that documentation generators sprinkle between them. Everything
//! else falls through to the registry's empty default.

use super::Rule;
use crate::utilities::strip_artifact;

/// Create the built-in page rules
pub fn page_rules() -> Vec<Rule> {
    vec![heading_rule(), paragraph_rule(), span_rule()]
}

fn heading_rule() -> Rule {
    Rule::for_tag("h1", |element, options| {
        let text = strip_artifact(&element.text(), &options.anchor_artifact);
        format!("# {}\n", text)
    })
}

fn paragraph_rule() -> Rule {
    Rule::for_tag("p", |element, _| format!("\n{}\n", element.text()))
}

// Anchor/permalink spans carry nothing worth keeping.
fn span_rule() -> Rule {
    Rule::for_tag("span", |_, _| String::new())
}
