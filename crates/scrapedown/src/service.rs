//! ScrapedownService - the main entry point for page-to-Markdown conversion.

use crate::node::Element;
use crate::rules::{Rule, Rules};
use crate::utilities::ANCHOR_ARTIFACT;

/// Options for ScrapedownService
#[derive(Debug, Clone)]
pub struct ScrapeOptions {
    /// Literal sequence stripped from heading text
    pub anchor_artifact: String,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            anchor_artifact: ANCHOR_ARTIFACT.to_string(),
        }
    }
}

/// Type alias for the diagnostic sink invoked with each visited tag name
pub type TraceFn = Box<dyn Fn(&str) + Send + Sync>;

fn default_trace() -> TraceFn {
    Box::new(|tag| log::trace!("visiting <{tag}>"))
}

/// The main service for converting a page subtree to Markdown.
///
/// The root element is captured at construction; [`markdown`] walks its
/// direct element children in document order and concatenates each
/// child's rule output. Bare text and comments between blocks are
/// skipped, and nothing below depth one is visited: a heading nested
/// inside a wrapper child is invisible.
///
/// The tree must not be mutated during a call; the shared borrow held by
/// the service enforces that.
///
/// [`markdown`]: ScrapedownService::markdown
pub struct ScrapedownService<'a> {
    root: &'a Element,
    options: ScrapeOptions,
    rules: Rules,
    trace: TraceFn,
}

impl<'a> ScrapedownService<'a> {
    /// Create a new service over a root element with default options
    pub fn new(root: &'a Element) -> Self {
        Self {
            root,
            options: ScrapeOptions::default(),
            rules: Rules::new(),
            trace: default_trace(),
        }
    }

    /// Create a service with custom options
    pub fn with_options(root: &'a Element, options: ScrapeOptions) -> Self {
        Self {
            root,
            options,
            rules: Rules::new(),
            trace: default_trace(),
        }
    }

    /// Replace the diagnostic sink.
    ///
    /// The default forwards each visited tag name to the `log` facade at
    /// trace level.
    pub fn with_trace<F>(mut self, trace: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.trace = Box::new(trace);
        self
    }

    /// Add a custom rule, checked before the built-in page rules
    pub fn add_rule(&mut self, key: &str, rule: Rule) -> &mut Self {
        self.rules.add(key, rule);
        self
    }

    /// Get the current options
    pub fn options(&self) -> &ScrapeOptions {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut ScrapeOptions {
        &mut self.options
    }

    /// Convert the root's direct children to Markdown.
    ///
    /// Pure with respect to the tree: repeated calls over an unchanged
    /// root return identical output.
    pub fn markdown(&self) -> String {
        let mut result = String::new();

        for child in self.root.element_children() {
            (self.trace)(child.tag());

            if let Some(rule) = self.rules.for_element(child) {
                result.push_str(&rule.replace(child, &self.options));
            }
        }

        result
    }
}
