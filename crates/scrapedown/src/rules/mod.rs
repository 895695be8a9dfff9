//! Rule system for page-to-Markdown conversion.

mod page;
mod rule;

pub use page::page_rules;
pub use rule::{Filter, Rule};

use indexmap::IndexMap;

use crate::node::Element;

/// Collection of rules for conversion.
///
/// Custom rules are checked before the built-in page rules, in insertion
/// order. An element no rule matches contributes nothing to the output.
pub struct Rules {
    /// Custom rules added by the user (checked first)
    custom_rules: IndexMap<String, Rule>,
    /// Built-in page rules
    page_rules: Vec<Rule>,
}

impl Rules {
    /// Create a new Rules instance with the built-in page rules
    pub fn new() -> Self {
        Self {
            custom_rules: IndexMap::new(),
            page_rules: page_rules(),
        }
    }

    /// Add a custom rule
    pub fn add(&mut self, key: &str, rule: Rule) {
        self.custom_rules.insert(key.to_string(), rule);
    }

    /// Find the rule for an element, if any
    pub fn for_element<'a>(&'a self, element: &Element) -> Option<&'a Rule> {
        let tag = element.tag();

        self.custom_rules
            .values()
            .find(|rule| rule.filter.matches(tag))
            .or_else(|| self.page_rules.iter().find(|rule| rule.filter.matches(tag)))
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::new()
    }
}
