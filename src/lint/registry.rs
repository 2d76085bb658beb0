//! Rule registry for managing lint rules.
//!
//! The [`RuleRegistry`] stores all available lint rules and provides
//! methods for registering, retrieving, and iterating over them.

use std::collections::HashMap;

use super::rule::{LintRule, RuleId};
use super::rules::NoTyposRule;
use crate::config::NotyposConfig;

/// Registry of all available lint rules.
pub struct RuleRegistry {
    rules: HashMap<RuleId, Box<dyn LintRule>>,
}

impl RuleRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            rules: HashMap::new(),
        }
    }

    /// Create a registry with all built-in rules at their default settings.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(NoTyposRule::new()));
        registry
    }

    /// Create a registry with all built-in rules configured from `config`.
    pub fn from_config(config: &NotyposConfig) -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(NoTyposRule::from_config(config)));
        registry
    }

    /// Register a lint rule.
    pub fn register(&mut self, rule: Box<dyn LintRule>) {
        self.rules.insert(rule.id(), rule);
    }

    /// Get a rule by ID.
    pub fn get(&self, id: &RuleId) -> Option<&dyn LintRule> {
        self.rules.get(id).map(|r| r.as_ref())
    }

    /// Iterate over all rules.
    pub fn iter(&self) -> impl Iterator<Item = &dyn LintRule> {
        self.rules.values().map(|r| r.as_ref())
    }

    /// All rules ordered by ID.
    pub fn sorted(&self) -> Vec<&dyn LintRule> {
        let mut rules: Vec<_> = self.iter().collect();
        rules.sort_by_key(|rule| rule.id());
        rules
    }

    /// Get the number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}
