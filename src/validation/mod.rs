//! Structural validation of workflow graphs.
//!
//! Validation is a pure function of the graph: it never mutates it, never
//! fails, and returns the same issues in the same order for the same input.

use crate::workflow::{GraphIndex, Workflow};
use itertools::Itertools;
use tracing::debug;

mod issue;
pub mod rules;

pub use issue::*;
pub use rules::ValidationRule;

use rules::register_default_rules;

/// Runs a fixed list of rules over a workflow.
pub struct Validator {
    rules: Vec<Box<dyn ValidationRule>>,
}

pub struct ValidatorBuilder {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl ValidatorBuilder {
    pub fn new() -> Self {
        let mut rules: Vec<Box<dyn ValidationRule>> = Vec::new();
        register_default_rules(&mut rules);
        Self { rules }
    }

    /// Starts from no rules at all instead of the built-in set.
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Appends a rule. It runs after every rule registered before it.
    pub fn with_rule(mut self, rule: Box<dyn ValidationRule>) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn build(self) -> Validator {
        Validator { rules: self.rules }
    }
}

impl Default for ValidatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for Validator {
    fn default() -> Self {
        ValidatorBuilder::new().build()
    }
}

impl Validator {
    pub fn builder() -> ValidatorBuilder {
        ValidatorBuilder::new()
    }

    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }

    /// Checks `workflow` and returns every issue found, errors and warnings interleaved
    /// in rule order.
    pub fn validate(&self, workflow: &Workflow) -> Vec<ValidationIssue> {
        let index = GraphIndex::new(workflow);
        let mut issues = Vec::new();
        for rule in &self.rules {
            rule.check(&index, &mut issues);
        }

        let errors = blocking(&issues).count();
        debug!(
            nodes = workflow.nodes.len(),
            edges = workflow.edges.len(),
            errors,
            warnings = issues.len() - errors,
            "Validated workflow"
        );
        issues
    }
}

/// Validates `workflow` with the built-in rules.
pub fn validate(workflow: &Workflow) -> Vec<ValidationIssue> {
    Validator::default().validate(workflow)
}

/// Keeps only the blocking issues, in their original order.
pub fn blocking(issues: &[ValidationIssue]) -> impl Iterator<Item = &ValidationIssue> {
    issues.iter().filter(|issue| issue.is_blocking())
}

pub fn has_blocking(issues: &[ValidationIssue]) -> bool {
    blocking(issues).next().is_some()
}

/// Renders issues one per line, errors first within their original order.
pub fn summarize(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .sorted_by_key(|issue| !issue.is_blocking())
        .map(ToString::to_string)
        .join("\n")
}
