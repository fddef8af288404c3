use super::issue::*;
use crate::workflow::{GraphIndex, NodeType};

/// Defines the contract for one category of structural checks.
///
/// Rules are independent: each sees the whole graph and appends whatever it
/// finds, regardless of what earlier rules reported.
pub trait ValidationRule: Send + Sync {
    fn name(&self) -> &str;
    fn check(&self, index: &GraphIndex<'_>, issues: &mut Vec<ValidationIssue>);
}

/// Exactly one start node and at least one end node.
pub struct EntryExitCardinality;

impl ValidationRule for EntryExitCardinality {
    fn name(&self) -> &str {
        "entry-exit-cardinality"
    }

    fn check(&self, index: &GraphIndex<'_>, issues: &mut Vec<ValidationIssue>) {
        let workflow = index.workflow();
        let mut starts = workflow.nodes_of_type(NodeType::Start);

        match (starts.next(), starts.next()) {
            (None, _) => issues.push(ValidationIssue::error(MISSING_START)),
            (Some(_), Some(second)) => {
                issues.push(ValidationIssue::error(MULTIPLE_STARTS).at(second.id.clone()))
            }
            (Some(_), None) => {}
        }

        if workflow.nodes_of_type(NodeType::End).next().is_none() {
            issues.push(ValidationIssue::error(MISSING_END));
        }
    }
}

/// Start nodes must lead somewhere and end nodes must be reachable by an edge.
pub struct EntryExitConnectivity;

impl ValidationRule for EntryExitConnectivity {
    fn name(&self) -> &str {
        "entry-exit-connectivity"
    }

    fn check(&self, index: &GraphIndex<'_>, issues: &mut Vec<ValidationIssue>) {
        if index.node_count() <= 1 {
            return;
        }
        let workflow = index.workflow();
        for node in workflow.nodes_of_type(NodeType::Start) {
            if !index.has_outgoing(&node.id) {
                issues.push(ValidationIssue::error(START_WITHOUT_OUTGOING).at(node.id.clone()));
            }
        }
        for node in workflow.nodes_of_type(NodeType::End) {
            if !index.has_incoming(&node.id) {
                issues.push(ValidationIssue::error(END_WITHOUT_INCOMING).at(node.id.clone()));
            }
        }
    }
}

/// Any node no edge touches gets an advisory warning.
pub struct DisconnectedNodes;

impl ValidationRule for DisconnectedNodes {
    fn name(&self) -> &str {
        "disconnected-nodes"
    }

    fn check(&self, index: &GraphIndex<'_>, issues: &mut Vec<ValidationIssue>) {
        // A lone node is never reported, even though it has no edges.
        if index.node_count() <= 1 {
            return;
        }
        issues.extend(
            index
                .workflow()
                .nodes
                .iter()
                .filter(|node| !index.is_connected(&node.id))
                .map(|node| ValidationIssue::warning(not_connected(node.label())).at(node.id.clone())),
        );
    }
}

/// Registers the built-in rules in the order their issues are reported.
pub(super) fn register_default_rules(rules: &mut Vec<Box<dyn ValidationRule>>) {
    rules.push(Box::new(EntryExitCardinality));
    rules.push(Box::new(EntryExitConnectivity));
    rules.push(Box::new(DisconnectedNodes));
}
