use crate::workflow::NodeId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether an issue blocks simulation or is merely advisory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// A single problem found in a workflow graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationIssue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_id: Option<NodeId>,
    pub message: String,
    #[serde(rename = "type")]
    pub severity: Severity,
}

impl ValidationIssue {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            node_id: None,
            message: message.into(),
            severity: Severity::Error,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            node_id: None,
            message: message.into(),
            severity: Severity::Warning,
        }
    }

    /// Attributes the issue to a node.
    pub fn at(mut self, node_id: impl Into<NodeId>) -> Self {
        self.node_id = Some(node_id.into());
        self
    }

    pub fn is_blocking(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        match &self.node_id {
            Some(id) => write!(f, "{}: {} (node {})", level, self.message, id),
            None => write!(f, "{}: {}", level, self.message),
        }
    }
}

pub const MISSING_START: &str = "Workflow must have a Start node";
pub const MULTIPLE_STARTS: &str = "Workflow can only have one Start node";
pub const MISSING_END: &str = "Workflow must have an End node";
pub const START_WITHOUT_OUTGOING: &str = "Start node must have an outgoing connection";
pub const END_WITHOUT_INCOMING: &str = "End node must have an incoming connection";
pub const CYCLE_DETECTED: &str = "Workflow contains a cycle";

pub fn not_connected(label: &str) -> String {
    format!("Node \"{}\" is not connected", label)
}
