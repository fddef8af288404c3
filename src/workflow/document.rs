use super::edge::Edge;
use super::graph::Workflow;
use super::node::Node;
use crate::error::DocumentError;
use ahash::AHashSet;
use serde_json::Value;
use std::fs;
use tracing::{debug, warn};

/// A trait for custom data models that can be converted into a `Workflow`.
///
/// The JSON document format implements it through `WorkflowDocument`; other
/// editors can implement it for their own structs to reuse the engine.
pub trait IntoWorkflow {
    /// Consumes the object and converts it into a workflow graph.
    fn into_workflow(self) -> Result<Workflow, DocumentError>;
}

/// A parsed but not yet checked `{ "nodes": [...], "edges": [...] }` document.
#[derive(Debug, Clone)]
pub struct WorkflowDocument {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl WorkflowDocument {
    /// Parses a JSON document, requiring both `nodes` and `edges` arrays.
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        let value: Value =
            serde_json::from_str(json).map_err(|e| DocumentError::JsonParseError(e.to_string()))?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self, DocumentError> {
        let Value::Object(mut root) = value else {
            return Err(DocumentError::MissingCollection("nodes"));
        };
        let Some(Value::Array(raw_nodes)) = root.remove("nodes") else {
            return Err(DocumentError::MissingCollection("nodes"));
        };
        let Some(Value::Array(raw_edges)) = root.remove("edges") else {
            return Err(DocumentError::MissingCollection("edges"));
        };

        let nodes = raw_nodes
            .into_iter()
            .enumerate()
            .map(|(index, raw)| {
                serde_json::from_value::<Node>(raw).map_err(|e| DocumentError::InvalidNode {
                    index,
                    message: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let edges = raw_edges
            .into_iter()
            .enumerate()
            .map(|(index, raw)| {
                serde_json::from_value::<Edge>(raw).map_err(|e| DocumentError::InvalidEdge {
                    index,
                    message: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { nodes, edges })
    }

    /// Loads a document from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, DocumentError> {
        let json = fs::read_to_string(path).map_err(|e| {
            DocumentError::JsonParseError(format!("Could not read file '{}': {}", path, e))
        })?;
        Self::from_json(&json)
    }
}

impl IntoWorkflow for WorkflowDocument {
    fn into_workflow(self) -> Result<Workflow, DocumentError> {
        let mut seen = AHashSet::with_capacity(self.nodes.len());
        for node in &self.nodes {
            if !seen.insert(node.id.as_str()) {
                return Err(DocumentError::DuplicateNodeId(node.id.clone()));
            }
            let actual = node.data.node_type();
            if node.node_type != actual {
                return Err(DocumentError::NodeTypeMismatch {
                    node_id: node.id.clone(),
                    declared: node.node_type.to_string(),
                    actual: actual.to_string(),
                });
            }
        }

        for edge in &self.edges {
            if !seen.contains(edge.source.as_str()) || !seen.contains(edge.target.as_str()) {
                warn!(
                    edge_id = %edge.id,
                    source = %edge.source,
                    target = %edge.target,
                    "Imported edge references a node that does not exist"
                );
            }
        }

        debug!(
            nodes = self.nodes.len(),
            edges = self.edges.len(),
            "Imported workflow document"
        );
        Ok(Workflow::from_parts(self.nodes, self.edges))
    }
}

impl Workflow {
    /// Parses and checks a JSON document in one go.
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        WorkflowDocument::from_json(json)?.into_workflow()
    }

    /// Serializes the workflow to the pretty-printed document format.
    pub fn to_json(&self) -> Result<String, DocumentError> {
        serde_json::to_string_pretty(self).map_err(|e| DocumentError::SerializeError(e.to_string()))
    }

    /// Writes the workflow document to `path`.
    pub fn save(&self, path: &str) -> Result<(), DocumentError> {
        let json = self.to_json()?;
        fs::write(path, json).map_err(|e| {
            DocumentError::SerializeError(format!("Could not write to file '{}': {}", path, e))
        })
    }
}
