use super::node::NodeId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub type EdgeId = String;

/// A directed connection between two nodes, referenced by id only.
///
/// Editor-specific attributes (`type`, `animated`, handles, ...) are kept in
/// `attributes` so an imported document exports unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub id: EdgeId,
    pub source: NodeId,
    pub target: NodeId,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Edge {
    pub fn new(id: impl Into<EdgeId>, source: impl Into<NodeId>, target: impl Into<NodeId>) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            attributes: Map::new(),
        }
    }

    /// Whether `node_id` is either endpoint of this edge.
    pub fn touches(&self, node_id: &str) -> bool {
        self.source == node_id || self.target == node_id
    }
}
