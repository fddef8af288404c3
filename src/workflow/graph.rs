use super::edge::{Edge, EdgeId};
use super::node::{Node, NodeData, NodeId, NodeKind, NodeType, Position};
use super::patch::NodePatch;
use crate::catalog::AutomationAction;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

/// A workflow graph: nodes in insertion order plus the edges between them.
///
/// Every mutation is total. Operations naming an id that does not exist are
/// silently ignored, so callers never have to handle a mutation failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Workflow {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl Workflow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a workflow from existing collections without any checks.
    pub fn from_parts(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self { nodes, edges }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn edge(&self, id: &str) -> Option<&Edge> {
        self.edges.iter().find(|e| e.id == id)
    }

    /// Iterates over the nodes of one variant, in insertion order.
    pub fn nodes_of_type(&self, node_type: NodeType) -> impl Iterator<Item = &Node> {
        self.nodes
            .iter()
            .filter(move |n| n.data.node_type() == node_type)
    }

    /// Adds a node of `node_type` with its default payload and returns its new id.
    pub fn add_node(&mut self, node_type: NodeType, position: Position) -> NodeId {
        let id = Uuid::new_v4().to_string();
        self.nodes
            .push(Node::with_defaults(id.clone(), node_type, position));
        debug!(node_id = %id, %node_type, "Added node");
        id
    }

    /// Inserts a fully-formed node. A node with the same id is replaced in place.
    pub fn insert_node(&mut self, node: Node) {
        match self.nodes.iter_mut().find(|n| n.id == node.id) {
            Some(existing) => *existing = node,
            None => self.nodes.push(node),
        }
    }

    /// Merges `patch` into the payload of node `id`.
    pub fn update_node(&mut self, id: &str, patch: &NodePatch) {
        if let Some(node) = self.nodes.iter_mut().find(|n| n.id == id) {
            patch.apply_to(&mut node.data);
        }
    }

    /// Replaces the payload of node `id`, keeping the top-level type in step.
    pub fn set_node_data(&mut self, id: &str, data: NodeData) {
        if let Some(node) = self.nodes.iter_mut().find(|n| n.id == id) {
            node.node_type = data.node_type();
            node.data = data;
        }
    }

    pub fn move_node(&mut self, id: &str, position: Position) {
        if let Some(node) = self.nodes.iter_mut().find(|n| n.id == id) {
            node.position = position;
        }
    }

    /// Removes node `id` together with every edge touching it.
    pub fn delete_node(&mut self, id: &str) {
        let before = self.nodes.len();
        self.nodes.retain(|n| n.id != id);
        if self.nodes.len() != before {
            let edges_before = self.edges.len();
            self.edges.retain(|e| !e.touches(id));
            debug!(
                node_id = %id,
                removed_edges = edges_before - self.edges.len(),
                "Deleted node"
            );
        }
    }

    /// Connects `source` to `target` and returns the new edge id.
    ///
    /// Parallel edges are allowed; nothing is deduplicated.
    pub fn add_edge(&mut self, source: impl Into<NodeId>, target: impl Into<NodeId>) -> EdgeId {
        let id = Uuid::new_v4().to_string();
        self.edges.push(Edge::new(id.clone(), source, target));
        id
    }

    /// Inserts a fully-formed edge, replacing one with the same id.
    pub fn insert_edge(&mut self, edge: Edge) {
        match self.edges.iter_mut().find(|e| e.id == edge.id) {
            Some(existing) => *existing = edge,
            None => self.edges.push(edge),
        }
    }

    pub fn remove_edge(&mut self, id: &str) {
        self.edges.retain(|e| e.id != id);
    }

    /// Points an automated node at `action`, rebuilding its parameter map.
    ///
    /// Parameters the action declares keep any value already entered; parameters
    /// it does not declare are dropped. Non-automated nodes are left alone.
    pub fn assign_action(&mut self, id: &str, action: &AutomationAction) {
        let Some(node) = self.nodes.iter_mut().find(|n| n.id == id) else {
            return;
        };
        if let NodeKind::Automated(data) = &mut node.data.kind {
            let params = action
                .params
                .iter()
                .map(|param| {
                    let value = data.action_params.get(param).cloned().unwrap_or_default();
                    (param.clone(), value)
                })
                .collect();
            data.action_id = action.id.clone();
            data.action_params = params;
        }
    }

    /// Replaces both collections at once, as an import does.
    pub fn replace(&mut self, other: Workflow) {
        *self = other;
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
    }
}
