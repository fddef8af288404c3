use super::graph::Workflow;
use super::node::Node;
use ahash::AHashMap;

/// A read-only view of a workflow's connectivity, built once per analysis.
///
/// Outgoing targets keep edge order, so traversals over the index are as
/// deterministic as the edge list itself.
pub struct GraphIndex<'a> {
    workflow: &'a Workflow,
    nodes: AHashMap<&'a str, &'a Node>,
    outgoing: AHashMap<&'a str, Vec<&'a str>>,
    incoming_count: AHashMap<&'a str, usize>,
}

impl<'a> GraphIndex<'a> {
    pub fn new(workflow: &'a Workflow) -> Self {
        let mut nodes = AHashMap::with_capacity(workflow.nodes.len());
        for node in &workflow.nodes {
            // First occurrence wins, matching `Workflow::node`.
            nodes.entry(node.id.as_str()).or_insert(node);
        }

        let mut outgoing: AHashMap<&str, Vec<&str>> = AHashMap::new();
        let mut incoming_count: AHashMap<&str, usize> = AHashMap::new();
        for edge in &workflow.edges {
            outgoing
                .entry(edge.source.as_str())
                .or_default()
                .push(edge.target.as_str());
            *incoming_count.entry(edge.target.as_str()).or_default() += 1;
        }

        Self {
            workflow,
            nodes,
            outgoing,
            incoming_count,
        }
    }

    pub fn workflow(&self) -> &'a Workflow {
        self.workflow
    }

    pub fn node(&self, id: &str) -> Option<&'a Node> {
        self.nodes.get(id).copied()
    }

    pub fn node_count(&self) -> usize {
        self.workflow.nodes.len()
    }

    /// Edge targets leaving `id`, one entry per edge.
    pub fn targets(&self, id: &str) -> &[&'a str] {
        self.outgoing.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn has_outgoing(&self, id: &str) -> bool {
        !self.targets(id).is_empty()
    }

    pub fn has_incoming(&self, id: &str) -> bool {
        self.incoming_count.get(id).is_some_and(|count| *count > 0)
    }

    /// Whether any edge names `id` as source or target.
    pub fn is_connected(&self, id: &str) -> bool {
        self.has_outgoing(id) || self.has_incoming(id)
    }
}
