//! Turns a workflow graph into the linear order in which a simulation visits it.

use crate::workflow::{GraphIndex, Node, NodeId, NodeType, Workflow};
use serde::{Deserialize, Serialize};
use tracing::debug;

mod cycle;
mod order;

/// The outcome of planning a workflow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionPlan {
    /// Reachable node ids in visitation order. Empty when there is no start node or
    /// when the graph is cyclic.
    pub order: Vec<NodeId>,
    pub cyclic: bool,
    /// The offending path when `cyclic` is set, first and last entries equal.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cycle: Vec<NodeId>,
}

/// Plans over a single immutable snapshot of a workflow.
pub struct Planner<'a> {
    index: GraphIndex<'a>,
}

impl<'a> Planner<'a> {
    pub fn new(workflow: &'a Workflow) -> Self {
        Self {
            index: GraphIndex::new(workflow),
        }
    }

    /// The node the walk starts from: the first start node in iteration order.
    pub fn start_node(&self) -> Option<&'a Node> {
        self.index.workflow().nodes_of_type(NodeType::Start).next()
    }

    /// Looks for a cycle reachable from the start node.
    pub fn find_cycle(&self) -> Option<Vec<&'a str>> {
        let start = self.start_node()?;
        cycle::find_cycle(&self.index, &start.id)
    }

    /// Nodes reachable from the start node, breadth-first.
    ///
    /// This does not check for cycles; the emitted set alone guarantees termination.
    pub fn execution_order(&self) -> Vec<&'a Node> {
        match self.start_node() {
            Some(start) => order::breadth_first(&self.index, &start.id),
            None => Vec::new(),
        }
    }

    pub fn plan(&self) -> ExecutionPlan {
        if let Some(cycle) = self.find_cycle() {
            debug!(cycle = ?cycle, "Workflow is cyclic, nothing to plan");
            return ExecutionPlan {
                order: Vec::new(),
                cyclic: true,
                cycle: cycle.into_iter().map(str::to_string).collect(),
            };
        }

        let order: Vec<NodeId> = self
            .execution_order()
            .into_iter()
            .map(|node| node.id.clone())
            .collect();
        debug!(steps = order.len(), "Planned workflow");
        ExecutionPlan {
            order,
            cyclic: false,
            cycle: Vec::new(),
        }
    }
}

/// Plans `workflow`. Callers are expected to have validated it first.
pub fn plan(workflow: &Workflow) -> ExecutionPlan {
    Planner::new(workflow).plan()
}
