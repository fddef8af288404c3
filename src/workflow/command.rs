use super::edge::EdgeId;
use super::graph::Workflow;
use super::node::{Node, NodeId, NodeType, Position};
use super::patch::NodePatch;
use serde::{Deserialize, Serialize};

/// A serializable graph mutation, as issued by the editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "camelCase")]
pub enum WorkflowCommand {
    /// Drops a new node with the default payload of its type.
    #[serde(rename_all = "camelCase")]
    AddNode {
        node_type: NodeType,
        #[serde(default)]
        position: Position,
    },
    /// Inserts a fully-formed node, replacing any node with the same id.
    InsertNode { node: Node },
    UpdateNode { id: NodeId, patch: NodePatch },
    MoveNode { id: NodeId, position: Position },
    DeleteNode { id: NodeId },
    Connect { source: NodeId, target: NodeId },
    Disconnect { id: EdgeId },
    Clear,
}

/// What a command created, if anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    NodeAdded(NodeId),
    EdgeAdded(EdgeId),
    Applied,
}

impl Workflow {
    /// Applies `command` to this workflow.
    pub fn apply(&mut self, command: WorkflowCommand) -> CommandOutcome {
        match command {
            WorkflowCommand::AddNode {
                node_type,
                position,
            } => CommandOutcome::NodeAdded(self.add_node(node_type, position)),
            WorkflowCommand::InsertNode { node } => {
                self.insert_node(node);
                CommandOutcome::Applied
            }
            WorkflowCommand::UpdateNode { id, patch } => {
                self.update_node(&id, &patch);
                CommandOutcome::Applied
            }
            WorkflowCommand::MoveNode { id, position } => {
                self.move_node(&id, position);
                CommandOutcome::Applied
            }
            WorkflowCommand::DeleteNode { id } => {
                self.delete_node(&id);
                CommandOutcome::Applied
            }
            WorkflowCommand::Connect { source, target } => {
                CommandOutcome::EdgeAdded(self.add_edge(source, target))
            }
            WorkflowCommand::Disconnect { id } => {
                self.remove_edge(&id);
                CommandOutcome::Applied
            }
            WorkflowCommand::Clear => {
                self.clear();
                CommandOutcome::Applied
            }
        }
    }
}
