use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Node identifiers are opaque strings; new nodes get a UUID v4.
pub type NodeId = String;

/// The five fixed node kinds a workflow is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    Start,
    Task,
    Approval,
    Automated,
    End,
}

impl NodeType {
    pub const ALL: [NodeType; 5] = [
        NodeType::Start,
        NodeType::Task,
        NodeType::Approval,
        NodeType::Automated,
        NodeType::End,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NodeType::Start => "start",
            NodeType::Task => "task",
            NodeType::Approval => "approval",
            NodeType::Automated => "automated",
            NodeType::End => "end",
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Canvas coordinates. Carried for the editor, ignored by the engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An ordered key/value entry used for start metadata and task custom fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyValue {
    pub key: String,
    pub value: String,
}

impl KeyValue {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Approver roles offered by the editor. The field itself stays free-form.
pub const SUGGESTED_APPROVER_ROLES: [&str; 5] = ["Manager", "HRBP", "Director", "VP", "CEO"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartData {
    pub title: String,
    #[serde(default)]
    pub metadata: Vec<KeyValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskData {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub assignee: String,
    #[serde(default)]
    pub due_date: String,
    #[serde(default)]
    pub custom_fields: Vec<KeyValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalData {
    pub title: String,
    pub approver_role: String,
    /// Amount under which the request approves itself. `0` means always manual.
    #[serde(default)]
    pub auto_approve_threshold: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutomatedData {
    pub title: String,
    /// Catalog action id. Not checked against the catalog by validation.
    #[serde(default)]
    pub action_id: String,
    #[serde(default)]
    pub action_params: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndData {
    pub end_message: String,
    #[serde(default)]
    pub show_summary: bool,
}

/// The variant-specific part of a node payload, tagged by `type` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NodeKind {
    Start(StartData),
    Task(TaskData),
    Approval(ApprovalData),
    Automated(AutomatedData),
    End(EndData),
}

impl NodeKind {
    pub fn node_type(&self) -> NodeType {
        match self {
            NodeKind::Start(_) => NodeType::Start,
            NodeKind::Task(_) => NodeType::Task,
            NodeKind::Approval(_) => NodeType::Approval,
            NodeKind::Automated(_) => NodeType::Automated,
            NodeKind::End(_) => NodeType::End,
        }
    }
}

/// A node payload: the human-readable `label` every node has, plus its variant data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeData {
    pub label: String,
    #[serde(flatten)]
    pub kind: NodeKind,
}

impl NodeData {
    /// Builds the payload a freshly dropped node of `node_type` starts with.
    pub fn defaults(node_type: NodeType) -> Self {
        let (label, kind) = match node_type {
            NodeType::Start => (
                "Start",
                NodeKind::Start(StartData {
                    title: "Workflow Start".to_string(),
                    metadata: Vec::new(),
                }),
            ),
            NodeType::Task => (
                "Task",
                NodeKind::Task(TaskData {
                    title: "New Task".to_string(),
                    description: String::new(),
                    assignee: String::new(),
                    due_date: String::new(),
                    custom_fields: Vec::new(),
                }),
            ),
            NodeType::Approval => (
                "Approval",
                NodeKind::Approval(ApprovalData {
                    title: "Approval Required".to_string(),
                    approver_role: "Manager".to_string(),
                    auto_approve_threshold: 0.0,
                }),
            ),
            NodeType::Automated => (
                "Automated",
                NodeKind::Automated(AutomatedData {
                    title: "Automated Action".to_string(),
                    action_id: String::new(),
                    action_params: BTreeMap::new(),
                }),
            ),
            NodeType::End => (
                "End",
                NodeKind::End(EndData {
                    end_message: "Workflow completed".to_string(),
                    show_summary: true,
                }),
            ),
        };
        Self {
            label: label.to_string(),
            kind,
        }
    }

    pub fn node_type(&self) -> NodeType {
        self.kind.node_type()
    }

    /// The variant's `title` field. `End` nodes have none.
    pub fn title(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Start(d) => Some(d.title.as_str()),
            NodeKind::Task(d) => Some(d.title.as_str()),
            NodeKind::Approval(d) => Some(d.title.as_str()),
            NodeKind::Automated(d) => Some(d.title.as_str()),
            NodeKind::End(_) => None,
        }
    }

    /// The title if the variant has one, the label otherwise.
    pub fn display_title(&self) -> &str {
        self.title().unwrap_or(self.label.as_str())
    }
}

/// A step in the workflow graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    #[serde(default)]
    pub position: Position,
    pub data: NodeData,
}

impl Node {
    /// Creates a node whose top-level type is derived from its payload.
    pub fn new(id: impl Into<NodeId>, position: Position, data: NodeData) -> Self {
        Self {
            id: id.into(),
            node_type: data.node_type(),
            position,
            data,
        }
    }

    /// Creates a node of `node_type` carrying the default payload.
    pub fn with_defaults(id: impl Into<NodeId>, node_type: NodeType, position: Position) -> Self {
        Self::new(id, position, NodeData::defaults(node_type))
    }

    pub fn label(&self) -> &str {
        &self.data.label
    }
}
