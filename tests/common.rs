//! Common test utilities for building workflows and simulators.
use tejun::prelude::*;

/// Creates a node of `node_type` with its default payload.
#[allow(dead_code)]
pub fn node(id: &str, node_type: NodeType) -> Node {
    Node::with_defaults(id, node_type, Position::default())
}

/// Creates a node of `node_type` and merges `patch` into its default payload.
#[allow(dead_code)]
pub fn patched(id: &str, node_type: NodeType, patch: NodePatch) -> Node {
    let mut data = NodeData::defaults(node_type);
    patch.apply_to(&mut data);
    Node::new(id, Position::default(), data)
}

#[allow(dead_code)]
pub fn start(id: &str, title: &str) -> Node {
    patched(id, NodeType::Start, NodePatch::title(title))
}

#[allow(dead_code)]
pub fn task(id: &str, title: &str, assignee: &str) -> Node {
    patched(
        id,
        NodeType::Task,
        NodePatch {
            title: Some(title.to_string()),
            assignee: Some(assignee.to_string()),
            ..NodePatch::default()
        },
    )
}

#[allow(dead_code)]
pub fn approval(id: &str, title: &str, role: &str) -> Node {
    patched(
        id,
        NodeType::Approval,
        NodePatch {
            title: Some(title.to_string()),
            approver_role: Some(role.to_string()),
            ..NodePatch::default()
        },
    )
}

#[allow(dead_code)]
pub fn automated(id: &str, title: &str, action_id: &str) -> Node {
    patched(
        id,
        NodeType::Automated,
        NodePatch {
            title: Some(title.to_string()),
            action_id: Some(action_id.to_string()),
            ..NodePatch::default()
        },
    )
}

#[allow(dead_code)]
pub fn end(id: &str, message: &str) -> Node {
    patched(
        id,
        NodeType::End,
        NodePatch {
            end_message: Some(message.to_string()),
            ..NodePatch::default()
        },
    )
}

/// Assembles a workflow, naming edges `e0`, `e1`, ... in the order given.
#[allow(dead_code)]
pub fn workflow(nodes: Vec<Node>, edges: &[(&str, &str)]) -> Workflow {
    let edges = edges
        .iter()
        .enumerate()
        .map(|(i, (source, target))| Edge::new(format!("e{}", i), *source, *target))
        .collect();
    Workflow::from_parts(nodes, edges)
}

/// Start("Begin") -> Task("Review", Alice) -> Approval("Sign-off", Manager) -> End("Done").
#[allow(dead_code)]
pub fn review_flow() -> Workflow {
    workflow(
        vec![
            start("start", "Begin"),
            task("review", "Review", "Alice"),
            approval("signoff", "Sign-off", "Manager"),
            end("end", "Done"),
        ],
        &[("start", "review"), ("review", "signoff"), ("signoff", "end")],
    )
}

/// The smallest valid workflow: a start node connected to an end node.
#[allow(dead_code)]
pub fn minimal_flow() -> Workflow {
    workflow(
        vec![start("start", "Begin"), end("end", "Done")],
        &[("start", "end")],
    )
}

#[allow(dead_code)]
pub const START_TIME_MS: i64 = 1_700_000_000_000;

/// A simulator over the stock catalog that never waits and uses a fixed clock.
#[allow(dead_code)]
pub fn headless_simulator() -> Simulator<StaticCatalog> {
    Simulator::builder(StaticCatalog::hr_defaults())
        .headless()
        .with_start_time(START_TIME_MS)
        .build()
}

/// A catalog whose backing service is down.
#[allow(dead_code)]
pub struct UnreachableCatalog;

impl ActionCatalog for UnreachableCatalog {
    async fn list_actions(&self) -> std::result::Result<Vec<AutomationAction>, CatalogError> {
        Err(CatalogError::Unavailable("connection refused".to_string()))
    }
}

/// A JSON document as exported by the editor.
#[allow(dead_code)]
pub const ONBOARDING_JSON: &str = r#"{
  "nodes": [
    { "id": "s", "type": "start", "position": { "x": 0, "y": 0 },
      "data": { "type": "start", "label": "Start", "title": "Onboarding", "metadata": [] } },
    { "id": "t", "type": "task", "position": { "x": 0, "y": 100 },
      "data": { "type": "task", "label": "Task", "title": "Collect Documents", "description": "",
                "assignee": "", "dueDate": "", "customFields": [{ "key": "priority", "value": "high" }] } },
    { "id": "a", "type": "automated", "position": { "x": 0, "y": 200 },
      "data": { "type": "automated", "label": "Automated", "title": "Welcome", "actionId": "send_email",
                "actionParams": { "to": "hire@example.com" } } },
    { "id": "e", "type": "end", "position": { "x": 0, "y": 300 },
      "data": { "type": "end", "label": "End", "endMessage": "Onboarding complete", "showSummary": true } }
  ],
  "edges": [
    { "id": "e1", "source": "s", "target": "t", "type": "smoothstep", "animated": true },
    { "id": "e2", "source": "t", "target": "a", "type": "smoothstep", "animated": true },
    { "id": "e3", "source": "a", "target": "e", "type": "smoothstep", "animated": true }
  ]
}"#;
