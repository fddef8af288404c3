mod common;

use common::*;
use serde_json::json;
use tejun::prelude::*;
use tejun::validation::{MISSING_END, Severity};

#[test]
fn test_default_payloads_per_type() {
    let start = NodeData::defaults(NodeType::Start);
    assert_eq!(start.label, "Start");
    assert_eq!(start.title(), Some("Workflow Start"));

    let task = NodeData::defaults(NodeType::Task);
    assert_eq!(task.label, "Task");
    assert_eq!(task.title(), Some("New Task"));
    let NodeKind::Task(data) = &task.kind else {
        panic!("Expected a task payload");
    };
    assert!(data.assignee.is_empty());
    assert!(data.custom_fields.is_empty());

    let approval = NodeData::defaults(NodeType::Approval);
    let NodeKind::Approval(data) = &approval.kind else {
        panic!("Expected an approval payload");
    };
    assert_eq!(data.approver_role, "Manager");
    assert_eq!(data.auto_approve_threshold, 0.0);

    let automated = NodeData::defaults(NodeType::Automated);
    assert_eq!(automated.title(), Some("Automated Action"));

    let end = NodeData::defaults(NodeType::End);
    assert_eq!(end.title(), None);
    assert_eq!(end.display_title(), "End");
    let NodeKind::End(data) = &end.kind else {
        panic!("Expected an end payload");
    };
    assert_eq!(data.end_message, "Workflow completed");
    assert!(data.show_summary);
}

#[test]
fn test_every_node_type_round_trips_through_its_payload() {
    for node_type in NodeType::ALL {
        let node = node("n", node_type);
        assert_eq!(node.node_type, node_type);
        assert_eq!(node.data.node_type(), node_type);
    }
}

#[test]
fn test_add_node_generates_unique_ids() {
    let mut workflow = Workflow::new();
    let a = workflow.add_node(NodeType::Task, Position::new(0.0, 0.0));
    let b = workflow.add_node(NodeType::Task, Position::new(10.0, 0.0));

    assert_ne!(a, b);
    assert_eq!(workflow.nodes.len(), 2);
    assert_eq!(workflow.node(&b).map(|n| n.position), Some(Position::new(10.0, 0.0)));
}

#[test]
fn test_patch_merges_only_fields_of_the_node_variant() {
    let mut workflow = workflow(vec![node("t", NodeType::Task)], &[]);
    workflow.update_node(
        "t",
        &NodePatch {
            title: Some("Collect ID".to_string()),
            assignee: Some("Bob".to_string()),
            // Not a task field.
            end_message: Some("ignored".to_string()),
            ..NodePatch::default()
        },
    );

    let node = workflow.node("t").expect("node exists");
    assert_eq!(node.node_type, NodeType::Task);
    let NodeKind::Task(data) = &node.data.kind else {
        panic!("Patch must not change the variant");
    };
    assert_eq!(data.title, "Collect ID");
    assert_eq!(data.assignee, "Bob");
    assert!(data.description.is_empty());
}

#[test]
fn test_patch_clamps_negative_threshold() {
    let mut data = NodeData::defaults(NodeType::Approval);
    NodePatch {
        auto_approve_threshold: Some(-25.0),
        ..NodePatch::default()
    }
    .apply_to(&mut data);

    let NodeKind::Approval(approval) = &data.kind else {
        panic!("Expected an approval payload");
    };
    assert_eq!(approval.auto_approve_threshold, 0.0);
}

#[test]
fn test_patch_label_applies_to_every_variant() {
    let mut data = NodeData::defaults(NodeType::End);
    NodePatch::label("Finish").apply_to(&mut data);
    assert_eq!(data.label, "Finish");
    assert_eq!(data.display_title(), "Finish");
}

#[test]
fn test_update_unknown_node_is_a_no_op() {
    let mut workflow = minimal_flow();
    let before = workflow.clone();
    workflow.update_node("missing", &NodePatch::title("Nope"));
    workflow.move_node("missing", Position::new(1.0, 1.0));
    workflow.delete_node("missing");
    workflow.remove_edge("missing");
    assert_eq!(workflow, before);
}

#[test]
fn test_delete_node_cascades_to_edges() {
    let mut workflow = review_flow();
    workflow.delete_node("review");

    assert!(workflow.node("review").is_none());
    assert_eq!(workflow.nodes.len(), 3);
    assert_eq!(workflow.edges.len(), 1);
    assert!(workflow.edges.iter().all(|edge| !edge.touches("review")));
}

#[test]
fn test_parallel_edges_are_kept() {
    let mut workflow = minimal_flow();
    let first = workflow.add_edge("start", "end");
    let second = workflow.add_edge("start", "end");

    assert_ne!(first, second);
    assert_eq!(workflow.edges.len(), 3);
}

#[test]
fn test_insert_node_replaces_same_id() {
    let mut workflow = minimal_flow();
    workflow.insert_node(task("end", "Late Task", "Carol"));

    assert_eq!(workflow.nodes.len(), 2);
    assert_eq!(workflow.node("end").map(|n| n.node_type), Some(NodeType::Task));
}

#[test]
fn test_set_node_data_keeps_type_in_step() {
    let mut workflow = workflow(vec![node("n", NodeType::Task)], &[]);
    workflow.set_node_data("n", NodeData::defaults(NodeType::Approval));

    let node = workflow.node("n").expect("node exists");
    assert_eq!(node.node_type, NodeType::Approval);
    assert_eq!(node.data.node_type(), NodeType::Approval);
}

#[test]
fn test_assign_action_rebuilds_params_keeping_values() {
    let mut workflow = workflow(vec![automated("a", "Notify", "")], &[]);
    workflow.update_node(
        "a",
        &NodePatch {
            action_params: Some(
                [
                    ("to".to_string(), "hr@example.com".to_string()),
                    ("stale".to_string(), "x".to_string()),
                ]
                .into_iter()
                .collect(),
            ),
            ..NodePatch::default()
        },
    );

    let send_email = AutomationAction::new("send_email", "Send Email", &["to", "subject", "body"]);
    workflow.assign_action("a", &send_email);

    let NodeKind::Automated(data) = &workflow.node("a").expect("node exists").data.kind else {
        panic!("Expected an automated payload");
    };
    assert_eq!(data.action_id, "send_email");
    assert_eq!(data.action_params.len(), 3);
    assert_eq!(data.action_params["to"], "hr@example.com");
    assert_eq!(data.action_params["subject"], "");
    assert!(!data.action_params.contains_key("stale"));
}

#[test]
fn test_assign_action_ignores_other_variants() {
    let mut workflow = workflow(vec![task("t", "Review", "Alice")], &[]);
    let before = workflow.clone();
    workflow.assign_action("t", &AutomationAction::new("send_email", "Send Email", &["to"]));
    assert_eq!(workflow, before);
}

#[test]
fn test_commands_drive_the_graph() {
    let mut workflow = Workflow::new();

    let CommandOutcome::NodeAdded(start) = workflow.apply(WorkflowCommand::AddNode {
        node_type: NodeType::Start,
        position: Position::default(),
    }) else {
        panic!("AddNode must report the new id");
    };
    let CommandOutcome::NodeAdded(end) = workflow.apply(WorkflowCommand::AddNode {
        node_type: NodeType::End,
        position: Position::new(0.0, 200.0),
    }) else {
        panic!("AddNode must report the new id");
    };
    let CommandOutcome::EdgeAdded(edge) = workflow.apply(WorkflowCommand::Connect {
        source: start,
        target: end,
    }) else {
        panic!("Connect must report the new edge id");
    };

    assert!(validate(&workflow).is_empty());

    assert_eq!(
        workflow.apply(WorkflowCommand::Disconnect { id: edge }),
        CommandOutcome::Applied
    );
    assert!(workflow.edges.is_empty());

    workflow.apply(WorkflowCommand::Clear);
    assert!(workflow.is_empty());
}

#[test]
fn test_commands_deserialize_from_editor_json() {
    let command: WorkflowCommand = serde_json::from_value(json!({
        "command": "addNode",
        "nodeType": "approval",
        "position": { "x": 5.0, "y": 7.5 }
    }))
    .expect("valid command");
    assert_eq!(
        command,
        WorkflowCommand::AddNode {
            node_type: NodeType::Approval,
            position: Position::new(5.0, 7.5),
        }
    );

    let command: WorkflowCommand = serde_json::from_value(json!({
        "command": "updateNode",
        "id": "t",
        "patch": { "assignee": "Dana", "dueDate": "2026-12-01" }
    }))
    .expect("valid command");
    let WorkflowCommand::UpdateNode { id, patch } = command else {
        panic!("Expected an update command");
    };
    assert_eq!(id, "t");
    assert_eq!(patch.assignee.as_deref(), Some("Dana"));
    assert_eq!(patch.due_date.as_deref(), Some("2026-12-01"));
    assert!(patch.title.is_none());

    let command: WorkflowCommand =
        serde_json::from_value(json!({ "command": "clear" })).expect("valid command");
    assert_eq!(command, WorkflowCommand::Clear);
}

#[test]
fn test_node_serializes_in_document_shape() {
    let value = serde_json::to_value(end("e", "All done")).expect("serializable");
    assert_eq!(
        value,
        json!({
            "id": "e",
            "type": "end",
            "position": { "x": 0.0, "y": 0.0 },
            "data": {
                "type": "end",
                "label": "End",
                "endMessage": "All done",
                "showSummary": true
            }
        })
    );
}

#[test]
fn test_issue_display_and_serialization() {
    let issue = ValidationIssue::error(MISSING_END);
    assert_eq!(issue.to_string(), "error: Workflow must have an End node");
    assert_eq!(
        serde_json::to_value(&issue).expect("serializable"),
        json!({ "message": "Workflow must have an End node", "type": "error" })
    );

    let warning = ValidationIssue::warning("Node \"Task\" is not connected").at("t");
    assert_eq!(warning.severity, Severity::Warning);
    assert!(!warning.is_blocking());
    assert_eq!(
        warning.to_string(),
        "warning: Node \"Task\" is not connected (node t)"
    );
    assert_eq!(
        serde_json::to_value(&warning).expect("serializable")["nodeId"],
        json!("t")
    );
}

#[test]
fn test_node_type_display_honors_width() {
    assert_eq!(format!("{:<9}|", NodeType::Task), "task     |");
    assert_eq!(NodeType::Automated.to_string(), "automated");
}

#[test]
fn test_hr_catalog_lists_stock_actions() {
    let catalog = StaticCatalog::hr_defaults();
    let actions = tokio_test::block_on(catalog.list_actions()).expect("static catalog");

    let ids: Vec<&str> = actions.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(
        ids,
        [
            "send_email",
            "generate_doc",
            "send_slack",
            "create_ticket",
            "update_record",
            "schedule_meeting"
        ]
    );

    let found = tokio_test::block_on(catalog.find_action("send_slack")).expect("static catalog");
    assert_eq!(found.map(|a| a.label), Some("Send Slack Message".to_string()));
    let missing = tokio_test::block_on(catalog.find_action("fax")).expect("static catalog");
    assert!(missing.is_none());
}
