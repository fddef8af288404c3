use crate::catalog::AutomationAction;
use crate::workflow::{NodeData, NodeKind};

/// Formats the human-readable messages attached to simulated steps.
pub struct StepFormatter;

impl StepFormatter {
    pub const UNASSIGNED: &'static str = "Unassigned";
    pub const UNKNOWN_ACTION: &'static str = "Unknown action";

    /// Renders the message for a node payload.
    ///
    /// `action` is the catalog entry resolved for an automated node; it is ignored
    /// for every other variant.
    pub fn format_message(data: &NodeData, action: Option<&AutomationAction>) -> String {
        match &data.kind {
            NodeKind::Start(d) => format!("Workflow started: {}", d.title),
            NodeKind::Task(d) => {
                let assignee = if d.assignee.is_empty() {
                    Self::UNASSIGNED
                } else {
                    d.assignee.as_str()
                };
                format!("Task \"{}\" assigned to {}", d.title, assignee)
            }
            NodeKind::Approval(d) => format!("Approval requested from {}", d.approver_role),
            NodeKind::Automated(_) => format!(
                "Executed: {}",
                action.map_or(Self::UNKNOWN_ACTION, |a| a.label.as_str())
            ),
            NodeKind::End(d) => d.end_message.clone(),
        }
    }
}
