use super::node::{KeyValue, NodeData, NodeKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A partial node payload, as sent by an editing form.
///
/// Only fields that belong to the target node's variant are merged; the rest
/// are ignored. A patch can never change a node's variant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NodePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Vec<KeyValue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<Vec<KeyValue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approver_role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_approve_threshold: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_params: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_summary: Option<bool>,
}

// Copies every `Some` field of the patch onto the same-named field of the target.
macro_rules! merge_fields {
    ($target:expr, $patch:expr; $($field:ident),+ $(,)?) => {{
        $(
            if let Some(value) = &$patch.$field {
                $target.$field = value.clone();
            }
        )+
    }};
}

impl NodePatch {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn label(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Self::default()
        }
    }

    /// Merges this patch into `data` in place.
    pub fn apply_to(&self, data: &mut NodeData) {
        merge_fields!(data, self; label);
        match &mut data.kind {
            NodeKind::Start(d) => merge_fields!(d, self; title, metadata),
            NodeKind::Task(d) => {
                merge_fields!(d, self; title, description, assignee, due_date, custom_fields)
            }
            NodeKind::Approval(d) => {
                merge_fields!(d, self; title, approver_role);
                if let Some(threshold) = self.auto_approve_threshold {
                    d.auto_approve_threshold = threshold.max(0.0);
                }
            }
            NodeKind::Automated(d) => merge_fields!(d, self; title, action_id, action_params),
            NodeKind::End(d) => merge_fields!(d, self; end_message, show_summary),
        }
    }
}
