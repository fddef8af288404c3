use crate::workflow::{NodeId, NodeType};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    Pending,
    Running,
    Completed,
    Failed,
}

/// One simulated step of a workflow run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationStep {
    pub node_id: NodeId,
    pub node_type: NodeType,
    pub title: String,
    pub status: StepStatus,
    pub message: String,
    /// Synthetic time in milliseconds since the Unix epoch.
    pub timestamp: i64,
}

/// The result of a simulation run.
///
/// Either `success` with the steps in visitation order, or a failure carrying the
/// blocking messages and no steps at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub success: bool,
    pub steps: Vec<SimulationStep>,
    pub errors: Vec<String>,
}

impl SimulationResult {
    pub fn completed(steps: Vec<SimulationStep>) -> Self {
        Self {
            success: true,
            steps,
            errors: Vec::new(),
        }
    }

    pub fn failed(errors: Vec<String>) -> Self {
        Self {
            success: false,
            steps: Vec::new(),
            errors,
        }
    }

    pub fn messages(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.message.as_str()).collect()
    }
}
