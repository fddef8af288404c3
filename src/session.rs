use crate::catalog::ActionCatalog;
use crate::error::{DocumentError, SimulationError};
use crate::simulation::{SimulationResult, Simulator};
use crate::validation::{self, ValidationIssue, Validator};
use crate::workflow::{CommandOutcome, Workflow, WorkflowCommand};
use tracing::info;

/// The single owner of an in-memory workflow being edited.
///
/// All changes go through `apply`, `import_json` or `clear`. The session also
/// remembers the issues of the last validation, which every new validation
/// replaces wholesale.
#[derive(Default)]
pub struct WorkflowSession {
    workflow: Workflow,
    issues: Vec<ValidationIssue>,
    validator: Validator,
}

impl WorkflowSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_validator(validator: Validator) -> Self {
        Self {
            validator,
            ..Self::default()
        }
    }

    pub fn from_workflow(workflow: Workflow) -> Self {
        Self {
            workflow,
            ..Self::default()
        }
    }

    pub fn workflow(&self) -> &Workflow {
        &self.workflow
    }

    /// Issues from the most recent `validate`, empty before the first one.
    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    pub fn apply(&mut self, command: WorkflowCommand) -> CommandOutcome {
        self.workflow.apply(command)
    }

    /// Re-validates the current workflow and stores the result.
    pub fn validate(&mut self) -> &[ValidationIssue] {
        self.issues = self.validator.validate(&self.workflow);
        &self.issues
    }

    /// Replaces the workflow with the one in `json`.
    ///
    /// On any error the current workflow is left exactly as it was.
    pub fn import_json(&mut self, json: &str) -> Result<(), DocumentError> {
        let imported = Workflow::from_json(json)?;
        info!(
            nodes = imported.nodes.len(),
            edges = imported.edges.len(),
            "Workflow imported"
        );
        self.workflow.replace(imported);
        Ok(())
    }

    pub fn export_json(&self) -> Result<String, DocumentError> {
        self.workflow.to_json()
    }

    /// Empties the workflow and forgets the last validation.
    pub fn clear(&mut self) {
        self.workflow.clear();
        self.issues.clear();
    }

    /// Validates, then simulates if nothing blocks.
    ///
    /// Blocking issues short-circuit into a failed result without consulting the
    /// simulator, mirroring what the editor shows before a run starts.
    pub async fn simulate<C: ActionCatalog>(
        &mut self,
        simulator: &Simulator<C>,
    ) -> Result<SimulationResult, SimulationError> {
        let errors: Vec<String> = validation::blocking(self.validate())
            .map(|issue| issue.message.clone())
            .collect();
        if !errors.is_empty() {
            return Ok(SimulationResult::failed(errors));
        }
        simulator.simulate(&self.workflow).await
    }
}
