//! Mock execution of a validated workflow.
//!
//! The simulator performs no real work. It validates, plans, and then walks the
//! planned order producing one `completed` step per node, with a message built
//! from the node's payload and, for automated nodes, the action catalog.

use crate::catalog::{ActionCatalog, AutomationAction};
use crate::error::SimulationError;
use crate::planner::Planner;
use crate::validation::{self, CYCLE_DETECTED, Validator};
use crate::workflow::{Node, NodeKind, Workflow};
use chrono::Utc;
use std::time::Duration;
use tracing::{info, warn};

mod message;
mod staged;
mod step;

pub use message::StepFormatter;
pub use staged::StagedSimulation;
pub use step::*;

/// Timing knobs of a simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Synthetic time between consecutive step timestamps.
    pub step_spacing: Duration,
    /// Real time waited before revealing each step. Zero disables waiting.
    pub reveal_delay: Duration,
    /// Timestamp of the first step in epoch milliseconds. `None` uses the wall clock.
    pub start_time_ms: Option<i64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            step_spacing: Duration::from_millis(1000),
            reveal_delay: Duration::from_millis(500),
            start_time_ms: None,
        }
    }
}

pub struct SimulatorBuilder<C> {
    catalog: C,
    config: SimulationConfig,
    validator: Option<Validator>,
}

impl<C: ActionCatalog> SimulatorBuilder<C> {
    pub fn new(catalog: C) -> Self {
        Self {
            catalog,
            config: SimulationConfig::default(),
            validator: None,
        }
    }

    pub fn with_config(mut self, config: SimulationConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_step_spacing(mut self, spacing: Duration) -> Self {
        self.config.step_spacing = spacing;
        self
    }

    pub fn with_reveal_delay(mut self, delay: Duration) -> Self {
        self.config.reveal_delay = delay;
        self
    }

    /// Reveals steps without waiting, for tests and batch use.
    pub fn headless(self) -> Self {
        self.with_reveal_delay(Duration::ZERO)
    }

    /// Pins the first step's timestamp instead of reading the clock.
    pub fn with_start_time(mut self, epoch_ms: i64) -> Self {
        self.config.start_time_ms = Some(epoch_ms);
        self
    }

    /// Gates runs with a custom validator instead of the built-in rules.
    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validator = Some(validator);
        self
    }

    pub fn build(self) -> Simulator<C> {
        Simulator {
            catalog: self.catalog,
            config: self.config,
            validator: self.validator.unwrap_or_default(),
        }
    }
}

/// Runs mock simulations against an action catalog.
///
/// A simulator holds no per-run state; it can be reused for any number of
/// runs, and never mutates the workflows it is given.
pub struct Simulator<C> {
    catalog: C,
    config: SimulationConfig,
    validator: Validator,
}

impl<C: ActionCatalog> Simulator<C> {
    pub fn builder(catalog: C) -> SimulatorBuilder<C> {
        SimulatorBuilder::new(catalog)
    }

    pub fn new(catalog: C) -> Self {
        SimulatorBuilder::new(catalog).build()
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Simulates `workflow`, revealing every step with the configured delay before
    /// returning the full result.
    pub async fn simulate(&self, workflow: &Workflow) -> Result<SimulationResult, SimulationError> {
        let staged = self.simulate_staged(workflow).await?;
        Ok(staged
            .reveal(|step| {
                info!(
                    node_id = %step.node_id,
                    node_type = %step.node_type,
                    timestamp = step.timestamp,
                    "{}",
                    step.message
                );
            })
            .await)
    }

    /// Computes the run and hands back its steps for progressive reveal.
    pub async fn simulate_staged(
        &self,
        workflow: &Workflow,
    ) -> Result<StagedSimulation, SimulationError> {
        let result = self.run(workflow).await?;
        Ok(StagedSimulation::new(result, self.config.reveal_delay))
    }

    /// Produces the simulation result without any reveal delay.
    pub async fn run(&self, workflow: &Workflow) -> Result<SimulationResult, SimulationError> {
        let issues = self.validator.validate(workflow);
        let errors: Vec<String> = validation::blocking(&issues)
            .map(|issue| issue.message.clone())
            .collect();
        if !errors.is_empty() {
            warn!(errors = errors.len(), "Simulation blocked by validation errors");
            return Ok(SimulationResult::failed(errors));
        }

        let planner = Planner::new(workflow);
        if let Some(cycle) = planner.find_cycle() {
            warn!(cycle = ?cycle, "Simulation blocked by a cycle");
            return Ok(SimulationResult::failed(vec![CYCLE_DETECTED.to_string()]));
        }

        let start = self
            .config
            .start_time_ms
            .unwrap_or_else(|| Utc::now().timestamp_millis());
        let spacing = i64::try_from(self.config.step_spacing.as_millis()).unwrap_or(i64::MAX);

        let mut steps = Vec::new();
        let mut timestamp = start;
        for node in planner.execution_order() {
            let action = self.resolve_action(node).await?;
            steps.push(SimulationStep {
                node_id: node.id.clone(),
                node_type: node.data.node_type(),
                title: node.data.display_title().to_string(),
                status: StepStatus::Completed,
                message: StepFormatter::format_message(&node.data, action.as_ref()),
                timestamp,
            });
            timestamp = timestamp.saturating_add(spacing);
        }

        Ok(SimulationResult::completed(steps))
    }

    async fn resolve_action(&self, node: &Node) -> Result<Option<AutomationAction>, SimulationError> {
        let NodeKind::Automated(data) = &node.data.kind else {
            return Ok(None);
        };
        let action = self.catalog.find_action(&data.action_id).await?;
        if action.is_none() {
            warn!(
                node_id = %node.id,
                action_id = %data.action_id,
                "Automated node references an unknown action"
            );
        }
        Ok(action)
    }
}
