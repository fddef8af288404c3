//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the tejun crate.
//! Import this module to get access to the core functionality without having to import
//! each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! use tejun::prelude::*;
//!
//! # async fn run_example() -> Result<()> {
//! let workflow = Workflow::from_json(&std::fs::read_to_string("data/onboarding.json")?)?;
//!
//! let issues = validate(&workflow);
//! if !has_blocking(&issues) {
//!     let simulator = Simulator::new(StaticCatalog::hr_defaults());
//!     let result = simulator.simulate(&workflow).await?;
//!     println!("Simulation Result: {:?}", result);
//! }
//! # Ok(())
//! # }
//! ```

// Graph model
pub use crate::workflow::{
    CommandOutcome, Edge, IntoWorkflow, KeyValue, Node, NodeData, NodeId, NodeKind, NodePatch,
    NodeType, Position, Workflow, WorkflowCommand, WorkflowDocument,
};

// Validation and planning
pub use crate::planner::{ExecutionPlan, Planner, plan};
pub use crate::validation::{
    Severity, ValidationIssue, ValidationRule, Validator, ValidatorBuilder, blocking, has_blocking,
    validate,
};

// Simulation
pub use crate::catalog::{ActionCatalog, AutomationAction, StaticCatalog};
pub use crate::session::WorkflowSession;
pub use crate::simulation::{
    SimulationConfig, SimulationResult, SimulationStep, Simulator, SimulatorBuilder,
    StagedSimulation, StepStatus,
};

// Error types
pub use crate::error::{CatalogError, DocumentError, SimulationError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
