//! # Tejun - HR Workflow Validation and Simulation Engine
//!
//! **Tejun** is the engine behind a node-based HR workflow designer. A workflow is
//! a directed graph of typed steps (start, task, approval, automated, end)
//! connected by edges. Tejun decides whether such a graph is well-formed, derives
//! the order in which its steps run, and produces a mock, timestamped trace of a
//! run without performing any real work.
//!
//! ## Core Workflow
//!
//! The engine operates on a canonical `Workflow` value. Editors own that value and
//! change it through commands; the engine only ever reads it.
//!
//! 1.  **Build or Load**: Create a `Workflow` with commands, or import the JSON
//!     `{ "nodes": [...], "edges": [...] }` document an editor exports.
//! 2.  **Validate**: `validate` returns blocking errors and advisory warnings.
//! 3.  **Plan**: `plan` linearizes the nodes reachable from the start node.
//! 4.  **Simulate**: a `Simulator` validates, plans, and reveals one step at a time,
//!     resolving automated actions through an `ActionCatalog`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tejun::prelude::*;
//!
//! # async fn run() -> Result<()> {
//! let mut workflow = Workflow::new();
//! let start = workflow.add_node(NodeType::Start, Position::new(0.0, 0.0));
//! let task = workflow.add_node(NodeType::Task, Position::new(0.0, 120.0));
//! let end = workflow.add_node(NodeType::End, Position::new(0.0, 240.0));
//! workflow.update_node(&task, &NodePatch {
//!     title: Some("Collect documents".to_string()),
//!     assignee: Some("Alice".to_string()),
//!     ..NodePatch::default()
//! });
//! workflow.add_edge(&start, &task);
//! workflow.add_edge(&task, &end);
//!
//! for issue in validate(&workflow) {
//!     println!("{}", issue);
//! }
//! println!("Order: {:?}", plan(&workflow).order);
//!
//! let simulator = Simulator::builder(StaticCatalog::hr_defaults()).headless().build();
//! let result = simulator.simulate(&workflow).await?;
//! for step in &result.steps {
//!     println!("[{}] {}", step.timestamp, step.message);
//! }
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod error;
pub mod planner;
pub mod prelude;
pub mod session;
pub mod simulation;
pub mod validation;
pub mod workflow;

pub use planner::plan;
pub use validation::validate;
