use clap::{Parser, Subcommand};
use futures::StreamExt;
use std::time::{Duration, Instant};
use tejun::prelude::*;
use tracing_subscriber::EnvFilter;

/// Validate, plan and simulate HR workflow documents
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Report structural errors and warnings
    Validate {
        /// Path to the workflow JSON file
        workflow_path: String,
    },
    /// Print the execution order starting at the Start node
    Plan {
        /// Path to the workflow JSON file
        workflow_path: String,
    },
    /// Run a mock simulation and print each step as it is revealed
    Simulate {
        /// Path to the workflow JSON file
        workflow_path: String,

        /// Delay between revealed steps, in milliseconds
        #[arg(short, long, default_value_t = 500)]
        delay_ms: u64,

        /// Reveal every step immediately
        #[arg(long)]
        headless: bool,
    },
    /// List the available automation actions
    Actions,
    /// Write a starter workflow with a connected Start and End node
    New {
        /// Where to write the workflow JSON file
        output_path: String,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Validate { workflow_path } => run_validate(&workflow_path),
        Command::Plan { workflow_path } => run_plan(&workflow_path),
        Command::Simulate {
            workflow_path,
            delay_ms,
            headless,
        } => run_simulate(&workflow_path, delay_ms, headless).await,
        Command::Actions => run_actions().await,
        Command::New { output_path } => run_new(&output_path),
    }
}

fn load_workflow(path: &str) -> Workflow {
    let document = WorkflowDocument::from_file(path).unwrap_or_else(|e| {
        exit_with_error(&format!("Failed to load workflow from '{}': {}", path, e))
    });
    let workflow = document
        .into_workflow()
        .unwrap_or_else(|e| exit_with_error(&format!("Invalid workflow document: {}", e)));
    println!(
        "Loaded '{}': {} nodes, {} edges",
        path,
        workflow.nodes.len(),
        workflow.edges.len()
    );
    workflow
}

fn run_validate(path: &str) {
    let workflow = load_workflow(path);
    let issues = validate(&workflow);

    if issues.is_empty() {
        println!("\nWorkflow is valid.");
        return;
    }

    println!("\n--- Validation Issues ---");
    for issue in &issues {
        println!("  -> {}", issue);
    }
    if has_blocking(&issues) {
        std::process::exit(1);
    }
}

fn run_plan(path: &str) {
    let workflow = load_workflow(path);
    let execution = plan(&workflow);

    if execution.cyclic {
        exit_with_error(&format!(
            "Workflow contains a cycle: {}",
            execution.cycle.join(" -> ")
        ));
    }
    if execution.order.is_empty() {
        println!("\nNothing to run: the workflow has no Start node.");
        return;
    }

    println!("\n--- Execution Order ---");
    for (position, id) in execution.order.iter().enumerate() {
        let title = workflow
            .node(id)
            .map(|node| format!("{} ({})", node.data.display_title(), node.node_type))
            .unwrap_or_default();
        println!("{:>3}. {} [{}]", position + 1, title, id);
    }
}

async fn run_simulate(path: &str, delay_ms: u64, headless: bool) {
    let workflow = load_workflow(path);
    let mut builder =
        Simulator::builder(StaticCatalog::hr_defaults()).with_reveal_delay(Duration::from_millis(delay_ms));
    if headless {
        builder = builder.headless();
    }
    let simulator = builder.build();

    println!("\nStarting simulation...");
    let started = Instant::now();
    let staged = simulator
        .simulate_staged(&workflow)
        .await
        .unwrap_or_else(|e| exit_with_error(&format!("Simulation failed unexpectedly: {}", e)));

    if !staged.success() {
        println!("\nSimulation blocked:");
        for error in staged.errors() {
            println!("  -> {}", error);
        }
        std::process::exit(1);
    }

    let total = staged.step_count();
    let mut steps = Box::pin(staged.steps());
    while let Some(step) = steps.next().await {
        println!(
            "  [{}] {:<9} {} - {}",
            step.timestamp, step.node_type, step.title, step.message
        );
    }

    println!("\nSimulation Finished!");
    println!("Steps completed: {}", total);
    println!("Elapsed:         {:?}", started.elapsed());
}

async fn run_actions() {
    let catalog = StaticCatalog::hr_defaults();
    let actions = catalog
        .list_actions()
        .await
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to list actions: {}", e)));

    println!("--- Automation Actions ---");
    for action in actions {
        println!(
            "  {:<18} {:<24} params: {}",
            action.id,
            action.label,
            action.params.join(", ")
        );
    }
}

fn run_new(output_path: &str) {
    let mut workflow = Workflow::new();
    let start = workflow.add_node(NodeType::Start, Position::new(250.0, 50.0));
    let end = workflow.add_node(NodeType::End, Position::new(250.0, 250.0));
    workflow.add_edge(start, end);

    workflow
        .save(output_path)
        .unwrap_or_else(|e| exit_with_error(&e.to_string()));
    println!("Wrote starter workflow to '{}'", output_path);
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
