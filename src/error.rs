use thiserror::Error;

/// Errors that can occur while importing or exporting a workflow document.
///
/// Import is all-or-nothing: any of these leaves the target workflow untouched.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DocumentError {
    #[error("Failed to parse workflow JSON: {0}")]
    JsonParseError(String),

    #[error("Workflow document must be a JSON object with '{0}' as an array")]
    MissingCollection(&'static str),

    #[error("Node record {index} is invalid: {message}")]
    InvalidNode { index: usize, message: String },

    #[error("Edge record {index} is invalid: {message}")]
    InvalidEdge { index: usize, message: String },

    #[error("Node id '{0}' appears more than once")]
    DuplicateNodeId(String),

    #[error("Node '{node_id}' declares type '{declared}' but its data is of type '{actual}'")]
    NodeTypeMismatch {
        node_id: String,
        declared: String,
        actual: String,
    },

    #[error("Failed to serialize workflow: {0}")]
    SerializeError(String),
}

/// Errors raised by an action catalog that cannot be reached.
///
/// A lookup that simply finds nothing is not an error; it is `Ok(None)`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Action catalog is unavailable: {0}")]
    Unavailable(String),
}

/// Errors that abort a simulation run.
///
/// Structural problems with the workflow are never reported here; they end up in
/// `SimulationResult::errors`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    #[error("Simulation aborted: {0}")]
    Catalog(#[from] CatalogError),
}
