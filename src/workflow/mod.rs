pub mod command;
pub mod document;
pub mod edge;
pub mod graph;
pub mod index;
pub mod node;
pub mod patch;

pub use command::*;
pub use document::*;
pub use edge::*;
pub use graph::*;
pub use index::*;
pub use node::*;
pub use patch::*;
