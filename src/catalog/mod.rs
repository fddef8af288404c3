//! The automation action catalog consulted by `automated` nodes.
//!
//! The engine only ever reads from a catalog: validation ignores it, and the
//! simulator uses it to turn an `actionId` into a human-readable label.

use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::future::Future;

mod fixed;

pub use fixed::StaticCatalog;

/// An automatable action and the parameter names it expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutomationAction {
    pub id: String,
    pub label: String,
    pub params: Vec<String>,
}

impl AutomationAction {
    pub fn new(id: impl Into<String>, label: impl Into<String>, params: &[&str]) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            params: params.iter().map(|p| p.to_string()).collect(),
        }
    }
}

/// Read-only access to the available automation actions.
///
/// Implementations may be remote. A lookup that finds nothing must return
/// `Ok(None)`; `Err` is reserved for a catalog that cannot be reached at all.
pub trait ActionCatalog: Send + Sync {
    /// Lists every action in catalog order.
    fn list_actions(&self) -> impl Future<Output = Result<Vec<AutomationAction>, CatalogError>> + Send;

    /// Looks up a single action by id.
    ///
    /// The default implementation scans `list_actions`.
    fn find_action(
        &self,
        id: &str,
    ) -> impl Future<Output = Result<Option<AutomationAction>, CatalogError>> + Send {
        async move {
            let actions = self.list_actions().await?;
            Ok(actions.into_iter().find(|action| action.id == id))
        }
    }
}
