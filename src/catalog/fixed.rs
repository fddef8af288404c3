use super::{ActionCatalog, AutomationAction};
use crate::error::CatalogError;
use std::time::Duration;

/// An in-memory catalog, optionally answering after an artificial latency.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    actions: Vec<AutomationAction>,
    latency: Option<Duration>,
}

impl StaticCatalog {
    pub fn new(actions: Vec<AutomationAction>) -> Self {
        Self {
            actions,
            latency: None,
        }
    }

    /// The stock HR automations offered by the designer.
    pub fn hr_defaults() -> Self {
        Self::new(vec![
            AutomationAction::new("send_email", "Send Email", &["to", "subject", "body"]),
            AutomationAction::new("generate_doc", "Generate Document", &["template", "recipient"]),
            AutomationAction::new("send_slack", "Send Slack Message", &["channel", "message"]),
            AutomationAction::new("create_ticket", "Create Support Ticket", &["title", "priority"]),
            AutomationAction::new("update_record", "Update HR Record", &["field", "value"]),
            AutomationAction::new("schedule_meeting", "Schedule Meeting", &["attendees", "duration"]),
        ])
    }

    /// Delays every answer by `latency`, mimicking a remote service.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    pub fn actions(&self) -> &[AutomationAction] {
        &self.actions
    }

    async fn wait(&self) {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
    }
}

impl ActionCatalog for StaticCatalog {
    async fn list_actions(&self) -> Result<Vec<AutomationAction>, CatalogError> {
        self.wait().await;
        Ok(self.actions.clone())
    }

    async fn find_action(&self, id: &str) -> Result<Option<AutomationAction>, CatalogError> {
        self.wait().await;
        Ok(self.actions.iter().find(|action| action.id == id).cloned())
    }
}
