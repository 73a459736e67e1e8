//! Webhook types.

use serde::{Deserialize, Serialize};

/// A registered webhook.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Webhook {
    /// Webhook id.
    pub webhook_id: String,
    /// URL notified by the platform.
    pub callback_url: String,
    /// Who registered the webhook, e.g. `api` or `web`.
    pub webhook_source: String,
    /// Subscribed event aliases.
    pub events: Vec<String>,
}

/// An entity whose events can be subscribed to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookEntity {
    /// Entity name, e.g. `Order`.
    pub name: String,
    /// Events of the entity.
    pub events: Vec<WebhookEvent>,
}

/// An event that can be subscribed to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookEvent {
    /// Event name.
    pub name: String,
    /// Alias used when subscribing.
    pub alias: String,
}

impl WebhookEntity {
    /// Whether the entity offers an event alias.
    pub fn has_alias(&self, alias: &str) -> bool {
        self.events.iter().any(|e| e.alias == alias)
    }
}
