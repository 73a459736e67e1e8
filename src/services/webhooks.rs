//! Webhooks service.

use super::{body_collection, body_section, require_non_empty, require_text};
use crate::client::RequestExecutor;
use crate::error::{DomainError, SellerCenterError, StructuralError};
use crate::parameters::json_list;
use crate::transformers;
use crate::types::{Webhook, WebhookEntity};
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Service for webhook registrations.
pub struct WebhooksService {
    executor: Arc<RequestExecutor>,
}

impl WebhooksService {
    /// Create a new webhooks service.
    pub fn new(executor: Arc<RequestExecutor>) -> Self {
        Self { executor }
    }

    /// Registered webhooks; all of them when `webhook_ids` is empty.
    #[instrument(skip(self))]
    pub async fn get_webhooks(&self, webhook_ids: &[&str]) -> Result<Vec<Webhook>, SellerCenterError> {
        let mut params = self.executor.parameters();
        if !webhook_ids.is_empty() {
            params.insert("WebhookIds", json_list(webhook_ids));
        }

        let response = self.executor.get("GetWebhooks", &params).await?;
        body_collection(&response, "Webhooks")
    }

    /// Entities that can be subscribed to, with their event aliases.
    #[instrument(skip(self))]
    pub async fn get_webhook_entities(&self) -> Result<Vec<WebhookEntity>, SellerCenterError> {
        let response = self
            .executor
            .get("GetWebhookEntities", &self.executor.parameters())
            .await?;
        body_collection(&response, "Entities")
    }

    /// Register a callback URL for a set of event aliases and return the
    /// new webhook id.
    ///
    /// Aliases are checked against [`get_webhook_entities`](Self::get_webhook_entities)
    /// before anything is created.
    #[instrument(skip(self))]
    pub async fn create_webhook(
        &self,
        callback_url: &str,
        events: &[&str],
    ) -> Result<String, SellerCenterError> {
        require_text(callback_url, "CallbackUrl")?;
        require_non_empty(events, "Events")?;

        let entities = self.get_webhook_entities().await?;
        if let Some(unknown) = events
            .iter()
            .find(|alias| !entities.iter().any(|entity| entity.has_alias(alias)))
        {
            warn!(alias = %unknown, "Unknown webhook event");
            return Err(DomainError::InvalidWebhookEvent {
                alias: unknown.to_string(),
            }
            .into());
        }

        let body = transformers::webhook_create(callback_url, events);
        let response = self
            .executor
            .post("CreateWebhook", &self.executor.parameters(), body)
            .await?;

        let webhook_id = body_section(&response, "Webhook")?
            .child_text("WebhookId")
            .map(|id| id.trim().to_string())
            .ok_or_else(|| StructuralError::missing("Webhook", "WebhookId"))?;

        info!(webhook_id = %webhook_id, "Webhook created");
        Ok(webhook_id)
    }

    /// Delete a webhook.
    #[instrument(skip(self))]
    pub async fn delete_webhook(&self, webhook_id: &str) -> Result<(), SellerCenterError> {
        require_text(webhook_id, "WebhookId")?;

        let body = transformers::webhook_delete(webhook_id);
        self.executor
            .post("DeleteWebhook", &self.executor.parameters(), body)
            .await?;

        info!(webhook_id, "Webhook deleted");
        Ok(())
    }
}

impl std::fmt::Debug for WebhooksService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebhooksService").finish_non_exhaustive()
    }
}
