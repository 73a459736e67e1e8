//! Webhook factories.

use super::{collect_nested, CollectionItem, Fields, FromXml, Result};
use crate::types::{Webhook, WebhookEntity, WebhookEvent};
use crate::xml::Node;

impl FromXml for Webhook {
    fn from_xml(node: &Node) -> Result<Self> {
        let f = Fields::require(
            "Webhook",
            node,
            &["WebhookId", "CallbackUrl", "WebhookSource", "Events"],
        )?;
        Ok(Webhook {
            webhook_id: f.string("WebhookId"),
            callback_url: f.string("CallbackUrl"),
            webhook_source: f.string("WebhookSource"),
            events: f.texts("Events", "Event"),
        })
    }
}

impl CollectionItem for Webhook {
    const PLURAL: &'static str = "Webhooks";
    const SINGULAR: &'static str = "Webhook";
}

impl FromXml for WebhookEvent {
    fn from_xml(node: &Node) -> Result<Self> {
        let f = Fields::require("Event", node, &["Name", "Alias"])?;
        Ok(WebhookEvent {
            name: f.string("Name"),
            alias: f.string("Alias"),
        })
    }
}

impl FromXml for WebhookEntity {
    fn from_xml(node: &Node) -> Result<Self> {
        let f = Fields::require("Entity", node, &["Name", "Events"])?;
        let events = match f.child("Events") {
            Some(list) => collect_nested(list, "Event", WebhookEvent::from_xml)?,
            None => Vec::new(),
        };
        Ok(WebhookEntity {
            name: f.string("Name"),
            events,
        })
    }
}

impl CollectionItem for WebhookEntity {
    const PLURAL: &'static str = "Entities";
    const SINGULAR: &'static str = "Entity";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::TestFixtures;
    use crate::xml;

    #[test]
    fn test_webhooks() {
        let webhooks =
            Vec::<Webhook>::from_xml(&xml::parse(TestFixtures::webhooks_xml()).unwrap()).unwrap();
        assert_eq!(webhooks.len(), 2);
        assert_eq!(webhooks[0].webhook_id, "wh-1");
        assert_eq!(webhooks[0].events, vec!["onOrderCreated", "onOrderItemsStatusChanged"]);
        assert!(webhooks[1].events.is_empty());
    }

    #[test]
    fn test_entities() {
        let entities =
            Vec::<WebhookEntity>::from_xml(&xml::parse(TestFixtures::webhook_entities_xml()).unwrap())
                .unwrap();
        assert_eq!(entities.len(), 2);
        assert!(entities[0].has_alias("onOrderCreated"));
        assert!(!entities[0].has_alias("onFeedCompleted"));
        assert_eq!(entities[1].events[0].name, "Completed");
    }

    #[test]
    fn test_missing_event_alias() {
        let xml = "<Entities><Entity><Name>Order</Name><Events><Event><Name>Created</Name></Event></Events></Entity></Entities>";
        let err = Vec::<WebhookEntity>::from_xml(&xml::parse(xml).unwrap()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "The xml structure is not valid for a Event. The property Alias should exist."
        );
    }
}
