//! Webhook request documents.

use super::REQUEST_ROOT;
use crate::xml::XmlBuilder;

/// Document for `CreateWebhook`.
pub fn webhook_create<S: AsRef<str>>(callback_url: &str, events: &[S]) -> String {
    let mut xml = XmlBuilder::document();
    xml.open(REQUEST_ROOT)
        .open("Webhook")
        .element("CallbackUrl", callback_url)
        .open("Events");
    for event in events {
        xml.element("Event", event.as_ref());
    }
    xml.close("Events").close("Webhook").close(REQUEST_ROOT);
    xml.finish()
}

/// Document for `DeleteWebhook`.
pub fn webhook_delete(webhook_id: &str) -> String {
    let mut xml = XmlBuilder::document();
    xml.open(REQUEST_ROOT)
        .element("Webhook", webhook_id)
        .close(REQUEST_ROOT);
    xml.finish()
}
