//! Feed factories.

use super::{collect_nested, CollectionItem, Fields, FromXml, Result};
use crate::types::{FailureReport, Feed, FeedError, FeedResponse, FeedWarning};
use crate::xml::Node;

const FEED_FIELDS: &[&str] = &[
    "Feed",
    "Status",
    "Action",
    "CreationDate",
    "UpdatedDate",
    "Source",
    "TotalRecords",
    "ProcessedRecords",
    "FailedRecords",
    "FailureReports",
];

impl FromXml for FeedError {
    fn from_xml(node: &Node) -> Result<Self> {
        let f = Fields::require("Error", node, &["Code", "Message", "SellerSku"])?;
        Ok(FeedError {
            code: f.number("Code")?,
            message: f.string("Message"),
            seller_sku: f.string("SellerSku"),
        })
    }
}

impl FromXml for FeedWarning {
    fn from_xml(node: &Node) -> Result<Self> {
        let f = Fields::require("Warning", node, &["Message", "SellerSku"])?;
        Ok(FeedWarning {
            message: f.string("Message"),
            seller_sku: f.string("SellerSku"),
        })
    }
}

impl FromXml for Feed {
    fn from_xml(node: &Node) -> Result<Self> {
        let f = Fields::require("Feed", node, FEED_FIELDS)?;

        let failure_reports = f
            .child("FailureReports")
            .filter(|n| !n.is_empty())
            .map(|report| FailureReport {
                mime_type: report
                    .child_text("MimeType")
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .map(String::from),
                file: report
                    .child_text("File")
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .map(String::from),
            });

        let errors = match f.child("FeedErrors") {
            Some(list) => collect_nested(list, "Error", FeedError::from_xml)?,
            None => Vec::new(),
        };
        let warnings = match f.child("FeedWarnings") {
            Some(list) => collect_nested(list, "Warning", FeedWarning::from_xml)?,
            None => Vec::new(),
        };

        Ok(Feed {
            feed_id: f.string("Feed"),
            status: f.string("Status"),
            action: f.string("Action"),
            creation_date: f.datetime("CreationDate")?,
            updated_date: f.datetime("UpdatedDate")?,
            source: f.string("Source"),
            total_records: f.number("TotalRecords")?,
            processed_records: f.number("ProcessedRecords")?,
            failed_records: f.number("FailedRecords")?,
            failure_reports,
            errors,
            warnings,
        })
    }
}

impl CollectionItem for Feed {
    const PLURAL: &'static str = "Feeds";
    const SINGULAR: &'static str = "Feed";
}

/// Build the acknowledgement of a write action from the response `Head`.
pub fn feed_response(head: &Node) -> Result<FeedResponse> {
    let f = Fields::require(
        "FeedResponse",
        head,
        &["RequestId", "RequestAction", "ResponseType", "Timestamp"],
    )?;
    Ok(FeedResponse {
        request_id: f.string("RequestId"),
        request_action: f.string("RequestAction"),
        response_type: f.string("ResponseType"),
        timestamp: f.string("Timestamp"),
    })
}
