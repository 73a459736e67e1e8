//! Feed types.
//!
//! Write actions are processed asynchronously by the platform: the response
//! only acknowledges a feed, whose progress is then queried separately.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Processing state of a feed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feed {
    /// Feed id.
    pub feed_id: String,
    /// Status, e.g. `Queued`, `Processing` or `Finished`.
    pub status: String,
    /// Action that created the feed.
    pub action: String,
    /// Creation date.
    pub creation_date: Option<NaiveDateTime>,
    /// Last update.
    pub updated_date: Option<NaiveDateTime>,
    /// Source, e.g. `api`.
    pub source: String,
    /// Number of records in the feed.
    pub total_records: u32,
    /// Records processed so far.
    pub processed_records: u32,
    /// Records that failed.
    pub failed_records: u32,
    /// Downloadable report of the failures.
    pub failure_reports: Option<FailureReport>,
    /// Errors per record.
    pub errors: Vec<FeedError>,
    /// Warnings per record.
    pub warnings: Vec<FeedWarning>,
}

impl Feed {
    /// Whether the platform is done with the feed.
    pub fn is_finished(&self) -> bool {
        matches!(self.status.as_str(), "Finished" | "Canceled" | "Error")
    }
}

/// Error reported for one feed record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedError {
    /// Error code.
    pub code: u32,
    /// Error message.
    pub message: String,
    /// SKU the error refers to.
    pub seller_sku: String,
}

/// Warning reported for one feed record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedWarning {
    /// Warning message.
    pub message: String,
    /// SKU the warning refers to.
    pub seller_sku: String,
}

/// Report file listing the failed records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureReport {
    /// MIME type of the report.
    pub mime_type: Option<String>,
    /// Base64 encoded report content.
    pub file: Option<String>,
}

/// Acknowledgement of a write action.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedResponse {
    /// Request id, which is also the id of the created feed.
    pub request_id: String,
    /// Action acknowledged.
    pub request_action: String,
    /// Response type.
    pub response_type: String,
    /// Timestamp as sent by the platform.
    pub timestamp: String,
}

impl FeedResponse {
    /// Id of the feed created by the action.
    pub fn feed_id(&self) -> &str {
        &self.request_id
    }
}
