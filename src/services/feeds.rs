//! Feeds service.

use super::{body_collection, body_section, require_text};
use crate::client::RequestExecutor;
use crate::error::{SellerCenterError, StructuralError};
use crate::factories::{feed_response, FromXml};
use crate::types::{Feed, FeedResponse};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Service for the feeds created by write actions.
pub struct FeedsService {
    executor: Arc<RequestExecutor>,
}

impl FeedsService {
    /// Create a new feeds service.
    pub fn new(executor: Arc<RequestExecutor>) -> Self {
        Self { executor }
    }

    /// Processing status and results of a feed.
    #[instrument(skip(self))]
    pub async fn get_feed_status(&self, feed_id: &str) -> Result<Feed, SellerCenterError> {
        require_text(feed_id, "FeedID")?;

        let params = self.executor.parameters().with("FeedID", feed_id);
        let response = self.executor.get("FeedStatus", &params).await?;

        let detail = body_section(&response, "FeedDetail")?;
        let feed = detail
            .child("Feed")
            .ok_or_else(|| StructuralError::missing("FeedDetail", "Feed"))?;
        let feed = Feed::from_xml(feed)?;

        debug!(status = %feed.status, processed = feed.processed_records, "Fetched feed status");
        Ok(feed)
    }

    /// Recent feeds of the seller.
    #[instrument(skip(self))]
    pub async fn get_feed_list(&self) -> Result<Vec<Feed>, SellerCenterError> {
        let response = self
            .executor
            .get("FeedList", &self.executor.parameters())
            .await?;
        body_collection(&response, "Feeds")
    }

    /// Cancel a queued feed.
    #[instrument(skip(self))]
    pub async fn cancel_feed(&self, feed_id: &str) -> Result<FeedResponse, SellerCenterError> {
        require_text(feed_id, "FeedID")?;

        let params = self.executor.parameters().with("FeedID", feed_id);
        let response = self.executor.get("FeedCancel", &params).await?;

        info!(feed_id, "Feed canceled");
        feed_response(response.head())
    }
}

impl std::fmt::Debug for FeedsService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeedsService").finish_non_exhaustive()
    }
}
