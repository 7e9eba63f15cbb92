//! Feed service
//!
//! One generation run: fetch raw actions, classify them, assemble the feed.
//! Any error aborts the run; there is no partial feed.

use std::sync::Arc;

use crate::domain::entities::{Channel, FeedItem, KindTable, Scope};
use crate::domain::ports::TrelloClient;
use crate::error::AppError;

use super::action_classifier::classify;
use super::activity_fetcher::ActivityFetcher;
use super::feed_assembler::{assemble, Feed};

/// Service for generating RSS feeds from Trello activity
pub struct FeedService<TC>
where
    TC: TrelloClient,
{
    fetcher: ActivityFetcher<TC>,
    channel: Channel,
}

impl<TC> FeedService<TC>
where
    TC: TrelloClient,
{
    pub fn new(trello: Arc<TC>, kinds: KindTable, channel: Channel) -> Self {
        Self {
            fetcher: ActivityFetcher::new(trello, kinds),
            channel,
        }
    }

    /// Every kind this service knows about
    pub fn all_kinds(&self) -> Vec<String> {
        self.fetcher.kinds().names()
    }

    /// Generate a feed for the given kinds and scope, newest first
    pub async fn generate<S: AsRef<str>>(
        &mut self,
        item_kinds: &[S],
        scope: &Scope,
        limit: Option<usize>,
    ) -> Result<Feed, AppError> {
        let groups = self.fetcher.fetch(item_kinds, scope).await?;

        let mut items: Vec<FeedItem> = Vec::new();
        for record in groups.iter().flatten() {
            if let Some(item) = classify(record)? {
                items.push(item);
            }
        }

        tracing::info!(
            "Classified {} feed items from {} boards",
            items.len(),
            groups.len()
        );

        Ok(assemble(&self.channel, items, limit))
    }
}
