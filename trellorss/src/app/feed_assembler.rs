//! Feed assembler
//!
//! Orders feed items newest first and applies the item limit.

use chrono::{DateTime, Utc};

use crate::domain::entities::{Channel, FeedItem};

/// An assembled feed, ready to be rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feed {
    pub channel: Channel,
    /// Newest first
    pub items: Vec<FeedItem>,
    pub last_build_date: DateTime<Utc>,
}

/// Assemble a feed built now. `None` keeps every item.
pub fn assemble(channel: &Channel, items: Vec<FeedItem>, limit: Option<usize>) -> Feed {
    assemble_at(channel, items, limit, Utc::now())
}

/// Assemble a feed with an explicit build time.
///
/// Items with equal timestamps keep their input order (stable sort).
pub fn assemble_at(
    channel: &Channel,
    mut items: Vec<FeedItem>,
    limit: Option<usize>,
    built_at: DateTime<Utc>,
) -> Feed {
    items.sort_by(|a, b| b.published_at.cmp(&a.published_at));

    if let Some(limit) = limit {
        items.truncate(limit);
    }

    Feed {
        channel: channel.clone(),
        items,
        last_build_date: built_at,
    }
}
