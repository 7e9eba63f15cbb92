//! Feed item and channel entities

use chrono::{DateTime, Utc};

pub const DEFAULT_CHANNEL_TITLE: &str = "My Trello RSS Feed";
pub const DEFAULT_CHANNEL_LINK: &str = "http://trello.com";
pub const DEFAULT_CHANNEL_DESCRIPTION: &str = "Trello RSS Feed";

/// One normalized entry of the feed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedItem {
    pub title: String,
    pub link: String,
    /// Free text carried by the action (comments), otherwise empty
    pub description: String,
    pub published_at: DateTime<Utc>,
}

/// Channel metadata for the whole feed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Channel {
    pub title: String,
    pub link: String,
    pub description: String,
}

impl Default for Channel {
    fn default() -> Self {
        Self {
            title: DEFAULT_CHANNEL_TITLE.to_string(),
            link: DEFAULT_CHANNEL_LINK.to_string(),
            description: DEFAULT_CHANNEL_DESCRIPTION.to_string(),
        }
    }
}
