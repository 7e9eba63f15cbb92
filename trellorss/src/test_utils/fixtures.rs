//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use chrono::{DateTime, Utc};
use serde_json::json;

use crate::domain::entities::{ActionRecord, FeedItem};
use crate::domain::ports::BoardHandle;

pub const TEST_ACTION_DATE: &str = "2013-06-30T12:00:00.000Z";

/// Create an action record of the given type with a fixed date
pub fn action(action_type: &str, actor: &str, data: serde_json::Value) -> ActionRecord {
    action_dated(action_type, actor, data, TEST_ACTION_DATE)
}

/// Create an action record with an explicit API timestamp
pub fn action_dated(
    action_type: &str,
    actor: &str,
    data: serde_json::Value,
    date: &str,
) -> ActionRecord {
    serde_json::from_value(json!({
        "id": format!("action-{}", action_type),
        "type": action_type,
        "date": date,
        "memberCreator": { "fullName": actor },
        "data": data,
    }))
    .expect("fixture action should deserialize")
}

/// Create a board handle
pub fn test_board(id: &str, closed: bool) -> BoardHandle {
    BoardHandle {
        id: id.to_string(),
        name: format!("Board {}", id),
        closed,
    }
}

/// Create a feed item published at a given time
pub fn feed_item_at(title: &str, published_at: DateTime<Utc>) -> FeedItem {
    FeedItem {
        title: title.to_string(),
        link: "https://trello.com/board/b1".to_string(),
        description: String::new(),
        published_at,
    }
}
