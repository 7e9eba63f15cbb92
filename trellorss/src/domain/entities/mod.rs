//! Domain entities
//!
//! Pure domain models: raw Trello actions on the way in, feed items on the way out.

pub mod action;
pub mod feed_item;
pub mod kind;
pub mod scope;

pub use action::ActionRecord;
pub use feed_item::{Channel, FeedItem};
pub use kind::KindTable;
pub use scope::Scope;
