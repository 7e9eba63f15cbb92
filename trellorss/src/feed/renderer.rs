//! Feed renderer
//!
//! Renders an assembled feed to RSS 2.0 XML.

use rss::{ChannelBuilder, GuidBuilder, Item, ItemBuilder};

use crate::app::Feed;
use crate::domain::entities::FeedItem;
use crate::error::AppError;

const INDENT_SIZE: usize = 2;

/// Render a feed to pretty-printed RSS 2.0 XML
pub fn render_feed(feed: &Feed) -> Result<String, AppError> {
    let channel = ChannelBuilder::default()
        .title(feed.channel.title.clone())
        .link(feed.channel.link.clone())
        .description(feed.channel.description.clone())
        .last_build_date(Some(feed.last_build_date.to_rfc2822()))
        .items(feed.items.iter().map(render_item).collect::<Vec<_>>())
        .build();

    let buf = channel.pretty_write_to(Vec::new(), b' ', INDENT_SIZE)?;
    String::from_utf8(buf).map_err(|e| AppError::Render(e.to_string()))
}

fn render_item(item: &FeedItem) -> Item {
    let guid = GuidBuilder::default()
        .value(item.link.clone())
        .permalink(true)
        .build();

    ItemBuilder::default()
        .title(Some(item.title.clone()))
        .link(Some(item.link.clone()))
        .description(Some(item.description.clone()))
        .guid(Some(guid))
        .pub_date(Some(item.published_at.to_rfc2822()))
        .build()
}
