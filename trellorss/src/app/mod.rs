//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and external systems.

pub mod action_classifier;
pub mod activity_fetcher;
pub mod feed_assembler;
pub mod feed_service;

pub use feed_assembler::Feed;
pub use feed_service::FeedService;
