//! Feed module
//!
//! RSS rendering of assembled feeds.

pub mod renderer;

pub use renderer::render_feed;
