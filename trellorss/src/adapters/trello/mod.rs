//! Trello adapter
//!
//! Implementation of the Trello REST API client.

pub mod client;

pub use client::TrelloClientImpl;
