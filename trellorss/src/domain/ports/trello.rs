//! Trello client port trait
//!
//! Defines the read-only interface the fetcher needs from the Trello API.

use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::entities::ActionRecord;
use crate::error::TrelloError;

/// A board as returned by the board listing endpoints
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BoardHandle {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub closed: bool,
}

/// Port trait for Trello API operations
#[async_trait]
pub trait TrelloClient: Send + Sync {
    /// List every board visible to the configured token
    async fn list_boards_for_token(&self) -> Result<Vec<BoardHandle>, TrelloError>;

    /// Look up a single board by id
    async fn get_board(&self, id: &str) -> Result<BoardHandle, TrelloError>;

    /// Fetch actions matching `filter` (comma-joined API filter tokens).
    ///
    /// With `Some(board)` only that board's actions are returned; with `None`
    /// the aggregate activity of all the token's open boards is returned.
    async fn fetch_actions(
        &self,
        board: Option<&BoardHandle>,
        filter: &str,
    ) -> Result<Vec<ActionRecord>, TrelloError>;
}
