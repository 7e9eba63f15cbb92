//! Mock implementations of port traits
//!
//! In-memory implementations that can be configured for testing.
//! They record every call so tests can verify what was requested.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::domain::entities::ActionRecord;
use crate::domain::ports::{BoardHandle, TrelloClient};
use crate::error::TrelloError;

// ============================================================================
// Mock Trello Client
// ============================================================================

#[derive(Default)]
pub struct MockTrelloClient {
    boards: Arc<RwLock<Vec<BoardHandle>>>,
    actions: Arc<RwLock<HashMap<String, Vec<ActionRecord>>>>,
    aggregate: Arc<RwLock<Vec<ActionRecord>>>,
    calls: Arc<RwLock<Vec<String>>>,
    should_fail: Arc<RwLock<bool>>,
}

impl MockTrelloClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a board visible to the token, with its actions
    pub fn with_board(self, board: BoardHandle, actions: Vec<ActionRecord>) -> Self {
        self.actions
            .write()
            .unwrap()
            .insert(board.id.clone(), actions);
        self.boards.write().unwrap().push(board);
        self
    }

    /// Set the result of the aggregate (all private activity) call
    pub fn with_aggregate(self, actions: Vec<ActionRecord>) -> Self {
        *self.aggregate.write().unwrap() = actions;
        self
    }

    /// Make every call fail as unauthorized
    pub fn failing(self) -> Self {
        *self.should_fail.write().unwrap() = true;
        self
    }

    /// Calls made so far, in order
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }

    fn record(&self, call: String) -> Result<(), TrelloError> {
        self.calls.write().unwrap().push(call);
        if *self.should_fail.read().unwrap() {
            return Err(TrelloError::Unauthorized);
        }
        Ok(())
    }
}

#[async_trait]
impl TrelloClient for MockTrelloClient {
    async fn list_boards_for_token(&self) -> Result<Vec<BoardHandle>, TrelloError> {
        self.record("list_boards".to_string())?;
        Ok(self.boards.read().unwrap().clone())
    }

    async fn get_board(&self, id: &str) -> Result<BoardHandle, TrelloError> {
        self.record(format!("get_board {}", id))?;
        self.boards
            .read()
            .unwrap()
            .iter()
            .find(|b| b.id == id)
            .cloned()
            .ok_or_else(|| TrelloError::BoardNotFound(id.to_string()))
    }

    async fn fetch_actions(
        &self,
        board: Option<&BoardHandle>,
        filter: &str,
    ) -> Result<Vec<ActionRecord>, TrelloError> {
        let target = board.map(|b| b.id.as_str()).unwrap_or("*");
        self.record(format!("fetch_actions {} {}", target, filter))?;

        match board {
            Some(board) => Ok(self
                .actions
                .read()
                .unwrap()
                .get(&board.id)
                .cloned()
                .unwrap_or_default()),
            None => Ok(self.aggregate.read().unwrap().clone()),
        }
    }
}
