//! Activity fetcher
//!
//! Retrieves raw action records for a scope, grouped per board.

use std::sync::Arc;

use crate::domain::entities::{ActionRecord, KindTable, Scope};
use crate::domain::ports::{BoardHandle, TrelloClient};
use crate::error::AppError;

/// Fetches raw actions from Trello.
///
/// The token's board list is fetched at most once per fetcher and reused for
/// later `Scope::AllBoards` calls.
pub struct ActivityFetcher<TC>
where
    TC: TrelloClient,
{
    trello: Arc<TC>,
    kinds: KindTable,
    boards: Option<Vec<BoardHandle>>,
}

impl<TC> ActivityFetcher<TC>
where
    TC: TrelloClient,
{
    pub fn new(trello: Arc<TC>, kinds: KindTable) -> Self {
        Self {
            trello,
            kinds,
            boards: None,
        }
    }

    pub fn kinds(&self) -> &KindTable {
        &self.kinds
    }

    /// Fetch actions of the requested kinds, one group per board.
    ///
    /// Unknown kinds fail before any network call. Closed boards are skipped
    /// and boards with no matching actions are left out. The aggregate scope
    /// yields at most one group.
    pub async fn fetch<S: AsRef<str>>(
        &mut self,
        item_kinds: &[S],
        scope: &Scope,
    ) -> Result<Vec<Vec<ActionRecord>>, AppError> {
        let filter = self.kinds.filter_for(item_kinds)?;
        tracing::info!("Fetching {} for {}", filter, scope);

        match scope {
            Scope::AllPrivate => {
                let actions = self.trello.fetch_actions(None, &filter).await?;
                tracing::debug!("Aggregate call returned {} actions", actions.len());
                Ok(if actions.is_empty() {
                    Vec::new()
                } else {
                    vec![actions]
                })
            }
            Scope::Board { id, .. } => {
                let board = self.trello.get_board(id).await?;
                self.fetch_per_board(&[board], &filter).await
            }
            Scope::AllBoards => {
                let boards = self.boards().await?;
                self.fetch_per_board(&boards, &filter).await
            }
        }
    }

    async fn boards(&mut self) -> Result<Vec<BoardHandle>, AppError> {
        if let Some(boards) = &self.boards {
            return Ok(boards.clone());
        }

        let boards = self.trello.list_boards_for_token().await?;
        tracing::debug!("Token can see {} boards", boards.len());
        self.boards = Some(boards.clone());
        Ok(boards)
    }

    async fn fetch_per_board(
        &self,
        boards: &[BoardHandle],
        filter: &str,
    ) -> Result<Vec<Vec<ActionRecord>>, AppError> {
        let mut groups = Vec::new();

        for board in boards {
            if board.closed {
                tracing::warn!("Skipping closed board {} ({})", board.name, board.id);
                continue;
            }

            let actions = self.trello.fetch_actions(Some(board), filter).await?;
            tracing::debug!("Board {} has {} actions", board.id, actions.len());

            if !actions.is_empty() {
                groups.push(actions);
            }
        }

        Ok(groups)
    }
}
