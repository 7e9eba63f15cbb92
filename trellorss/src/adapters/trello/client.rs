//! Trello API client implementation

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use urlencoding::encode;

use crate::domain::entities::ActionRecord;
use crate::domain::ports::{BoardHandle, TrelloClient};
use crate::error::TrelloError;

const BOARD_FIELDS: &str = "id,name,closed";

/// Implementation of the Trello API client
pub struct TrelloClientImpl {
    http: Client,
    base_url: String,
    api_key: String,
    token: Option<String>,
}

impl TrelloClientImpl {
    pub fn new(base_url: String, api_key: String, token: Option<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            token,
        }
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Key and (when present) token query parameters
    fn auth_query(&self) -> Vec<(&'static str, &str)> {
        let mut query = vec![("key", self.api_key.as_str())];
        if let Some(token) = &self.token {
            query.push(("token", token.as_str()));
        }
        query
    }

    async fn get<T: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T, TrelloError> {
        tracing::debug!("GET {}", path);

        let resp = self
            .http
            .get(self.api_url(path))
            .query(&self.auth_query())
            .query(params)
            .send()
            .await?;

        self.handle_response(resp).await
    }

    async fn handle_response<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, TrelloError> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| TrelloError::Deserialization(e.to_string()))
        } else if status.as_u16() == 401 {
            Err(TrelloError::Unauthorized)
        } else if status.as_u16() == 429 {
            Err(TrelloError::RateLimited)
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(TrelloError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

/// A board with its actions nested, as returned by the aggregate call
#[derive(Deserialize)]
struct BoardWithActions {
    #[serde(default)]
    closed: bool,
    #[serde(default)]
    actions: Vec<ActionRecord>,
}

fn not_found_as_board(err: TrelloError, id: &str) -> TrelloError {
    match err {
        TrelloError::Api { status: 404, .. } => TrelloError::BoardNotFound(id.to_string()),
        other => other,
    }
}

#[async_trait]
impl TrelloClient for TrelloClientImpl {
    async fn list_boards_for_token(&self) -> Result<Vec<BoardHandle>, TrelloError> {
        self.get("/members/me/boards", &[("fields", BOARD_FIELDS)])
            .await
    }

    async fn get_board(&self, id: &str) -> Result<BoardHandle, TrelloError> {
        self.get(
            &format!("/boards/{}", encode(id)),
            &[("fields", BOARD_FIELDS)],
        )
        .await
        .map_err(|e| not_found_as_board(e, id))
    }

    async fn fetch_actions(
        &self,
        board: Option<&BoardHandle>,
        filter: &str,
    ) -> Result<Vec<ActionRecord>, TrelloError> {
        match board {
            Some(board) => self
                .get(
                    &format!("/boards/{}/actions", encode(&board.id)),
                    &[("filter", filter)],
                )
                .await
                .map_err(|e| not_found_as_board(e, &board.id)),
            None => {
                let boards: Vec<BoardWithActions> = self
                    .get(
                        "/members/me/boards",
                        &[
                            ("filter", "open"),
                            ("fields", BOARD_FIELDS),
                            ("actions", filter),
                        ],
                    )
                    .await?;

                Ok(boards
                    .into_iter()
                    .filter(|b| !b.closed)
                    .flat_map(|b| b.actions)
                    .collect())
            }
        }
    }
}
