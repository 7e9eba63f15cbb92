use std::env;

use crate::domain::entities::feed_item::{
    DEFAULT_CHANNEL_DESCRIPTION, DEFAULT_CHANNEL_LINK, DEFAULT_CHANNEL_TITLE,
};
use crate::domain::entities::{Channel, KindTable, Scope};
use crate::error::ConfigError;

pub const DEFAULT_API_URL: &str = "https://api.trello.com/1";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    /// Needed for everything except reading a single public board
    pub token: Option<String>,
    /// Base URL of the Trello REST API
    pub api_url: String,
    pub channel: Channel,
    pub kinds: KindTable,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build a config from any variable source; empty values count as unset
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let api_key = var("TRELLO_API_KEY").ok_or(ConfigError::MissingVar("TRELLO_API_KEY"))?;

        let kinds = match var("TRELLO_RSS_KINDS") {
            Some(spec) => KindTable::default().merge_spec(&spec)?,
            None => KindTable::default(),
        };

        Ok(Self {
            api_key,
            token: var("TRELLO_TOKEN"),
            api_url: var("TRELLO_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            channel: Channel {
                title: var("RSS_CHANNEL_TITLE")
                    .unwrap_or_else(|| DEFAULT_CHANNEL_TITLE.to_string()),
                link: var("RSS_CHANNEL_LINK").unwrap_or_else(|| DEFAULT_CHANNEL_LINK.to_string()),
                description: var("RSS_CHANNEL_DESCRIPTION")
                    .unwrap_or_else(|| DEFAULT_CHANNEL_DESCRIPTION.to_string()),
            },
            kinds,
        })
    }

    /// Token to send for a scope; public boards are read with the key alone
    pub fn token_for(&self, scope: &Scope) -> Option<String> {
        if scope.requires_token() {
            self.token.clone()
        } else {
            None
        }
    }

    /// Check credentials against the scope before any request is made
    pub fn check_scope(&self, scope: &Scope) -> Result<(), ConfigError> {
        if scope.requires_token() && self.token.is_none() {
            return Err(ConfigError::MissingToken);
        }
        Ok(())
    }
}
