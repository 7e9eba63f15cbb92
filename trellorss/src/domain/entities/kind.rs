//! Item kinds
//!
//! User-facing kinds ("cards", "comments", ...) and the Trello action
//! filter tokens each one expands to.

use std::collections::BTreeMap;

use crate::error::{AppError, ConfigError};

/// Built-in kind table. Config can add kinds or override these.
pub const DEFAULT_KINDS: &[(&str, &str)] = &[
    ("boards", "createBoard"),
    ("cards", "createCard"),
    ("checkitems", "updateCheckItemStateOnCard"),
    ("checklists", "addChecklistToCard"),
    ("comments", "commentCard"),
    ("lists", "createList"),
    ("moves", "updateCard:idList"),
];

/// Mapping from kind name to API filter tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KindTable {
    kinds: BTreeMap<String, Vec<String>>,
}

impl Default for KindTable {
    fn default() -> Self {
        let kinds = DEFAULT_KINDS
            .iter()
            .map(|(kind, token)| (kind.to_string(), vec![token.to_string()]))
            .collect();
        Self { kinds }
    }
}

impl KindTable {
    /// Merge `kind=token[,token];kind=token` entries over the current table
    pub fn merge_spec(mut self, spec: &str) -> Result<Self, ConfigError> {
        for entry in spec.split(';').map(str::trim).filter(|e| !e.is_empty()) {
            let (kind, tokens) = entry
                .split_once('=')
                .ok_or_else(|| ConfigError::InvalidKindTable(entry.to_string()))?;

            let kind = kind.trim();
            let tokens: Vec<String> = tokens
                .split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect();

            if kind.is_empty() || tokens.is_empty() {
                return Err(ConfigError::InvalidKindTable(entry.to_string()));
            }

            self.kinds.insert(kind.to_string(), tokens);
        }
        Ok(self)
    }

    /// All known kind names, sorted
    pub fn names(&self) -> Vec<String> {
        self.kinds.keys().cloned().collect()
    }

    /// Comma-joined API filter for the requested kinds, in request order
    pub fn filter_for<S: AsRef<str>>(&self, kinds: &[S]) -> Result<String, AppError> {
        let mut tokens: Vec<&str> = Vec::new();
        for kind in kinds {
            let kind = kind.as_ref();
            let mapped = self
                .kinds
                .get(kind)
                .ok_or_else(|| AppError::UnsupportedKind(kind.to_string()))?;

            for token in mapped {
                if !tokens.contains(&token.as_str()) {
                    tokens.push(token);
                }
            }
        }
        Ok(tokens.join(","))
    }
}
