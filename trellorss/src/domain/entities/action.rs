//! Action record entity
//!
//! The raw, loosely shaped action payload returned by the Trello API.
//! Every field is optional here; the classifier decides which ones a
//! given action type actually requires.

use serde::Deserialize;

/// Placeholder used when a check item's checklist name is missing
pub const UNKNOWN_CHECKLIST: &str = "??";

/// A single recorded event on a board
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub action_type: String,
    pub date: String,
    #[serde(default)]
    pub member_creator: Option<MemberCreator>,
    #[serde(default)]
    pub data: ActionData,
}

impl ActionRecord {
    /// Full name of the member who performed the action
    pub fn actor(&self) -> Option<&str> {
        self.member_creator
            .as_ref()
            .and_then(|m| m.full_name.as_deref())
    }
}

/// The member who created an action
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberCreator {
    #[serde(default)]
    pub full_name: Option<String>,
}

/// Type-dependent payload of an action
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionData {
    #[serde(default)]
    pub board: Option<BoardRef>,
    #[serde(default)]
    pub card: Option<CardRef>,
    #[serde(default)]
    pub list: Option<NamedRef>,
    #[serde(default)]
    pub list_before: Option<NamedRef>,
    #[serde(default)]
    pub list_after: Option<NamedRef>,
    #[serde(default)]
    pub checklist: Option<NamedRef>,
    #[serde(default)]
    pub check_item: Option<CheckItemRef>,
    #[serde(default)]
    pub text: Option<String>,
}

/// Accessors that paper over inconsistent API responses.
impl ActionData {
    /// Card identifier for URLs: the short id when present, else the long id.
    pub fn card_id(&self) -> Option<String> {
        let card = self.card.as_ref()?;
        match &card.id_short {
            Some(short) => Some(short.to_string()),
            None => card.id.clone(),
        }
    }

    /// Checklist name, or a placeholder when the API left it out.
    pub fn checklist_name(&self) -> &str {
        self.checklist
            .as_ref()
            .and_then(|c| c.name.as_deref())
            .unwrap_or(UNKNOWN_CHECKLIST)
    }

    pub fn board_id(&self) -> Option<&str> {
        self.board.as_ref().and_then(|b| b.id.as_deref())
    }

    pub fn board_name(&self) -> Option<&str> {
        self.board.as_ref().and_then(|b| b.name.as_deref())
    }

    pub fn card_name(&self) -> Option<&str> {
        self.card.as_ref().and_then(|c| c.name.as_deref())
    }
}

/// Board reference embedded in an action
#[derive(Debug, Clone, Deserialize)]
pub struct BoardRef {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// Card reference embedded in an action
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardRef {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub id_short: Option<ShortId>,
    #[serde(default)]
    pub name: Option<String>,
}

/// Board-local card number; the API sends it as a number, older payloads as a string
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ShortId {
    Number(i64),
    Text(String),
}

impl std::fmt::Display for ShortId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShortId::Number(n) => write!(f, "{}", n),
            ShortId::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Anything referenced only by name (lists, checklists)
#[derive(Debug, Clone, Deserialize)]
pub struct NamedRef {
    #[serde(default)]
    pub name: Option<String>,
}

/// Check item reference with its completion state
#[derive(Debug, Clone, Deserialize)]
pub struct CheckItemRef {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
}
