//! Action classifier
//!
//! Turns raw Trello action records into feed items. Each recognized action
//! type becomes a `BoardAction` variant carrying only the fields it needs;
//! every other type is dropped.

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::domain::entities::{ActionRecord, FeedItem};
use crate::error::ClassifyError;

/// Base of every generated link
pub const TRELLO_WEB_BASE: &str = "https://trello.com";

/// Fractional seconds and zone marker trailing every API timestamp (".123Z")
const DATE_PREFIX_LEN: usize = 19;
const DATE_SUFFIX_LEN: usize = 5;
const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// A recognized board action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardAction {
    CommentCard {
        actor: String,
        board: String,
        board_id: String,
        card: String,
        card_id: String,
        text: String,
    },
    CreateCard {
        actor: String,
        board: String,
        board_id: String,
        card: String,
        card_id: String,
    },
    CreateBoard {
        actor: String,
        board: String,
        board_id: String,
    },
    CreateList {
        actor: String,
        board: String,
        board_id: String,
        list: String,
    },
    AddChecklistToCard {
        actor: String,
        board_id: String,
        card: String,
        card_id: String,
        checklist: String,
    },
    /// An `updateCard` that moved the card between lists
    MoveCard {
        actor: String,
        board_id: String,
        card: String,
        card_id: String,
        list_before: String,
        list_after: String,
    },
    CheckItemState {
        actor: String,
        board_id: String,
        card: String,
        card_id: String,
        checklist: String,
        item: String,
        complete: bool,
    },
}

fn require(
    value: Option<&str>,
    action_type: &str,
    field: &'static str,
) -> Result<String, ClassifyError> {
    value
        .map(str::to_string)
        .ok_or_else(|| ClassifyError::MissingField {
            action_type: action_type.to_string(),
            field,
        })
}

impl BoardAction {
    /// Recognize an action record.
    ///
    /// Returns `Ok(None)` for types that don't belong in the feed, including
    /// `updateCard` records that are not list moves.
    pub fn from_record(record: &ActionRecord) -> Result<Option<Self>, ClassifyError> {
        let ty = record.action_type.as_str();
        let data = &record.data;

        let recognized = matches!(
            ty,
            "commentCard"
                | "createCard"
                | "createBoard"
                | "createList"
                | "addChecklistToCard"
                | "updateCard"
                | "updateCheckItemStateOnCard"
        );
        if !recognized {
            return Ok(None);
        }
        if ty == "updateCard" && (data.list_before.is_none() || data.list_after.is_none()) {
            return Ok(None);
        }

        let actor = require(record.actor(), ty, "memberCreator.fullName")?;
        let board_id = require(data.board_id(), ty, "data.board.id")?;

        let action = match ty {
            "commentCard" => BoardAction::CommentCard {
                actor,
                board: require(data.board_name(), ty, "data.board.name")?,
                board_id,
                card: require(data.card_name(), ty, "data.card.name")?,
                card_id: require(data.card_id().as_deref(), ty, "data.card.id")?,
                text: require(data.text.as_deref(), ty, "data.text")?,
            },
            "createCard" => BoardAction::CreateCard {
                actor,
                board: require(data.board_name(), ty, "data.board.name")?,
                board_id,
                card: require(data.card_name(), ty, "data.card.name")?,
                card_id: require(data.card_id().as_deref(), ty, "data.card.id")?,
            },
            "createBoard" => BoardAction::CreateBoard {
                actor,
                board: require(data.board_name(), ty, "data.board.name")?,
                board_id,
            },
            "createList" => BoardAction::CreateList {
                actor,
                board: require(data.board_name(), ty, "data.board.name")?,
                board_id,
                list: require(
                    data.list.as_ref().and_then(|l| l.name.as_deref()),
                    ty,
                    "data.list.name",
                )?,
            },
            "addChecklistToCard" => BoardAction::AddChecklistToCard {
                actor,
                board_id,
                card: require(data.card_name(), ty, "data.card.name")?,
                card_id: require(data.card_id().as_deref(), ty, "data.card.id")?,
                checklist: require(
                    data.checklist.as_ref().and_then(|c| c.name.as_deref()),
                    ty,
                    "data.checklist.name",
                )?,
            },
            "updateCard" => BoardAction::MoveCard {
                actor,
                board_id,
                card: require(data.card_name(), ty, "data.card.name")?,
                card_id: require(data.card_id().as_deref(), ty, "data.card.id")?,
                list_before: require(
                    data.list_before.as_ref().and_then(|l| l.name.as_deref()),
                    ty,
                    "data.listBefore.name",
                )?,
                list_after: require(
                    data.list_after.as_ref().and_then(|l| l.name.as_deref()),
                    ty,
                    "data.listAfter.name",
                )?,
            },
            "updateCheckItemStateOnCard" => {
                let check_item = data.check_item.as_ref();
                BoardAction::CheckItemState {
                    actor,
                    board_id,
                    card: require(data.card_name(), ty, "data.card.name")?,
                    card_id: require(data.card_id().as_deref(), ty, "data.card.id")?,
                    checklist: data.checklist_name().to_string(),
                    item: require(
                        check_item.and_then(|c| c.name.as_deref()),
                        ty,
                        "data.checkItem.name",
                    )?,
                    complete: require(
                        check_item.and_then(|c| c.state.as_deref()),
                        ty,
                        "data.checkItem.state",
                    )? == "complete",
                }
            }
            _ => return Ok(None),
        };

        Ok(Some(action))
    }

    pub fn title(&self) -> String {
        match self {
            BoardAction::CommentCard {
                actor, card, board, ..
            } => format!("{} commented on '{}' in {}", actor, card, board),
            BoardAction::CreateCard {
                actor, card, board, ..
            } => format!("{} created a new card '{}' in {}", actor, card, board),
            BoardAction::CreateBoard { actor, board, .. } => {
                format!("{} created a new board - {}", actor, board)
            }
            BoardAction::CreateList {
                actor, list, board, ..
            } => format!("{} created a new list -- {} in {}", actor, list, board),
            BoardAction::AddChecklistToCard {
                actor,
                checklist,
                card,
                ..
            } => format!("{} created a new checklist '{}' in {}", actor, checklist, card),
            BoardAction::MoveCard {
                actor,
                card,
                list_before,
                list_after,
                ..
            } => format!(
                "{} moved '{}' from '{}' to '{}'",
                actor, card, list_before, list_after
            ),
            BoardAction::CheckItemState {
                actor,
                card,
                checklist,
                item,
                complete,
                ..
            } => {
                let verb = if *complete { "completed" } else { "unchecked" };
                format!(
                    "{} {} {} in the {} checklist on {}",
                    actor, verb, item, checklist, card
                )
            }
        }
    }

    pub fn link(&self) -> String {
        match self {
            BoardAction::CreateBoard { board_id, .. }
            | BoardAction::CreateList { board_id, .. } => board_url(board_id),
            BoardAction::CommentCard {
                board_id, card_id, ..
            }
            | BoardAction::CreateCard {
                board_id, card_id, ..
            }
            | BoardAction::AddChecklistToCard {
                board_id, card_id, ..
            }
            | BoardAction::MoveCard {
                board_id, card_id, ..
            }
            | BoardAction::CheckItemState {
                board_id, card_id, ..
            } => card_url(board_id, card_id),
        }
    }

    pub fn description(&self) -> String {
        match self {
            BoardAction::CommentCard { text, .. } => text.clone(),
            _ => String::new(),
        }
    }
}

pub fn board_url(board_id: &str) -> String {
    format!("{}/board/{}", TRELLO_WEB_BASE, board_id)
}

pub fn card_url(board_id: &str, card_id: &str) -> String {
    format!("{}/card/{}/{}", TRELLO_WEB_BASE, board_id, card_id)
}

/// Parse an API timestamp such as `2013-06-30T12:34:56.789Z`.
///
/// The `.sssZ` suffix is checked and cut off, and the rest is read as UTC.
/// Any other shape is malformed.
pub fn parse_action_date(date: &str) -> Result<DateTime<Utc>, ClassifyError> {
    let malformed = || ClassifyError::MalformedTimestamp {
        date: date.to_string(),
    };

    let bytes = date.as_bytes();
    if bytes.len() != DATE_PREFIX_LEN + DATE_SUFFIX_LEN || !has_fixed_shape(bytes) {
        return Err(malformed());
    }
    let trimmed = date.get(..DATE_PREFIX_LEN).ok_or_else(malformed)?;

    NaiveDateTime::parse_from_str(trimmed, DATE_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|_| malformed())
}

/// `YYYY-MM-DDTHH:MM:SS.sssZ`, digit by digit
fn has_fixed_shape(bytes: &[u8]) -> bool {
    bytes.iter().enumerate().all(|(i, b)| match i {
        4 | 7 => *b == b'-',
        10 => *b == b'T',
        13 | 16 => *b == b':',
        19 => *b == b'.',
        23 => *b == b'Z',
        _ => b.is_ascii_digit(),
    })
}

/// Classify a single action record into a feed item
pub fn classify(record: &ActionRecord) -> Result<Option<FeedItem>, ClassifyError> {
    let Some(action) = BoardAction::from_record(record)? else {
        tracing::debug!(
            "Dropping {} action {}",
            record.action_type,
            record.id.as_deref().unwrap_or("-")
        );
        return Ok(None);
    };

    Ok(Some(FeedItem {
        title: action.title(),
        link: action.link(),
        description: action.description(),
        published_at: parse_action_date(&record.date)?,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{action, action_dated};
    use chrono::TimeZone;
    use serde_json::json;

    fn board() -> serde_json::Value {
        json!({ "id": "b1", "name": "Team X" })
    }

    #[test]
    fn create_board_scenario() {
        let record = action("createBoard", "Alice", json!({ "board": board() }));

        let item = classify(&record).unwrap().unwrap();

        assert_eq!(item.title, "Alice created a new board - Team X");
        assert_eq!(item.link, "https://trello.com/board/b1");
        assert_eq!(item.description, "");
    }

    #[test]
    fn comment_card_scenario() {
        let record = action(
            "commentCard",
            "Bob",
            json!({
                "board": board(),
                "card": { "id": "51cf0a", "idShort": 42, "name": "Fix bug" },
                "text": "LGTM",
            }),
        );

        let item = classify(&record).unwrap().unwrap();

        assert_eq!(item.title, "Bob commented on 'Fix bug' in Team X");
        assert_eq!(item.link, "https://trello.com/card/b1/42");
        assert_eq!(item.description, "LGTM");
    }

    #[test]
    fn check_item_without_checklist_uses_placeholder() {
        let record = action(
            "updateCheckItemStateOnCard",
            "Carol",
            json!({
                "board": board(),
                "card": { "idShort": 3, "name": "Release" },
                "checkItem": { "name": "Write tests", "state": "complete" },
            }),
        );

        let item = classify(&record).unwrap().unwrap();

        assert_eq!(
            item.title,
            "Carol completed Write tests in the ?? checklist on Release"
        );
        assert_eq!(item.link, "https://trello.com/card/b1/3");
    }

    #[test]
    fn check_item_unchecked() {
        let record = action(
            "updateCheckItemStateOnCard",
            "Carol",
            json!({
                "board": board(),
                "card": { "idShort": 3, "name": "Release" },
                "checklist": { "name": "QA" },
                "checkItem": { "name": "Smoke test", "state": "incomplete" },
            }),
        );

        let item = classify(&record).unwrap().unwrap();

        assert_eq!(
            item.title,
            "Carol unchecked Smoke test in the QA checklist on Release"
        );
    }

    #[test]
    fn create_card_and_list_titles() {
        let card = action(
            "createCard",
            "Alice",
            json!({ "board": board(), "card": { "idShort": 9, "name": "Docs" } }),
        );
        let list = action(
            "createList",
            "Alice",
            json!({ "board": board(), "list": { "name": "Doing" } }),
        );

        let card = classify(&card).unwrap().unwrap();
        let list = classify(&list).unwrap().unwrap();

        assert_eq!(card.title, "Alice created a new card 'Docs' in Team X");
        assert_eq!(card.link, "https://trello.com/card/b1/9");
        assert_eq!(list.title, "Alice created a new list -- Doing in Team X");
        assert_eq!(list.link, "https://trello.com/board/b1");
    }

    #[test]
    fn add_checklist_title() {
        let record = action(
            "addChecklistToCard",
            "Dan",
            json!({
                "board": board(),
                "card": { "id": "c77", "name": "Launch" },
                "checklist": { "name": "Prep" },
            }),
        );

        let item = classify(&record).unwrap().unwrap();

        assert_eq!(item.title, "Dan created a new checklist 'Prep' in Launch");
        assert_eq!(item.link, "https://trello.com/card/b1/c77");
    }

    #[test]
    fn update_card_move() {
        let record = action(
            "updateCard",
            "Eve",
            json!({
                "board": board(),
                "card": { "idShort": 5, "name": "Fix bug" },
                "listBefore": { "name": "Todo" },
                "listAfter": { "name": "Done" },
            }),
        );

        let item = classify(&record).unwrap().unwrap();

        assert_eq!(item.title, "Eve moved 'Fix bug' from 'Todo' to 'Done'");
        assert_eq!(item.link, "https://trello.com/card/b1/5");
    }

    #[test]
    fn update_card_without_both_lists_is_dropped() {
        for data in [
            json!({ "board": board(), "card": { "idShort": 5, "name": "x" } }),
            json!({
                "board": board(),
                "card": { "idShort": 5, "name": "x" },
                "listBefore": { "name": "Todo" },
            }),
            json!({
                "board": board(),
                "card": { "idShort": 5, "name": "x" },
                "listAfter": { "name": "Done" },
            }),
        ] {
            let record = action("updateCard", "Eve", data);
            assert_eq!(classify(&record).unwrap(), None);
        }
    }

    #[test]
    fn unrecognized_types_are_dropped() {
        for ty in ["addMemberToBoard", "deleteCard", "updateList", ""] {
            let record = action_dated(ty, "Zed", json!({}), "garbage");
            assert_eq!(classify(&record).unwrap(), None);
        }
    }

    #[test]
    fn long_id_used_without_short_id() {
        let record = action(
            "createCard",
            "Alice",
            json!({ "board": board(), "card": { "id": "51cf0a", "name": "Docs" } }),
        );

        let item = classify(&record).unwrap().unwrap();

        assert_eq!(item.link, "https://trello.com/card/b1/51cf0a");
    }

    #[test]
    fn missing_required_field_is_an_error() {
        let record = action(
            "commentCard",
            "Bob",
            json!({ "board": board(), "card": { "idShort": 1, "name": "x" } }),
        );

        let err = classify(&record).unwrap_err();

        assert_eq!(
            err,
            ClassifyError::MissingField {
                action_type: "commentCard".to_string(),
                field: "data.text",
            }
        );
    }

    #[test]
    fn parses_api_timestamp() {
        let parsed = parse_action_date("2013-06-30T12:34:56.789Z").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2013, 6, 30, 12, 34, 56).unwrap());
    }

    #[test]
    fn malformed_timestamps_are_errors() {
        for date in [
            "",
            "Z",
            "2013-06-30T12:34:56Z",
            "yesterday at noon",
            "2013-06-30 12:34:56.789Z",
            "2013-06-30T12:34:56.78Z",
            "2013-6-30T12:34:56.789Z",
            "2013-06-30T12:34:56.789+",
            "2013-06-30T12:34:5.7890Z",
        ] {
            let err = parse_action_date(date).unwrap_err();
            assert_eq!(
                err,
                ClassifyError::MalformedTimestamp {
                    date: date.to_string()
                }
            );
        }
    }

    #[test]
    fn recognized_action_with_bad_date_fails() {
        let record = action_dated(
            "createBoard",
            "Alice",
            json!({ "board": board() }),
            "2013-06-30",
        );
        assert!(matches!(
            classify(&record),
            Err(ClassifyError::MalformedTimestamp { .. })
        ));
    }
}
