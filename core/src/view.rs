//! Text rendering of a `ViewState`.
//!
//! `render` is a pure function; hosts print the resulting `Screen` however
//! they like. `Screen` keeps the pieces separate so tests can check the
//! count label and each card without parsing text.

use std::fmt;

use crate::controller::ViewState;
use crate::types::Item;

pub const HEADING: &str = "Todo Items";
pub const NO_DESCRIPTION: &str = "No description provided.";
pub const EMPTY_LIST: &str = "No items yet. Add one below.";
pub const NOT_LOADED: &str = "Not loaded.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub title: String,
    pub body: String,
}

impl From<&Item> for Card {
    fn from(item: &Item) -> Self {
        Self {
            title: item.title.clone(),
            body: item
                .description
                .clone()
                .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    pub heading: &'static str,
    pub status: Option<String>,
    pub count_label: Option<String>,
    pub cards: Vec<Card>,
}

pub fn render(state: &ViewState, base_url: &str) -> Screen {
    let mut screen = Screen {
        heading: HEADING,
        status: None,
        count_label: None,
        cards: Vec::new(),
    };
    match state {
        ViewState::Idle => {
            screen.status = Some(NOT_LOADED.to_string());
        }
        ViewState::Loading => {
            screen.status = Some(format!("Loading items from {base_url}..."));
        }
        ViewState::Error(msg) => {
            screen.status = Some(format!("ERROR: {msg}"));
        }
        ViewState::Ready(items) => {
            screen.count_label = Some(format!("{} Items Found", items.len()));
            screen.cards = items.iter().map(Card::from).collect();
            if items.is_empty() {
                screen.status = Some(EMPTY_LIST.to_string());
            }
        }
    }
    screen
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== {} ==", self.heading)?;
        if let Some(label) = &self.count_label {
            writeln!(f, "{label}")?;
        }
        for card in &self.cards {
            writeln!(f, "- {}", card.title)?;
            writeln!(f, "  {}", card.body)?;
        }
        if let Some(status) = &self.status {
            writeln!(f, "{status}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "http://localhost:3000";

    fn item(id: u64, title: &str, description: Option<&str>) -> Item {
        Item {
            id: Some(id),
            title: title.to_string(),
            description: description.map(str::to_string),
        }
    }

    #[test]
    fn single_item_without_description() {
        let screen = render(&ViewState::Ready(vec![item(1, "Buy milk", None)]), BASE);
        assert_eq!(screen.count_label.as_deref(), Some("1 Items Found"));
        assert_eq!(
            screen.cards,
            vec![Card {
                title: "Buy milk".to_string(),
                body: "No description provided.".to_string(),
            }]
        );
        assert!(screen.status.is_none());
    }

    #[test]
    fn cards_follow_server_order_and_content() {
        let items = vec![
            item(3, "c", Some("third")),
            item(1, "a", None),
            item(2, "b", Some("")),
        ];
        let screen = render(&ViewState::Ready(items.clone()), BASE);
        assert_eq!(screen.count_label.as_deref(), Some("3 Items Found"));
        for (card, item) in screen.cards.iter().zip(&items) {
            assert_eq!(card.title, item.title);
            assert_eq!(
                card.body,
                item.description.clone().unwrap_or_else(|| NO_DESCRIPTION.to_string())
            );
        }
    }

    #[test]
    fn empty_list_shows_zero_and_hint() {
        let screen = render(&ViewState::Ready(Vec::new()), BASE);
        assert_eq!(screen.count_label.as_deref(), Some("0 Items Found"));
        assert_eq!(screen.status.as_deref(), Some(EMPTY_LIST));
    }

    #[test]
    fn loading_names_the_backend() {
        let screen = render(&ViewState::Loading, BASE);
        assert_eq!(
            screen.status.as_deref(),
            Some("Loading items from http://localhost:3000...")
        );
        assert!(screen.count_label.is_none());
        assert!(screen.cards.is_empty());
    }

    #[test]
    fn idle_shows_nothing_loaded() {
        let screen = render(&ViewState::Idle, BASE);
        assert_eq!(screen.status.as_deref(), Some(NOT_LOADED));
        assert!(screen.count_label.is_none());
        assert!(screen.cards.is_empty());
    }

    #[test]
    fn error_hides_everything_else() {
        let screen = render(&ViewState::Error("nope".to_string()), BASE);
        assert_eq!(screen.status.as_deref(), Some("ERROR: nope"));
        assert!(screen.count_label.is_none());
        assert!(screen.cards.is_empty());
    }

    #[test]
    fn display_lists_cards() {
        let screen = render(&ViewState::Ready(vec![item(1, "Buy milk", None)]), BASE);
        assert_eq!(
            screen.to_string(),
            "== Todo Items ==\n1 Items Found\n- Buy milk\n  No description provided.\n"
        );
    }
}
