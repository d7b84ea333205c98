use ratatui::layout::Constraint;
use rust_i18n::t;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::api::models::{ActivityRecord, BookmarkEntry, EnglishListEntry};
use crate::api::{ApiError, Endpoint};
use crate::view::fetch::{self, FetchState};

/// A record type that one of the tabular views lists.
pub trait ListRow: DeserializeOwned {
    const ENDPOINT: Endpoint;

    fn headers() -> Vec<String>;
    fn widths() -> Vec<Constraint>;
    fn cells(&self) -> Vec<String>;

    /// English text the pronounce key should speak for this row, if any.
    fn pronounceable(&self) -> Option<&str> {
        None
    }
}

impl ListRow for ActivityRecord {
    const ENDPOINT: Endpoint = Endpoint::Activity;

    fn headers() -> Vec<String> {
        vec![t!("table.date").to_string(), t!("table.detail").to_string()]
    }

    fn widths() -> Vec<Constraint> {
        vec![Constraint::Length(12), Constraint::Min(20)]
    }

    fn cells(&self) -> Vec<String> {
        vec![self.date.clone().unwrap_or_default(), self.detail.clone()]
    }
}

impl ListRow for BookmarkEntry {
    const ENDPOINT: Endpoint = Endpoint::Bookmark;

    fn headers() -> Vec<String> {
        vec![
            t!("table.english").to_string(),
            t!("table.japanese").to_string(),
            t!("table.manage").to_string(),
        ]
    }

    fn widths() -> Vec<Constraint> {
        vec![
            Constraint::Percentage(35),
            Constraint::Percentage(40),
            Constraint::Percentage(25),
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.english.clone(),
            self.japanese.clone(),
            format!("\u{266a} {}", t!("common.pronounce")),
        ]
    }

    fn pronounceable(&self) -> Option<&str> {
        Some(&self.english)
    }
}

impl ListRow for EnglishListEntry {
    const ENDPOINT: Endpoint = Endpoint::EnglishList;

    fn headers() -> Vec<String> {
        vec![
            t!("table.status").to_string(),
            t!("table.english").to_string(),
            t!("table.japanese").to_string(),
            t!("table.manage").to_string(),
        ]
    }

    fn widths() -> Vec<Constraint> {
        vec![
            Constraint::Length(14),
            Constraint::Percentage(30),
            Constraint::Percentage(35),
            Constraint::Min(12),
        ]
    }

    fn cells(&self) -> Vec<String> {
        let status = if self.is_correct {
            t!("dashboard.learned")
        } else {
            t!("dashboard.not_learned")
        };
        vec![
            status.to_string(),
            self.english.clone(),
            self.japanese.clone(),
            format!("\u{266a} {}", t!("common.pronounce")),
        ]
    }

    fn pronounceable(&self) -> Option<&str> {
        Some(&self.english)
    }
}

/// Generic list screen: one GET on mount, then a table with a row cursor.
#[derive(Clone, Debug)]
pub struct ListView<T> {
    pub state: FetchState<Vec<T>>,
    pub selected: usize,
}

impl<T: ListRow> Default for ListView<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ListRow> ListView<T> {
    pub fn new() -> Self {
        Self {
            state: FetchState::Loading,
            selected: 0,
        }
    }

    pub fn endpoint(&self) -> Endpoint {
        T::ENDPOINT
    }

    pub fn receive(&mut self, outcome: Result<Value, ApiError>) {
        self.state = fetch::decode(T::ENDPOINT, outcome);
        self.selected = 0;
    }

    pub fn rows(&self) -> &[T] {
        self.state.loaded().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn select_next(&mut self) {
        let len = self.rows().len();
        if len > 0 {
            self.selected = (self.selected + 1).min(len - 1);
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn selected_row(&self) -> Option<&T> {
        self.rows().get(self.selected)
    }
}
