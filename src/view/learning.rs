use serde_json::Value;

use crate::api::models::VocabularyItem;
use crate::api::{ApiError, ApiRequest, Endpoint};
use crate::session::learning::LearningSession;
use crate::view::fetch::{self, FetchState};

/// Learning screen: the quiz session plus the keyboard cursor over its options.
#[derive(Clone, Debug)]
pub struct LearningView {
    pub state: FetchState<LearningSession>,
    pub cursor: usize,
}

impl Default for LearningView {
    fn default() -> Self {
        Self::new()
    }
}

impl LearningView {
    pub fn new() -> Self {
        Self {
            state: FetchState::Loading,
            cursor: 0,
        }
    }

    pub fn endpoint(&self) -> Endpoint {
        Endpoint::Learning
    }

    pub fn receive(&mut self, outcome: Result<Value, ApiError>) {
        let items: FetchState<Vec<VocabularyItem>> = fetch::decode(Endpoint::Learning, outcome);
        self.state = match items {
            FetchState::Loaded(items) => FetchState::Loaded(LearningSession::new(items)),
            FetchState::Loading => FetchState::Loading,
            FetchState::Failed => FetchState::Failed,
        };
        self.cursor = 0;
    }

    pub fn session(&self) -> Option<&LearningSession> {
        self.state.loaded()
    }

    pub fn cursor_down(&mut self) {
        let options = self
            .session()
            .and_then(LearningSession::current)
            .map_or(0, |item| item.answers.len());
        if options > 0 {
            self.cursor = (self.cursor + 1).min(options - 1);
        }
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Answer with the option under the cursor.
    pub fn answer(&mut self) -> Option<ApiRequest> {
        let cursor = self.cursor;
        self.state.loaded_mut()?.select_answer(cursor)
    }

    pub fn bookmark(&mut self) -> Option<ApiRequest> {
        self.state.loaded_mut()?.bookmark_current()
    }

    pub fn next(&mut self) {
        if let Some(session) = self.state.loaded_mut() {
            session.next();
        }
        self.cursor = 0;
    }

    /// A flag update was rejected: the whole view gives way to the error modal.
    /// Local feedback already shown is not rolled back, it is simply replaced.
    pub fn mutation_failed(&mut self) {
        self.state = FetchState::Failed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn loaded_view() -> LearningView {
        let mut view = LearningView::new();
        view.receive(Ok(json!([
            {"id": 1, "english": "cat", "correct": "ねこ", "answers": ["ねこ", "いぬ", "とり"], "bookmark_flag": false},
            {"id": 2, "english": "dog", "correct": "いぬ", "answers": ["いぬ", "ねこ"], "bookmark_flag": false}
        ])));
        view
    }

    #[test]
    fn test_answer_uses_cursor() {
        let mut view = loaded_view();
        view.cursor_down();
        view.cursor_down();
        assert_eq!(view.cursor, 2);
        view.cursor_down();
        assert_eq!(view.cursor, 2);
        assert_eq!(view.answer(), Some(ApiRequest::UpdateIsCorrect { pkey: 1 }));
        assert_eq!(view.answer(), None);
    }

    #[test]
    fn test_next_resets_cursor() {
        let mut view = loaded_view();
        view.cursor_down();
        view.next();
        assert_eq!(view.cursor, 0);
        assert_eq!(view.session().unwrap().index(), 1);
    }

    #[test]
    fn test_mutation_failure_replaces_view() {
        let mut view = loaded_view();
        view.answer();
        view.mutation_failed();
        assert!(view.state.is_failed());
        assert_eq!(view.answer(), None);
    }

    #[test]
    fn test_actions_before_load_do_nothing() {
        let mut view = LearningView::new();
        assert_eq!(view.answer(), None);
        assert_eq!(view.bookmark(), None);
        view.next();
        view.cursor_down();
        assert_eq!(view.cursor, 0);
    }
}
