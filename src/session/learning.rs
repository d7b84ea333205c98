use crate::api::ApiRequest;
use crate::api::models::VocabularyItem;
use crate::session::feedback::{AnswerFeedback, BookmarkControl, BookmarkFeedback, OptionMark};

/// Quiz session over the items returned by `/learning`.
///
/// The index only ever grows. Advancing past the last item is allowed and
/// leaves the session with no current item.
#[derive(Clone, Debug)]
pub struct LearningSession {
    items: Vec<VocabularyItem>,
    index: usize,
    answer: AnswerFeedback,
    bookmark: BookmarkFeedback,
}

impl LearningSession {
    pub fn new(items: Vec<VocabularyItem>) -> Self {
        Self {
            items,
            index: 0,
            answer: AnswerFeedback::Initial,
            bookmark: BookmarkFeedback::Initial,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Option<&VocabularyItem> {
        self.items.get(self.index)
    }

    /// Every item has been shown and the learner moved past the last one.
    pub fn is_finished(&self) -> bool {
        !self.items.is_empty() && self.index >= self.items.len()
    }

    pub fn answer(&self) -> AnswerFeedback {
        self.answer
    }

    pub fn bookmark(&self) -> BookmarkFeedback {
        self.bookmark
    }

    /// Choose an option for the current item. Only the first choice counts;
    /// it is reported as answered correctly whichever option it was.
    pub fn select_answer(&mut self, option: usize) -> Option<ApiRequest> {
        let (pkey, option_count) = {
            let item = self.current()?;
            (item.id, item.answers.len())
        };
        if self.answer.is_answered() || option >= option_count {
            return None;
        }
        self.answer = AnswerFeedback::Answered { selected: option };
        Some(ApiRequest::UpdateIsCorrect { pkey })
    }

    pub fn bookmark_current(&mut self) -> Option<ApiRequest> {
        if self.bookmark_control() != BookmarkControl::Active {
            return None;
        }
        let pkey = self.current()?.id;
        self.bookmark = BookmarkFeedback::Bookmarked;
        Some(ApiRequest::UpdateBookmark { pkey })
    }

    pub fn bookmark_control(&self) -> BookmarkControl {
        match (self.current(), self.bookmark) {
            (None, _) => BookmarkControl::Hidden,
            (Some(item), _) if item.bookmark_flag => BookmarkControl::Hidden,
            (Some(_), BookmarkFeedback::Initial) => BookmarkControl::Active,
            (Some(_), BookmarkFeedback::Bookmarked) => BookmarkControl::Disabled,
        }
    }

    pub fn option_mark(&self, option: usize) -> OptionMark {
        let Some(item) = self.current() else {
            return OptionMark::Plain;
        };
        let is_correct_option = item
            .answers
            .get(option)
            .is_some_and(|answer| *answer == item.correct);
        self.answer.mark(option, is_correct_option)
    }

    /// Move on regardless of whether the current item was answered.
    pub fn next(&mut self) {
        self.index = self.index.saturating_add(1);
        self.answer = AnswerFeedback::Initial;
        self.bookmark = BookmarkFeedback::Initial;
    }
}
