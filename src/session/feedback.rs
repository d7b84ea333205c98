//! Per-item feedback states of a learning session. Each has exactly two
//! states; the display attributes live on the enums so renderers only match.

use rust_i18n::t;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AnswerFeedback {
    #[default]
    Initial,
    Answered { selected: usize },
}

/// How a single answer option is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionMark {
    Plain,
    Correct,
    NoMatch,
}

impl OptionMark {
    pub fn glyph(self) -> &'static str {
        match self {
            OptionMark::Plain => " ",
            OptionMark::Correct => "\u{25cb}", // ○
            OptionMark::NoMatch => "\u{2715}", // ✕
        }
    }
}

impl AnswerFeedback {
    pub fn is_answered(self) -> bool {
        matches!(self, AnswerFeedback::Answered { .. })
    }

    /// The correct treatment wins when the chosen option is also the correct one.
    pub fn mark(self, option: usize, is_correct_option: bool) -> OptionMark {
        match self {
            AnswerFeedback::Initial => OptionMark::Plain,
            AnswerFeedback::Answered { .. } if is_correct_option => OptionMark::Correct,
            AnswerFeedback::Answered { selected } if selected == option => OptionMark::NoMatch,
            AnswerFeedback::Answered { .. } => OptionMark::Plain,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BookmarkFeedback {
    #[default]
    Initial,
    Bookmarked,
}

impl BookmarkFeedback {
    pub fn icon(self) -> &'static str {
        match self {
            BookmarkFeedback::Initial => "\u{2606}",    // ☆
            BookmarkFeedback::Bookmarked => "\u{2713}", // ✓
        }
    }

    pub fn label(self) -> String {
        match self {
            BookmarkFeedback::Initial => t!("learning.bookmark").to_string(),
            BookmarkFeedback::Bookmarked => t!("learning.bookmark_done").to_string(),
        }
    }
}

/// What the bookmark control looks like for the current item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BookmarkControl {
    /// Item arrived already bookmarked; no control at all.
    Hidden,
    Active,
    Disabled,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_marks_nothing() {
        let feedback = AnswerFeedback::Initial;
        assert_eq!(feedback.mark(0, true), OptionMark::Plain);
        assert_eq!(feedback.mark(1, false), OptionMark::Plain);
        assert!(!feedback.is_answered());
    }

    #[test]
    fn test_answered_marks_selected_and_correct() {
        let feedback = AnswerFeedback::Answered { selected: 1 };
        assert_eq!(feedback.mark(0, true), OptionMark::Correct);
        assert_eq!(feedback.mark(1, false), OptionMark::NoMatch);
        assert_eq!(feedback.mark(2, false), OptionMark::Plain);
    }

    #[test]
    fn test_correct_treatment_wins_when_selected() {
        let feedback = AnswerFeedback::Answered { selected: 0 };
        assert_eq!(feedback.mark(0, true), OptionMark::Correct);
    }
}
