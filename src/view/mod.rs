pub mod dashboard;
pub mod fetch;
pub mod learning;
pub mod list;

use serde_json::Value;

use crate::api::models::{ActivityRecord, BookmarkEntry, EnglishListEntry};
use crate::api::{ApiError, Endpoint};
use crate::route::Route;
use dashboard::DashboardView;
use learning::LearningView;
use list::ListView;

/// The mounted view. A new value is built on every navigation, so nothing
/// carries over between mounts.
#[derive(Clone, Debug)]
pub enum Screen {
    Dashboard(DashboardView),
    Learning(LearningView),
    EnglishList(ListView<EnglishListEntry>),
    Bookmark(ListView<BookmarkEntry>),
    Activity(ListView<ActivityRecord>),
}

impl Screen {
    pub fn mount(route: Route) -> Self {
        match route {
            Route::Dashboard => Screen::Dashboard(DashboardView::new()),
            Route::Learning => Screen::Learning(LearningView::new()),
            Route::EnglishList => Screen::EnglishList(ListView::new()),
            Route::Bookmark => Screen::Bookmark(ListView::new()),
            Route::Activity => Screen::Activity(ListView::new()),
        }
    }

    /// The read request issued once per mount.
    pub fn endpoint(&self) -> Endpoint {
        match self {
            Screen::Dashboard(v) => v.endpoint(),
            Screen::Learning(v) => v.endpoint(),
            Screen::EnglishList(v) => v.endpoint(),
            Screen::Bookmark(v) => v.endpoint(),
            Screen::Activity(v) => v.endpoint(),
        }
    }

    pub fn receive(&mut self, outcome: Result<Value, ApiError>) {
        match self {
            Screen::Dashboard(v) => v.receive(outcome),
            Screen::Learning(v) => v.receive(outcome),
            Screen::EnglishList(v) => v.receive(outcome),
            Screen::Bookmark(v) => v.receive(outcome),
            Screen::Activity(v) => v.receive(outcome),
        }
    }

    /// Whether the error modal replaces this view.
    pub fn is_failed(&self) -> bool {
        match self {
            Screen::Dashboard(v) => v.state.is_failed(),
            Screen::Learning(v) => v.state.is_failed(),
            Screen::EnglishList(v) => v.state.is_failed(),
            Screen::Bookmark(v) => v.state.is_failed(),
            Screen::Activity(v) => v.state.is_failed(),
        }
    }
}
