use rust_i18n::t;

/// Route table: the five screens reachable from the header.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Dashboard,
    Learning,
    EnglishList,
    Bookmark,
    Activity,
}

impl Route {
    pub const ALL: [Route; 5] = [
        Route::Dashboard,
        Route::Learning,
        Route::EnglishList,
        Route::Bookmark,
        Route::Activity,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Route::Dashboard => "/",
            Route::Learning => "/learning",
            Route::EnglishList => "/english-list",
            Route::Bookmark => "/bookmark",
            Route::Activity => "/activity",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim();
        let normalized = if trimmed.len() > 1 {
            trimmed.trim_end_matches('/')
        } else {
            trimmed
        };
        Self::ALL.into_iter().find(|r| r.path() == normalized)
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|r| *r == self).unwrap_or(0)
    }

    /// Header shortcut: '1' through '5'.
    pub fn from_key(ch: char) -> Option<Self> {
        let digit = ch.to_digit(10)? as usize;
        digit.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }

    pub fn title(self) -> String {
        match self {
            Route::Dashboard => t!("route.dashboard").to_string(),
            Route::Learning => t!("route.learning").to_string(),
            Route::EnglishList => t!("route.english_list").to_string(),
            Route::Bookmark => t!("route.bookmark").to_string(),
            Route::Activity => t!("route.activity").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_round_trip() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
        assert_eq!(Route::from_path("/learning/"), Some(Route::Learning));
        assert_eq!(Route::from_path("/register"), None);
    }

    #[test]
    fn test_number_keys_map_in_header_order() {
        assert_eq!(Route::from_key('1'), Some(Route::Dashboard));
        assert_eq!(Route::from_key('5'), Some(Route::Activity));
        assert_eq!(Route::from_key('0'), None);
        assert_eq!(Route::from_key('6'), None);
        assert_eq!(Route::from_key('x'), None);
    }

    #[test]
    fn test_cycle_wraps() {
        assert_eq!(Route::Activity.next(), Route::Dashboard);
        assert_eq!(Route::Dashboard.prev(), Route::Activity);
        assert_eq!(Route::Learning.next(), Route::EnglishList);
    }
}
