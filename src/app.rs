use std::path::Path;

use chrono::Local;
use crossterm::event::KeyCode;
use rust_i18n::t;

use crate::api::{ApiEvent, ApiRequest, Dispatch};
use crate::config::Config;
use crate::route::Route;
use crate::snapshot;
use crate::speech::Speech;
use crate::ui::theme::Theme;
use crate::view::Screen;
use crate::view::list::ListRow;

/// Side effects a view asks the shell to perform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Discard all view state and remount the dashboard.
    ReloadRoot,
}

pub struct App {
    pub route: Route,
    pub screen: Screen,
    pub theme: &'static Theme,
    pub config: Config,
    pub should_quit: bool,
    mount: u64,
    snapshot_requested: bool,
    dispatcher: Box<dyn Dispatch>,
    speech: Speech,
}

impl App {
    pub fn new(
        config: Config,
        theme: &'static Theme,
        dispatcher: Box<dyn Dispatch>,
        start: Route,
    ) -> Self {
        let speech = Speech::from_config(&config);
        let mut app = Self {
            route: start,
            screen: Screen::mount(start),
            theme,
            config,
            should_quit: false,
            mount: 0,
            snapshot_requested: false,
            dispatcher,
            speech,
        };
        app.navigate(start);
        app
    }

    /// Generation of the mounted view. Responses tagged with an older value
    /// belong to a view that no longer exists.
    pub fn mount(&self) -> u64 {
        self.mount
    }

    /// Mount a fresh view for `route` and issue its read request.
    pub fn navigate(&mut self, route: Route) {
        self.mount = self.mount.wrapping_add(1);
        self.route = route;
        self.screen = Screen::mount(route);
        self.snapshot_requested = false;
        log::info!("mount {} ({})", route.path(), self.mount);
        self.dispatcher
            .dispatch(self.mount, ApiRequest::Fetch(self.screen.endpoint()));
    }

    pub fn handle_api(&mut self, event: ApiEvent) {
        if event.mount != self.mount {
            log::debug!(
                "dropping {} response for stale mount {}",
                event.request.endpoint().path(),
                event.mount
            );
            return;
        }

        match event.request {
            ApiRequest::Fetch(endpoint) if endpoint == self.screen.endpoint() => {
                self.screen.receive(event.outcome);
            }
            ApiRequest::Fetch(endpoint) => {
                log::debug!("ignoring {} response on {}", endpoint.path(), self.route.path());
            }
            _ => {
                // Mutation successes are not inspected.
                if event.outcome.is_err() {
                    if let Screen::Learning(view) = &mut self.screen {
                        view.mutation_failed();
                    }
                }
            }
        }
    }

    pub fn is_failed(&self) -> bool {
        self.screen.is_failed()
    }

    /// Key handling while the error modal is up. Only acknowledgement keys
    /// produce a command; everything else is swallowed.
    pub fn modal_command(&self, code: KeyCode) -> Option<Command> {
        if !self.is_failed() {
            return None;
        }
        match code {
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('o') => Some(Command::ReloadRoot),
            _ => None,
        }
    }

    pub fn execute(&mut self, command: Command) {
        match command {
            Command::ReloadRoot => self.navigate(Route::Dashboard),
        }
    }

    fn send(&self, request: Option<ApiRequest>) {
        if let Some(request) = request {
            self.dispatcher.dispatch(self.mount, request);
        }
    }

    pub fn answer_selected(&mut self) {
        let request = match &mut self.screen {
            Screen::Learning(view) => view.answer(),
            _ => None,
        };
        self.send(request);
    }

    pub fn bookmark_current(&mut self) {
        let request = match &mut self.screen {
            Screen::Learning(view) => view.bookmark(),
            _ => None,
        };
        self.send(request);
    }

    pub fn next_item(&mut self) {
        if let Screen::Learning(view) = &mut self.screen {
            view.next();
        }
    }

    pub fn move_down(&mut self) {
        match &mut self.screen {
            Screen::Learning(view) => view.cursor_down(),
            Screen::EnglishList(view) => view.select_next(),
            Screen::Bookmark(view) => view.select_next(),
            Screen::Activity(view) => view.select_next(),
            Screen::Dashboard(_) => {}
        }
    }

    pub fn move_up(&mut self) {
        match &mut self.screen {
            Screen::Learning(view) => view.cursor_up(),
            Screen::EnglishList(view) => view.select_prev(),
            Screen::Bookmark(view) => view.select_prev(),
            Screen::Activity(view) => view.select_prev(),
            Screen::Dashboard(_) => {}
        }
    }

    /// English text the pronounce key would speak on the mounted screen.
    pub fn pronounce_target(&self) -> Option<&str> {
        match &self.screen {
            Screen::Learning(view) => view
                .session()
                .and_then(|s| s.current())
                .map(|item| item.english.as_str()),
            Screen::EnglishList(view) => view.selected_row().and_then(ListRow::pronounceable),
            Screen::Bookmark(view) => view.selected_row().and_then(ListRow::pronounceable),
            Screen::Activity(_) | Screen::Dashboard(_) => None,
        }
    }

    pub fn pronounce(&self) {
        if let Some(text) = self.pronounce_target() {
            self.speech.pronounce(text);
        }
    }

    /// Ask the render loop to capture the next frame. Only a loaded dashboard
    /// can be exported.
    pub fn request_snapshot(&mut self) {
        if let Screen::Dashboard(view) = &self.screen {
            if view.summary().is_some() {
                self.snapshot_requested = true;
            }
        }
    }

    pub fn take_snapshot_request(&mut self) -> bool {
        std::mem::take(&mut self.snapshot_requested)
    }

    /// Write a captured frame. Failures are logged and otherwise ignored.
    pub fn save_snapshot(&mut self, text: &str) {
        let dir = Path::new(&self.config.snapshot_dir);
        match snapshot::save(dir, text, Local::now()) {
            Ok(path) => {
                log::info!("snapshot written to {}", path.display());
                if let Screen::Dashboard(view) = &mut self.screen {
                    view.snapshot_saved = Some(path.display().to_string());
                }
            }
            Err(err) => log::warn!("snapshot export failed: {err:#}"),
        }
    }

    pub fn notice(&self) -> Option<String> {
        match &self.screen {
            Screen::Dashboard(view) => view
                .snapshot_saved
                .as_ref()
                .map(|path| t!("dashboard.snapshot_saved", path = path).to_string()),
            _ => None,
        }
    }

    /// Footer hints for the current state of the mounted screen.
    pub fn hints(&self) -> Vec<String> {
        if self.is_failed() {
            return vec![t!("footer.acknowledge").to_string()];
        }
        let mut hints = Vec::new();
        match &self.screen {
            Screen::Dashboard(view) if view.summary().is_some() => {
                hints.push(t!("footer.snapshot").to_string());
            }
            Screen::Learning(_) => {
                hints.push(t!("footer.choose").to_string());
                hints.push(t!("footer.answer").to_string());
                hints.push(t!("footer.pronounce").to_string());
                hints.push(t!("footer.bookmark").to_string());
                hints.push(t!("footer.next").to_string());
            }
            Screen::EnglishList(_) | Screen::Bookmark(_) => {
                hints.push(t!("footer.move").to_string());
                hints.push(t!("footer.pronounce").to_string());
            }
            Screen::Activity(_) => hints.push(t!("footer.move").to_string()),
            Screen::Dashboard(_) => {}
        }
        hints.push(t!("footer.global").to_string());
        hints.push(t!("footer.cycle").to_string());
        hints.push(t!("footer.quit").to_string());
        hints
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use serde_json::json;

    use super::*;
    use crate::api::{ApiError, Endpoint};
    use crate::view::fetch::FetchState;

    type Log = Rc<RefCell<Vec<(u64, ApiRequest)>>>;

    struct Recorder(Log);

    impl Dispatch for Recorder {
        fn dispatch(&self, mount: u64, request: ApiRequest) {
            self.0.borrow_mut().push((mount, request));
        }
    }

    fn test_app(start: Route) -> (App, Log) {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let mut config = Config::default();
        config.speech_command = String::new();
        let theme: &'static Theme = Box::leak(Box::new(Theme::default()));
        let app = App::new(config, theme, Box::new(Recorder(Rc::clone(&log))), start);
        (app, log)
    }

    fn reply(app: &mut App, request: ApiRequest, outcome: Result<serde_json::Value, ApiError>) {
        let mount = app.mount();
        app.handle_api(ApiEvent {
            mount,
            request,
            outcome,
        });
    }

    fn not_found() -> ApiError {
        ApiError::Status {
            path: "/learning",
            status: 404,
        }
    }

    #[test]
    fn test_navigate_dispatches_read_once() {
        let (mut app, log) = test_app(Route::Dashboard);
        app.navigate(Route::Activity);
        let log = log.borrow();
        assert_eq!(log.len(), 2);
        assert_eq!(log[0], (1, ApiRequest::Fetch(Endpoint::Dashboard)));
        assert_eq!(log[1], (2, ApiRequest::Fetch(Endpoint::Activity)));
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let (mut app, _log) = test_app(Route::Bookmark);
        let stale = app.mount();
        app.navigate(Route::Activity);
        app.handle_api(ApiEvent {
            mount: stale,
            request: ApiRequest::Fetch(Endpoint::Bookmark),
            outcome: Err(not_found()),
        });
        assert!(!app.is_failed());
        assert!(matches!(&app.screen, Screen::Activity(v) if v.state == FetchState::Loading));
    }

    #[test]
    fn test_failed_fetch_then_acknowledge_reloads_root() {
        let (mut app, log) = test_app(Route::EnglishList);
        reply(&mut app, ApiRequest::Fetch(Endpoint::EnglishList), Err(not_found()));
        assert!(app.is_failed());
        assert_eq!(app.hints(), vec!["[Enter] OK".to_string()]);

        assert_eq!(app.modal_command(KeyCode::Char('x')), None);
        let command = app.modal_command(KeyCode::Enter);
        assert_eq!(command, Some(Command::ReloadRoot));

        app.execute(Command::ReloadRoot);
        assert_eq!(app.route, Route::Dashboard);
        assert!(!app.is_failed());
        assert_eq!(
            log.borrow().last(),
            Some(&(app.mount(), ApiRequest::Fetch(Endpoint::Dashboard)))
        );
    }

    #[test]
    fn test_modal_keys_inert_without_failure() {
        let (app, _log) = test_app(Route::Dashboard);
        assert_eq!(app.modal_command(KeyCode::Enter), None);
    }

    #[test]
    fn test_mutation_failure_shows_modal() {
        let (mut app, log) = test_app(Route::Learning);
        reply(
            &mut app,
            ApiRequest::Fetch(Endpoint::Learning),
            Ok(json!([{"id": 4, "english": "dog", "correct": "いぬ", "answers": ["いぬ"], "bookmark_flag": false}])),
        );
        app.bookmark_current();
        app.bookmark_current();
        let bookmark_posts = log
            .borrow()
            .iter()
            .filter(|(_, r)| *r == ApiRequest::UpdateBookmark { pkey: 4 })
            .count();
        assert_eq!(bookmark_posts, 1);

        reply(&mut app, ApiRequest::UpdateBookmark { pkey: 4 }, Ok(json!(null)));
        assert!(!app.is_failed());
        reply(&mut app, ApiRequest::UpdateBookmark { pkey: 4 }, Err(not_found()));
        assert!(app.is_failed());
    }

    #[test]
    fn test_pronounce_target_follows_screen() {
        let (mut app, _log) = test_app(Route::Bookmark);
        reply(
            &mut app,
            ApiRequest::Fetch(Endpoint::Bookmark),
            Ok(json!([
                {"english": "apple", "japanese": "りんご"},
                {"english": "pear", "japanese": "なし"}
            ])),
        );
        assert_eq!(app.pronounce_target(), Some("apple"));
        app.move_down();
        assert_eq!(app.pronounce_target(), Some("pear"));
        app.pronounce();

        app.navigate(Route::Activity);
        assert_eq!(app.pronounce_target(), None);
    }

    #[test]
    fn test_snapshot_only_for_loaded_dashboard() {
        let (mut app, _log) = test_app(Route::Dashboard);
        app.request_snapshot();
        assert!(!app.take_snapshot_request());

        reply(
            &mut app,
            ApiRequest::Fetch(Endpoint::Dashboard),
            Ok(json!({"total": {"word": 1, "bookmark": 0, "isCorrect": 0}})),
        );
        app.request_snapshot();
        assert!(app.take_snapshot_request());
        assert!(!app.take_snapshot_request());
    }

    #[test]
    fn test_save_snapshot_sets_notice() {
        let dir = tempfile::TempDir::new().unwrap();
        let (mut app, _log) = test_app(Route::Dashboard);
        app.config.snapshot_dir = dir.path().to_string_lossy().to_string();
        reply(
            &mut app,
            ApiRequest::Fetch(Endpoint::Dashboard),
            Ok(json!({"total": {"word": 1, "bookmark": 0, "isCorrect": 0}})),
        );
        app.save_snapshot("dashboard text");
        let notice = app.notice().unwrap();
        assert!(notice.starts_with("Snapshot saved to "));

        app.navigate(Route::Dashboard);
        assert!(app.notice().is_none());
    }
}
