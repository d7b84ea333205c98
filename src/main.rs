use std::io;
use std::time::Duration;

use anyhow::{Result, anyhow};
use clap::{Parser, Subcommand};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::Block;

use wordbook::api::models::ServerMessage;
use wordbook::api::{ApiClient, ApiRequest, ThreadDispatcher};
use wordbook::app::App;
use wordbook::config::{API_URL_ENV, Config};
use wordbook::event::{AppEvent, EventHandler};
use wordbook::logging;
use wordbook::route::Route;
use wordbook::snapshot;
use wordbook::ui::components::dashboard::DashboardPanel;
use wordbook::ui::components::data_table::DataTable;
use wordbook::ui::components::footer::Footer;
use wordbook::ui::components::header::Header;
use wordbook::ui::components::heading::Heading;
use wordbook::ui::components::learning_card::LearningCard;
use wordbook::ui::components::modal::ErrorModal;
use wordbook::ui::layout::{AppLayout, LayoutTier};
use wordbook::ui::theme::Theme;
use wordbook::view::Screen;

#[derive(Parser)]
#[command(
    name = "wordbook",
    version,
    about = "Terminal client for the My English Wordbook vocabulary trainer"
)]
struct Cli {
    #[arg(long, help = "Backend base URL (overrides config and WORDBOOK_API_URL)")]
    api_url: Option<String>,

    #[arg(short, long, help = "Theme name")]
    theme: Option<String>,

    #[arg(short, long, help = "Interface language (en, ja)")]
    lang: Option<String>,

    #[arg(short, long, help = "Start route, e.g. /learning")]
    route: Option<String>,

    #[command(subcommand)]
    command: Option<CliCommand>,
}

#[derive(Subcommand)]
enum CliCommand {
    /// Register a new word with its Japanese meaning
    Register { english: String, japanese: String },
    /// Delete a word by id
    Delete { id: i64 },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Err(err) = logging::init() {
        eprintln!("warning: logging disabled: {err:#}");
    }

    let mut config = Config::load()
        .unwrap_or_else(|err| {
            log::warn!("could not read {}: {err:#}", Config::config_path().display());
            Config::default()
        })
        .with_api_url_override(std::env::var(API_URL_ENV).ok());
    if let Some(url) = cli.api_url {
        config.api_url = url;
    }
    if let Some(theme) = cli.theme {
        config.theme = theme;
    }
    if let Some(lang) = cli.lang {
        config.language = lang;
    }
    config.normalize();
    rust_i18n::set_locale(&config.language);

    let client = ApiClient::new(&config.api_url, config.request_timeout())?;
    log::info!("backend {}", client.base_url());

    if let Some(command) = cli.command {
        return run_command(&client, command);
    }

    let start = match cli.route.as_deref() {
        Some(path) => Route::from_path(path).ok_or_else(|| anyhow!("unknown route: {path}"))?,
        None => Route::Dashboard,
    };
    let theme = Theme::load(&config.theme).unwrap_or_else(|| {
        log::warn!(
            "theme {} not found, using default (available: {})",
            config.theme,
            Theme::available_themes().join(", ")
        );
        Theme::default()
    });
    let theme: &'static Theme = Box::leak(Box::new(theme));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::new(Duration::from_millis(100));
    let dispatcher = ThreadDispatcher::new(client, events.sender());
    let mut app = App::new(config, theme, Box::new(dispatcher), start);

    let result = run_app(&mut terminal, &mut app, &events);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        log::error!("{err:#}");
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

fn run_command(client: &ApiClient, command: CliCommand) -> Result<()> {
    let request = match command {
        CliCommand::Register { english, japanese } => ApiRequest::Register { english, japanese },
        CliCommand::Delete { id } => ApiRequest::Delete { pkey: id },
    };
    let reply = client.execute(&request)?;
    match serde_json::from_value::<ServerMessage>(reply) {
        Ok(message) => println!("{}", message.msg),
        Err(_) => println!("ok"),
    }
    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    loop {
        let captured = {
            let frame = terminal.draw(|frame| render(frame, app))?;
            app.take_snapshot_request()
                .then(|| snapshot::buffer_to_text(frame.buffer))
        };
        if let Some(text) = captured {
            app.save_snapshot(&text);
            continue;
        }

        match events.next()? {
            AppEvent::Key(key) => handle_key(app, key),
            AppEvent::Api(event) => app.handle_api(event),
            AppEvent::Resize(_, _) => {}
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    // The error modal owns the keyboard until acknowledged.
    if app.is_failed() {
        if let Some(command) = app.modal_command(key.code) {
            app.execute(command);
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Char(ch) if Route::from_key(ch).is_some() => {
            if let Some(route) = Route::from_key(ch) {
                app.navigate(route);
            }
        }
        KeyCode::Tab => app.navigate(app.route.next()),
        KeyCode::BackTab => app.navigate(app.route.prev()),
        KeyCode::Up | KeyCode::Char('k') => app.move_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_down(),
        _ => match app.route {
            Route::Dashboard => handle_dashboard_key(app, key),
            Route::Learning => handle_learning_key(app, key),
            Route::EnglishList | Route::Bookmark => handle_list_key(app, key),
            Route::Activity => {}
        },
    }
}

fn handle_dashboard_key(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Char('s') {
        app.request_snapshot();
    }
}

fn handle_learning_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => app.answer_selected(),
        KeyCode::Char('b') => app.bookmark_current(),
        KeyCode::Char('n') | KeyCode::Right => app.next_item(),
        KeyCode::Char('p') => app.pronounce(),
        _ => {}
    }
}

fn handle_list_key(app: &mut App, key: KeyEvent) {
    if matches!(key.code, KeyCode::Char('p') | KeyCode::Enter) {
        app.pronounce();
    }
}

fn render(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;
    frame.render_widget(
        Block::default().style(Style::default().bg(colors.bg()).fg(colors.fg())),
        area,
    );

    let notice = app.notice();
    let footer = Footer::new(app.hints(), notice.as_deref(), app.theme);
    let layout = AppLayout::new(area, footer.height(area.width));

    frame.render_widget(Header::new(app.route, app.theme), layout.header);

    if app.is_failed() {
        frame.render_widget(ErrorModal::new(app.theme), layout.body);
    } else {
        render_screen(frame, app, layout.body, layout.tier);
    }

    frame.render_widget(footer, layout.footer);
}

fn render_screen(frame: &mut ratatui::Frame, app: &App, area: Rect, tier: LayoutTier) {
    let heading = Heading::primary(app.route.title(), app.theme);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(heading.height()), Constraint::Min(0)])
        .split(area);
    frame.render_widget(heading, chunks[0]);
    let body = chunks[1];

    match &app.screen {
        Screen::Dashboard(view) => {
            if let Some(summary) = view.summary() {
                frame.render_widget(DashboardPanel::new(summary, tier, app.theme), body);
            }
        }
        Screen::Learning(view) => {
            if let Some(session) = view.session() {
                frame.render_widget(LearningCard::new(session, view.cursor, app.theme), body);
            }
        }
        Screen::EnglishList(view) => {
            if view.state.loaded().is_some() {
                let table = DataTable::new(app.route.title(), view.rows(), view.selected, app.theme);
                frame.render_widget(table, body);
            }
        }
        Screen::Bookmark(view) => {
            if view.state.loaded().is_some() {
                let table = DataTable::new(app.route.title(), view.rows(), view.selected, app.theme);
                frame.render_widget(table, body);
            }
        }
        Screen::Activity(view) => {
            if view.state.loaded().is_some() {
                let table = DataTable::new(app.route.title(), view.rows(), view.selected, app.theme);
                frame.render_widget(table, body);
            }
        }
    }
}
