// Library target holds the whole client so that integration tests can drive
// `App` and the API layer directly. The binary in main.rs owns the terminal.

rust_i18n::i18n!("locales", fallback = "en");

pub mod api;
pub mod app;
pub mod config;
pub mod event;
pub mod logging;
pub mod route;
pub mod session;
pub mod snapshot;
pub mod speech;
pub mod ui;
pub mod view;
