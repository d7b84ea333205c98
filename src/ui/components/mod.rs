pub mod button;
pub mod chart;
pub mod dashboard;
pub mod data_table;
pub mod footer;
pub mod header;
pub mod heading;
pub mod learning_card;
pub mod modal;
pub mod progress_bar;
