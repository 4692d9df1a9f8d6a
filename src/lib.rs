//! Minimal image viewer: open a PNG/JPEG, show it next to its inverted copy,
//! save the result as a bitmap.

pub mod app;
pub mod config;
pub mod data;
pub mod dialog;
pub mod state;
pub mod ui;
pub mod viewport;
