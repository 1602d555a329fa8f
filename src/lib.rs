// Public library interface for integration tests and embedding.
pub mod actions;
pub mod app;
pub mod config;
pub mod core;
pub mod input;
pub mod keymap;
pub mod runtime;
pub mod runtime_util;
pub mod trace;
pub mod ui;

pub use app::App;
