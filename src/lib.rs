//! TUI 2048 (workspace facade crate).
//!
//! Exposes `tui_2048::{core,engine,input,types}` while the implementation lives
//! in dedicated crates under `crates/`. The runner-only pieces (`config`,
//! `screen`) live here.

pub mod config;
pub mod screen;

pub use tui_2048_core as core;
pub use tui_2048_engine as engine;
pub use tui_2048_input as input;
pub use tui_2048_types as types;
