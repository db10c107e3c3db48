//! Freewrite - a minimalist plain-text writing core
//!
//! This crate provides the text buffer, find/replace engine, and line/column
//! resolution for a single-document writing tool, wired together with the
//! Elm Architecture pattern.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod editable;
pub mod messages;
pub mod model;
pub mod runtime;
pub mod search;
pub mod tracing;
pub mod update;
pub mod util;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::EditorConfig;
pub use messages::Msg;
pub use model::AppModel;
pub use search::{FindOutcome, SearchEngine, WrapPolicy};
