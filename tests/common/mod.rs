//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use freewrite::commands::Cmd;
use freewrite::config::EditorConfig;
use freewrite::editable::{Selection, TextBuffer};
use freewrite::messages::Msg;
use freewrite::model::{AppModel, Document};
use freewrite::search::WrapPolicy;
use freewrite::update::update;

/// Create a test model with given text and selection
pub fn test_model(text: &str, location: usize, length: usize) -> AppModel {
    let mut model = AppModel::new(EditorConfig::default());
    model.document = Document::with_text(text);
    model.document.set_selection(Selection::new(location, length));
    model
}

/// Like [`test_model`] with the legacy wraparound policy
pub fn legacy_model(text: &str, location: usize, length: usize) -> AppModel {
    let mut model = test_model(text, location, length);
    model.config.wrap_policy = WrapPolicy::Legacy;
    model
}

/// Helper to get buffer content as string
pub fn buffer_to_string(model: &AppModel) -> String {
    model.document.buffer.content()
}

/// Current selection as a character range
pub fn selection_range(model: &AppModel) -> std::ops::Range<usize> {
    model.document.selection.range()
}

/// Run messages through `update`, returning the last command
pub fn run(model: &mut AppModel, msgs: impl IntoIterator<Item = Msg>) -> Option<Cmd> {
    let mut last = None;
    for msg in msgs {
        last = update(model, msg);
    }
    last
}

/// Set the find/replace fields
pub fn with_query(model: &mut AppModel, query: &str, replacement: &str) {
    run(
        model,
        [Msg::set_query(query), Msg::set_replacement(replacement)],
    );
}
